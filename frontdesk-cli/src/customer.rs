use frontdesk_core::{Customer, Frontdesk};
use log::error;

use crate::prompt;

pub fn menu(frontdesk: &mut Frontdesk) {
    println!("\nWhether you're new here or a returning guest, I'm here to help you book your stay!");

    loop {
        println!("\n[Customer Menu]");
        println!("1. Sign Up");
        println!("2. Login");
        println!("3. Back");

        match prompt::read_line("\nPlease type 1, 2, or 3: ").as_str() {
            "1" => sign_up(frontdesk),
            "2" => login(frontdesk),
            "3" => return,
            _ => println!("Hmm, I didn't quite catch that. Could you type 1, 2, or 3?"),
        }
    }
}

fn sign_up(frontdesk: &mut Frontdesk) {
    let username = prompt::read_line("Enter username: ");

    if frontdesk.directory.exists(&username) {
        println!("Username already exists. Please choose a different username.");
        return;
    }

    let password = prompt::read_line("Enter password: ");

    match frontdesk.directory.create(&username, &password) {
        Ok(()) => {
            println!("Sign-up successful!");

            if let Err(e) = frontdesk.save_customers() {
                error!("Failed to save customers: {e}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn login(frontdesk: &mut Frontdesk) {
    let username = prompt::read_line("Enter username: ");
    let password = prompt::read_line("Enter password: ");

    if username.is_empty() || password.is_empty() {
        println!("Username and password cannot be empty. Please try again.");
        return;
    }

    match frontdesk.directory.authenticate(&username, &password) {
        Ok(_) => {
            println!("Login successful!");
            dashboard(frontdesk, &username);
        }
        Err(e) => println!("{e}"),
    }
}

fn dashboard(frontdesk: &mut Frontdesk, username: &str) {
    loop {
        println!("\nHello, {username}! What would you like to do today?");
        println!("1. View Room Availability");
        println!("2. Book a Room");
        println!("3. Checkout");
        println!("4. Cancel a Booking");
        println!("5. Exit");

        match prompt::read_line("Please enter your choice: ").as_str() {
            "1" => view_availability(frontdesk),
            "2" => book_room(frontdesk, username),
            "3" => checkout(frontdesk, username),
            "4" => cancel(frontdesk, username),
            "5" => {
                println!("Goodbye! Thank you for choosing our hotel.");
                return;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }
}

pub fn view_availability(frontdesk: &Frontdesk) {
    println!("\nHere's the current status of our rooms:");

    for (name, room) in frontdesk.inventory.all() {
        println!(
            "\n{name}: {} rooms available at ${}/night",
            room.count, room.price
        );
        println!("Amenities: {}", room.amenities.join(", "));

        if room.count == 0 {
            println!("This room type is fully booked at the moment, check back later!");
        } else if room.count <= 3 {
            println!("Rooms are filling up fast, grab one before they're all gone!");
        }
    }
}

fn book_room(frontdesk: &mut Frontdesk, username: &str) {
    let room_type = prompt::read_line("Enter room type to book (Standard/Deluxe/Suite): ");
    let nights: i64 = prompt::read_number("Enter number of nights: ");

    // Show the cost up front so the guest confirms with full information
    if let Ok(room) = frontdesk.inventory.get(&room_type.to_uppercase()) {
        println!("Total cost: ${}", room.price * nights);
    }

    if !prompt::confirm("Confirm booking? (yes/no): ") {
        println!("Booking canceled.");
        return;
    }

    match frontdesk.ledger().book_room(username, &room_type, nights) {
        Ok(receipt) => println!(
            "Room booked successfully! Room Number: {}",
            receipt.room_number
        ),
        Err(e) => println!("{e}"),
    }
}

fn checkout(frontdesk: &mut Frontdesk, username: &str) {
    let Some(index) = select_booking(frontdesk, username, "check out") else {
        return;
    };

    match frontdesk.ledger().checkout(username, index) {
        Ok(booking) => {
            println!("\n==========================================");
            println!("               HOTEL RECEIPT              ");
            println!("==========================================");
            println!("Customer Name: {username}");
            println!("------------------------------------------");
            println!("Room Number    : {}", booking.room_number);
            println!("Room Type      : {}", booking.room_type);
            println!("Check-in Time  : {}", booking.reserved_at);
            println!("Checkout Time  : {}", booking.checkout_at);
            println!("Nights Stayed  : {}", booking.nights);
            println!("Total Cost     : ${}", booking.total_cost);
            println!("------------------------------------------");
            println!("Thank you for staying with us!");
            println!("==========================================");
        }
        Err(e) => println!("{e}"),
    }
}

pub fn cancel(frontdesk: &mut Frontdesk, username: &str) {
    let Some(index) = select_booking(frontdesk, username, "cancel") else {
        return;
    };

    if !prompt::confirm("Are you sure you want to cancel this booking? (yes/no): ") {
        println!("Booking cancellation aborted.");
        return;
    }

    match frontdesk.ledger().cancel(username, index) {
        Ok(notice) => {
            println!("Booking successfully canceled.");
            println!("Nights Stayed : {}", notice.nights_stayed);
            println!("Refund Amount : ${}", notice.refund);
        }
        Err(e) => println!("{e}"),
    }
}

/// Lists the customer's bookings and asks which one to act on.
/// Returns `None` when there is nothing to select or the guest backs out.
fn select_booking(frontdesk: &Frontdesk, username: &str, action: &str) -> Option<usize> {
    let customer = match frontdesk.directory.get(username) {
        Ok(customer) => customer,
        Err(e) => {
            println!("{e}");
            return None;
        }
    };

    if customer.bookings.is_empty() {
        println!("You have no active bookings to {action}.");
        return None;
    }

    list_bookings(customer);

    let choice: usize =
        prompt::read_number(&format!("\nSelect a reservation to {action} (0 to return): "));

    if choice == 0 || choice > customer.bookings.len() {
        if choice != 0 {
            println!("Invalid selection. Returning to menu...");
        }
        return None;
    }

    Some(choice - 1)
}

pub fn list_bookings(customer: &Customer) {
    println!("\nYour Reservations:");

    for (i, booking) in customer.bookings.iter().enumerate() {
        println!(
            "{}. Room Number: {} | {} - {} nights (Check-in: {}, Total: ${})",
            i + 1,
            booking.room_number,
            booking.room_type,
            booking.nights,
            booking.reserved_at,
            booking.total_cost
        );
    }
}
