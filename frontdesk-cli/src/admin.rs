use frontdesk_core::Frontdesk;
use log::error;

use crate::{customer, prompt};

/// The single hard-coded operator credential. No user hierarchy; the
/// admin is not a customer and holds no bookings.
struct AdminAccount {
    username: &'static str,
    password: &'static str,
}

const ADMIN: AdminAccount = AdminAccount {
    username: "admin",
    password: "admin123",
};

pub fn login(frontdesk: &mut Frontdesk) {
    let username = prompt::read_line("Enter admin username: ");
    let password = prompt::read_line("Enter password: ");

    if username == ADMIN.username && password == ADMIN.password {
        println!("Admin login successful!");
        menu(frontdesk);
    } else {
        println!("Invalid admin credentials.");
    }
}

fn menu(frontdesk: &mut Frontdesk) {
    loop {
        println!("\n[Admin Menu]");
        println!("1. View All Customers");
        println!("2. Search Customer");
        println!("3. Update Room Details");
        println!("4. View Room Availability");
        println!("5. Exit");

        match prompt::read_line("Enter choice: ").as_str() {
            "1" => view_all_customers(frontdesk),
            "2" => search_customer(frontdesk),
            "3" => change_room_details(frontdesk),
            "4" => customer::view_availability(frontdesk),
            "5" => return,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn view_all_customers(frontdesk: &Frontdesk) {
    if frontdesk.directory.is_empty() {
        println!("No customers found.");
        return;
    }

    println!("\nAll Registered Customers:");

    for customer in frontdesk.directory.all() {
        println!("Username: {}", customer.username);
        println!("Bookings: {}", customer.bookings.len());
        println!("----------------------------------");
    }
}

fn search_customer(frontdesk: &mut Frontdesk) {
    let username = prompt::read_line("Enter username to search: ");

    if !frontdesk.directory.exists(&username) {
        println!("Customer not found.");
        return;
    }

    println!("\nCustomer found: {username}");
    println!("1. View Booking History");
    println!("2. Change Customer Password");
    println!("3. Delete Customer Account");
    println!("4. Exit");

    match prompt::read_line("Select an action: ").as_str() {
        "1" => booking_history(frontdesk, &username),
        "2" => change_password(frontdesk, &username),
        "3" => delete_account(frontdesk, &username),
        "4" => {}
        _ => println!("Invalid choice. Returning to admin menu..."),
    }
}

/// Shows a customer's bookings and offers to cancel one on their behalf.
fn booking_history(frontdesk: &mut Frontdesk, username: &str) {
    let has_bookings = frontdesk
        .directory
        .get(username)
        .map(|c| !c.bookings.is_empty())
        .unwrap_or(false);

    if !has_bookings {
        println!("No bookings found for this customer.");
        return;
    }

    println!("Booking History for {username}:");
    customer::cancel(frontdesk, username);
}

fn change_password(frontdesk: &mut Frontdesk, username: &str) {
    let new_password = prompt::read_line(&format!("Enter new password for {username}: "));

    match frontdesk.directory.set_password(username, &new_password) {
        Ok(()) => {
            println!("Password updated successfully.");

            if let Err(e) = frontdesk.save_customers() {
                error!("Failed to save customers: {e}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn delete_account(frontdesk: &mut Frontdesk, username: &str) {
    if !prompt::confirm("Are you sure you want to delete this customer account? (yes/no): ") {
        println!("Deletion cancelled.");
        return;
    }

    match frontdesk.directory.delete(username) {
        Ok(()) => {
            println!("Customer account deleted successfully.");

            // The customer's bookings go with the account
            if let Err(e) = frontdesk
                .save_customers()
                .and_then(|_| frontdesk.save_reservations())
            {
                error!("Failed to save stores: {e}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn change_room_details(frontdesk: &mut Frontdesk) {
    let room_type = prompt::read_line("Enter room type (Standard/Deluxe/Suite): ").to_uppercase();

    if frontdesk.inventory.get(&room_type).is_err() {
        println!("Room type not found.");
        return;
    }

    let price: i64 = prompt::read_number(&format!("Enter new price for {room_type}: "));
    let count: u32 = prompt::read_number(&format!("Enter new room count for {room_type}: "));

    match frontdesk.inventory.set_details(&room_type, price, count) {
        Ok(()) => {
            println!("{room_type} updated successfully!");

            if let Err(e) = frontdesk.save_rooms() {
                error!("Failed to save rooms: {e}");
            }
        }
        Err(e) => println!("{e}"),
    }
}
