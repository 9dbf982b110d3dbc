use colored::Colorize;
use frontdesk_core::{Frontdesk, StoreConfig};
use log::error;

mod admin;
mod customer;
mod logging;
mod prompt;

fn main() {
    logging::init_logger();

    match Frontdesk::initialize(StoreConfig::default()) {
        Ok(mut frontdesk) => run(&mut frontdesk),
        Err(error) => {
            error!(
                "{} The store files in the working directory could not be read.",
                "Frontdesk failed to start!".bold()
            );
            error!("{error}");
        }
    }
}

fn run(frontdesk: &mut Frontdesk) {
    println!("\nHello! I'm your friendly hotel front desk. How can I assist you today?");

    loop {
        println!("\n[Main Menu]");
        println!("1. Admin Login");
        println!("2. Customer Menu");
        println!("3. Exit");

        match prompt::read_line("\nPlease type your choice (e.g., 1, 2, or 3): ").as_str() {
            "1" => admin::login(frontdesk),
            "2" => customer::menu(frontdesk),
            "3" => {
                if let Err(e) = frontdesk.shutdown() {
                    error!("Failed to flush stores: {e}");
                }

                println!("Thank you for visiting. Have a great day!");
                return;
            }
            _ => println!("Oops! I didn't catch that. Please enter a valid choice."),
        }
    }
}
