use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().expect("stdout flushes");

    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("stdin is readable");

    line.trim().to_string()
}

/// Re-asks until the input parses as the requested number type.
pub fn read_number<T: std::str::FromStr>(prompt: &str) -> T {
    loop {
        match read_line(prompt).parse() {
            Ok(value) => return value,
            Err(_) => println!("That doesn't look like a valid number, please try again."),
        }
    }
}

/// Asks a yes/no question; anything but "yes" counts as no.
pub fn confirm(prompt: &str) -> bool {
    read_line(prompt).to_lowercase() == "yes"
}
