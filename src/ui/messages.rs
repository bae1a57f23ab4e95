use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_MAGENTA: &str = "\x1b[35m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_BELL: &str = "🔔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Warnings go to stderr so they never mix with listings.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
}

/// Titled confirmation, the terminal counterpart of an alert dialog.
pub fn dialog<T: fmt::Display, B: fmt::Display>(title: T, body: B) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, title, RESET);
    for line in body.to_string().lines() {
        println!("   {}", line);
    }
}

/// Delivered reminder.
pub fn notification<T: fmt::Display, B: fmt::Display>(title: T, body: B) {
    println!("\x07{}{}{} {}{}  {}", FG_MAGENTA, BOLD, ICON_BELL, title, RESET, body);
}
