//! Terminal output helpers
//!
//! Styled password display and table rendering for the profile and the
//! stored-password listing.

use comfy_table::{Cell, Table};
use console::style;
use randomlock_core::Profile;

/// Print a generated password with the standard warning.
pub fn print_generated_password(label: &str, password: &str) {
    println!();
    println!(
        "  Password for {}: {}",
        style(label).bold(),
        style(password).cyan()
    );
    println!();
    print_password_notice();
}

/// Print the standard password warning message.
pub fn print_password_notice() {
    println!(
        "{}",
        style("Generated with a general-purpose PRNG - not hardened for high-value secrets.").dim()
    );
}

/// Render the logged-in account's profile.
pub fn print_profile(profile: &Profile) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.add_row(vec![Cell::new("Phone:"), Cell::new(&profile.phone)]);
    table.add_row(vec![Cell::new("Email:"), Cell::new(&profile.email)]);
    println!("{table}");
}

/// Render the stored-password listing.
///
/// The caller is responsible for the empty-vault message; this expects at
/// least one entry.
pub fn print_stored_passwords(entries: &[(String, String)]) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    for (label, password) in entries {
        table.add_row(vec![Cell::new(format!("{label}:")), Cell::new(password)]);
    }
    println!("{table}");
}
