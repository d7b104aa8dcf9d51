//! Password tools submenu
//!
//! Generation flow: length, class confirms, label, then generate. The
//! password is shown, copied to the clipboard best-effort, and retained in
//! the vault only on explicit confirmation.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select};
use randomlock_core::{CharacterClasses, SessionController};

use crate::clipboard;
use crate::output;

/// Parse a length answer. `None` means the sub-flow should abort back to
/// the menu with a message, not re-prompt.
fn parse_length(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

pub fn password_tools(ctl: &mut SessionController) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("Password tools")
            .items(&["Generate new password", "View stored passwords", "Back"])
            .default(0)
            .interact()?;

        match choice {
            0 => generate_flow(ctl)?,
            1 => view_stored(ctl)?,
            _ => break,
        }
    }
    Ok(())
}

fn generate_flow(ctl: &mut SessionController) -> Result<()> {
    println!("{}", style("-- Generate new password --").bold());

    let raw: String = Input::new()
        .with_prompt("Password length")
        .interact_text()?;
    let Some(length) = parse_length(&raw) else {
        // Bad input aborts the sub-flow back to the menu.
        println!("{}", style("Enter a whole number for the length.").red());
        return Ok(());
    };

    let classes = CharacterClasses {
        upper: Confirm::new()
            .with_prompt("Include uppercase letters?")
            .default(true)
            .interact()?,
        lower: Confirm::new()
            .with_prompt("Include lowercase letters?")
            .default(true)
            .interact()?,
        digit: Confirm::new()
            .with_prompt("Include digits?")
            .default(true)
            .interact()?,
        special: Confirm::new()
            .with_prompt("Include special characters?")
            .default(false)
            .interact()?,
    };

    let label: String = Input::new()
        .with_prompt("Who or what is this password for?")
        .interact_text()?;

    // Length and class policy are enforced by the generator; a refusal
    // prints the reason and returns to the menu.
    let password = match ctl.generate_password(length, classes) {
        Ok(password) => password,
        Err(err) => {
            println!("{}", style(err).red());
            return Ok(());
        }
    };

    output::print_generated_password(&label, &password);

    if clipboard::copy_best_effort(&password) {
        println!("{}", style("Copied to clipboard.").green());
    } else {
        println!("{}", style("Could not copy to clipboard.").yellow());
    }

    let keep = Confirm::new()
        .with_prompt("Store this password for later?")
        .default(false)
        .interact()?;
    if keep {
        ctl.retain_password(&label, &password)?;
        println!(
            "{} Password stored for {}.",
            style("Success:").green().bold(),
            style(&label).bold()
        );
    }

    Ok(())
}

fn view_stored(ctl: &SessionController) -> Result<()> {
    println!("{}", style("-- Stored passwords --").bold());
    let entries = ctl.stored_passwords()?;
    if entries.is_empty() {
        println!("{}", style("No generated passwords stored yet.").dim());
    } else {
        output::print_stored_passwords(entries);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_accepts_plain_numbers() {
        assert_eq!(parse_length("12"), Some(12));
        assert_eq!(parse_length(" 6 "), Some(6));
    }

    #[test]
    fn parse_length_rejects_non_numeric_input() {
        assert_eq!(parse_length("twelve"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("12.5"), None);
        assert_eq!(parse_length("-3"), None);
    }
}
