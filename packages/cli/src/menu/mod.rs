//! Interactive session menus
//!
//! Drives the session controller through line-oriented prompts. The menus
//! are only a driver: every state transition and validation rule lives in
//! `randomlock-core`, and any recoverable failure prints a message and
//! re-presents the menu.

mod generate;
mod login;
mod recover;
mod register;

use anyhow::Result;
use console::style;
use dialoguer::Select;
use randomlock_core::{CredentialStore, SecretVault, SessionController};

use crate::output;

/// Run the interactive session: main menu until the user exits.
///
/// Every run starts anonymous with empty stores; nothing survives the
/// process.
pub fn run_session(quiet: bool) -> Result<()> {
    let mut ctl = SessionController::new(CredentialStore::new(), SecretVault::new());

    if !quiet {
        println!();
        println!(
            "{} Accounts and stored passwords are kept in memory as plaintext and are lost on exit.",
            style("Warning:").yellow().bold()
        );
        println!();
    }

    loop {
        let choice = Select::new()
            .with_prompt("Main menu")
            .items(&["Register", "Log in", "Recover master secret", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => register::run(&mut ctl)?,
            1 => {
                if login::run(&mut ctl)? {
                    user_menu(&mut ctl)?;
                }
            }
            2 => recover::run(&ctl)?,
            _ => break,
        }
    }

    println!("{}", style("Goodbye!").cyan());
    Ok(())
}

/// Authenticated menu; returns once the user logs out.
fn user_menu(ctl: &mut SessionController) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("User menu")
            .items(&["View profile", "Password tools", "Log out"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let profile = ctl.profile()?;
                output::print_profile(&profile);
            }
            1 => generate::password_tools(ctl)?,
            _ => {
                ctl.logout();
                break;
            }
        }
    }
    Ok(())
}
