//! Login flow
//!
//! Authenticates against the credential store. The specific rejection
//! reason is shown; there is no retry limit or lockout.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password};
use randomlock_core::{AuthError, SessionController};

/// Prompt for credentials and attempt a login.
///
/// Returns whether the session is now authenticated.
pub fn run(ctl: &mut SessionController) -> Result<bool> {
    println!("{}", style("-- Log in --").bold());

    let phone: String = Input::new()
        .with_prompt("Phone number")
        .interact_text()?;

    let secret = Password::new()
        .with_prompt("Master secret")
        .interact()?;

    match ctl.login(&phone, &secret) {
        Ok(()) => {
            println!();
            println!("{} Welcome to RandomLock!", style("Success:").green().bold());
            println!();
            Ok(true)
        }
        Err(AuthError::UnknownPhone) => {
            println!();
            println!("{}", style("Phone number is not registered.").red());
            println!();
            Ok(false)
        }
        Err(AuthError::WrongSecret) => {
            println!();
            println!("{}", style("Incorrect master secret.").red());
            println!();
            Ok(false)
        }
    }
}
