//! Registration flow
//!
//! Collects phone, email, and a masked master secret. The email prompt
//! re-asks until the shape check passes; the phone is an opaque identifier
//! and is not validated.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password};
use randomlock_core::{SessionController, email_has_valid_shape};

pub fn run(ctl: &mut SessionController) -> Result<()> {
    println!("{}", style("-- Register --").bold());

    let phone: String = Input::new()
        .with_prompt("Phone number")
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email address")
        .validate_with(|input: &String| -> Result<(), String> {
            if email_has_valid_shape(input) {
                Ok(())
            } else {
                Err("Email must contain '@' and end with '.com'".to_string())
            }
        })
        .interact_text()?;

    let master_secret = Password::new()
        .with_prompt("Master secret")
        .interact()?;

    // Re-registering an existing phone silently replaces the account.
    ctl.register(&phone, &email, &master_secret);

    println!();
    println!("{} Registration successful.", style("Success:").green().bold());
    println!();
    Ok(())
}
