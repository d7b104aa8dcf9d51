//! Master secret recovery flow
//!
//! Discloses the stored secret in full when phone and email match. A single
//! combined mismatch message is shown so the prompt does not reveal which
//! of the two was wrong.

use anyhow::Result;
use console::style;
use dialoguer::Input;
use randomlock_core::SessionController;

pub fn run(ctl: &SessionController) -> Result<()> {
    println!("{}", style("-- Recover master secret --").bold());

    let phone: String = Input::new()
        .with_prompt("Phone number")
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email address")
        .interact_text()?;

    match ctl.recover(&phone, &email) {
        Some(secret) => {
            println!();
            println!(
                "The master secret for {} is: {}",
                style(&phone).bold(),
                style(secret).cyan()
            );
            println!();
        }
        None => {
            println!();
            println!("{}", style("Phone number or email incorrect.").red());
            println!();
        }
    }
    Ok(())
}
