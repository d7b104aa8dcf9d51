//! Generate subcommand
//!
//! One-shot password generation for scripting, without the interactive
//! session or the credential store.

use anyhow::Result;
use clap::Args;
use console::style;
use randomlock_core::{CharacterClasses, generate};

use crate::clipboard;
use crate::output;

/// Arguments for the generate command
#[derive(Args)]
#[command(
    after_help = "Tip: When no class flag is given, all four character classes are enabled. Use --quiet to print only the password."
)]
pub struct GenerateArgs {
    /// Password length (minimum 6)
    #[arg(short, long, default_value_t = 12)]
    pub length: usize,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include lowercase letters
    #[arg(long)]
    pub lower: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include special characters
    #[arg(long)]
    pub special: bool,

    /// Copy the password to the system clipboard
    #[arg(short, long)]
    pub copy: bool,
}

/// Resolve class flags: explicit flags win, no flags means all classes.
fn resolve_classes(args: &GenerateArgs) -> CharacterClasses {
    let classes = CharacterClasses {
        upper: args.upper,
        lower: args.lower,
        digit: args.digits,
        special: args.special,
    };
    if classes.is_empty() {
        CharacterClasses::all()
    } else {
        classes
    }
}

/// Generate and print a password
pub fn cmd_generate(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let password = generate(args.length, resolve_classes(args))?;

    if quiet {
        println!("{password}");
    } else {
        println!("  Password: {}", style(&password).cyan());
        output::print_password_notice();
    }

    if args.copy {
        if clipboard::copy_best_effort(&password) {
            if !quiet {
                println!("{}", style("Copied to clipboard.").green());
            }
        } else if !quiet {
            eprintln!("{}", style("Could not copy to clipboard.").yellow());
        }
    }

    Ok(())
}
