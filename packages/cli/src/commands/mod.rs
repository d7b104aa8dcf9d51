//! CLI command implementations
//!
//! The only non-interactive command is `generate`; everything else runs
//! through the interactive session in [`crate::menu`].

mod generate;

pub use generate::{GenerateArgs, cmd_generate};
