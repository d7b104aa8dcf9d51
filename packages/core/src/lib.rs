//! Core library for randomlock
//!
//! Owns the password generation engine, the in-memory credential store, the
//! labeled secret vault, and the session state machine that ties them
//! together. No terminal or clipboard code lives here - the CLI crate drives
//! these types through their public APIs, which keeps every state transition
//! unit-testable.
//!
//! # Security posture
//!
//! This crate reproduces the behavior of a teaching-oriented credential
//! utility and is **not hardened**:
//!
//! - Master secrets are stored and compared as plaintext strings.
//! - [`CredentialStore::recover`] discloses the full master secret on a
//!   phone + email match.
//! - [`generator`] uses a general-purpose PRNG and makes no cryptographic
//!   strength claim.
//!
//! Do not rely on it for real secrets.

pub mod generator;
pub mod session;
pub mod store;
pub mod vault;

pub use generator::{CharacterClasses, GenerateError, MIN_LENGTH, generate, generate_with};
pub use session::{Profile, Session, SessionController, SessionError};
pub use store::{Account, AuthError, CredentialStore, email_has_valid_shape};
pub use vault::SecretVault;

/// Crate version, for CLI banners.
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
