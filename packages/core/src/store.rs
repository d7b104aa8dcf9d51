//! In-memory credential store
//!
//! Accounts are keyed by phone number, treated as an opaque identifier with
//! no format validation. Nothing is persisted - the store lives and dies
//! with the process.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// A registered credential record.
///
/// The master secret is held as plaintext. That is faithful to the program
/// this reimplements and is called out in the crate docs; do not treat this
/// store as a secure vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub master_secret: String,
}

/// Why authentication was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No account is registered under the given phone number.
    #[error("phone number is not registered")]
    UnknownPhone,

    /// The account exists but the secret does not match.
    #[error("incorrect master secret")]
    WrongSecret,
}

/// Shape check for email addresses: must contain `@` and end with `.com`.
///
/// The suffix match is case-insensitive, so `user@host.COM` is accepted.
/// This is deliberately a shape check, not RFC validation.
pub fn email_has_valid_shape(email: &str) -> bool {
    email.contains('@') && email.to_ascii_lowercase().ends_with(".com")
}

/// Phone-keyed account map. Process-scoped, starts empty.
#[derive(Debug, Default)]
pub struct CredentialStore {
    accounts: HashMap<String, Account>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the account registered under `phone`.
    ///
    /// Re-registering an existing phone silently replaces the prior account.
    /// Known gap, kept on purpose; see DESIGN.md.
    pub fn register(&mut self, phone: &str, email: &str, master_secret: &str) {
        debug!(phone, "registering account");
        self.accounts.insert(
            phone.to_string(),
            Account {
                email: email.to_string(),
                master_secret: master_secret.to_string(),
            },
        );
    }

    /// Check `secret` against the account registered under `phone`.
    ///
    /// Comparison is exact string equality.
    pub fn authenticate(&self, phone: &str, secret: &str) -> Result<&Account, AuthError> {
        let account = self.accounts.get(phone).ok_or(AuthError::UnknownPhone)?;
        if account.master_secret != secret {
            return Err(AuthError::WrongSecret);
        }
        Ok(account)
    }

    /// Look up the account registered under `phone`, if any.
    pub fn get(&self, phone: &str) -> Option<&Account> {
        self.accounts.get(phone)
    }

    /// Return the stored master secret when both phone and email match
    /// an account exactly.
    ///
    /// This discloses the secret in full - an insecure recovery flow kept
    /// for fidelity to the original program. See the crate docs.
    pub fn recover(&self, phone: &str, email: &str) -> Option<&str> {
        self.accounts
            .get(phone)
            .filter(|account| account.email == email)
            .map(|account| account.master_secret.as_str())
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
