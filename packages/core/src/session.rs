//! Session state machine
//!
//! Makes the Anonymous/Authenticated distinction an explicit tagged state
//! instead of nested menu loops, so every transition can be exercised
//! without driving a terminal. The controller owns the credential store and
//! the secret vault, both injected at construction - there is no ambient
//! module state.

use thiserror::Error;
use tracing::{debug, info};

use crate::generator::{self, CharacterClasses, GenerateError};
use crate::store::{AuthError, CredentialStore};
use crate::vault::SecretVault;

/// Current session state. Single interactive user, so at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated { phone: String },
}

/// Phone + email pair shown by the profile view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub phone: String,
    pub email: String,
}

/// Failures surfaced by session operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The operation requires an authenticated session.
    #[error("not logged in")]
    NotAuthenticated,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Orchestrates registration, authentication, and the authenticated action
/// set over the injected stores.
#[derive(Debug)]
pub struct SessionController {
    store: CredentialStore,
    vault: SecretVault,
    session: Session,
}

impl SessionController {
    /// Start at `Anonymous` over the given stores.
    pub fn new(store: CredentialStore, vault: SecretVault) -> Self {
        Self {
            store,
            vault,
            session: Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated { .. })
    }

    /// Register an account. Does not log the user in.
    pub fn register(&mut self, phone: &str, email: &str, master_secret: &str) {
        self.store.register(phone, email, master_secret);
    }

    /// Authenticate and, on success, move to `Authenticated(phone)`.
    ///
    /// On failure the session stays `Anonymous` and the specific rejection
    /// reason is returned.
    pub fn login(&mut self, phone: &str, secret: &str) -> Result<(), AuthError> {
        self.store.authenticate(phone, secret)?;
        info!(phone, "login");
        self.session = Session::Authenticated {
            phone: phone.to_string(),
        };
        Ok(())
    }

    /// Return to `Anonymous`. A no-op when already anonymous.
    pub fn logout(&mut self) {
        if let Session::Authenticated { ref phone } = self.session {
            info!(phone, "logout");
        }
        self.session = Session::Anonymous;
    }

    /// Recovery lookup; available without authentication.
    pub fn recover(&self, phone: &str, email: &str) -> Option<&str> {
        self.store.recover(phone, email)
    }

    /// Phone and email of the logged-in account. No state change.
    pub fn profile(&self) -> Result<Profile, SessionError> {
        let phone = self.authenticated_phone()?;
        let account = self
            .store
            .get(phone)
            .expect("authenticated session always has a backing account");
        Ok(Profile {
            phone: phone.to_string(),
            email: account.email.clone(),
        })
    }

    /// Generate a password for the logged-in user.
    ///
    /// Generation failures are returned to the caller and leave the session
    /// state untouched.
    pub fn generate_password(
        &self,
        length: usize,
        classes: CharacterClasses,
    ) -> Result<String, SessionError> {
        self.authenticated_phone()?;
        debug!(length, "generating password");
        Ok(generator::generate(length, classes)?)
    }

    /// Retain a generated password under `label`. Explicit opt-in only -
    /// the driver calls this after the user confirms.
    pub fn retain_password(&mut self, label: &str, password: &str) -> Result<(), SessionError> {
        self.authenticated_phone()?;
        self.vault.store(label, password);
        Ok(())
    }

    /// All retained (label, password) pairs, insertion order.
    pub fn stored_passwords(&self) -> Result<&[(String, String)], SessionError> {
        self.authenticated_phone()?;
        Ok(self.vault.entries())
    }

    fn authenticated_phone(&self) -> Result<&str, SessionError> {
        match self.session {
            Session::Authenticated { ref phone } => Ok(phone),
            Session::Anonymous => Err(SessionError::NotAuthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MIN_LENGTH;

    fn controller_with_account() -> SessionController {
        let mut store = CredentialStore::new();
        store.register("123", "a@b.com", "x");
        SessionController::new(store, SecretVault::new())
    }

    #[test]
    fn starts_anonymous_with_empty_stores() {
        let ctl = SessionController::new(CredentialStore::new(), SecretVault::new());
        assert_eq!(ctl.session(), &Session::Anonymous);
        assert!(!ctl.is_authenticated());
    }

    #[test]
    fn register_does_not_log_in() {
        let mut ctl = SessionController::new(CredentialStore::new(), SecretVault::new());
        ctl.register("123", "a@b.com", "x");
        assert_eq!(ctl.session(), &Session::Anonymous);
    }

    #[test]
    fn login_moves_to_authenticated_on_success() {
        let mut ctl = controller_with_account();
        ctl.login("123", "x").unwrap();
        assert_eq!(
            ctl.session(),
            &Session::Authenticated {
                phone: "123".to_string()
            }
        );
    }

    #[test]
    fn failed_login_stays_anonymous_with_reason() {
        let mut ctl = controller_with_account();

        assert_eq!(ctl.login("123", "y"), Err(AuthError::WrongSecret));
        assert_eq!(ctl.session(), &Session::Anonymous);

        assert_eq!(ctl.login("999", "x"), Err(AuthError::UnknownPhone));
        assert_eq!(ctl.session(), &Session::Anonymous);
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut ctl = controller_with_account();
        ctl.login("123", "x").unwrap();
        ctl.logout();
        assert_eq!(ctl.session(), &Session::Anonymous);
    }

    #[test]
    fn profile_reflects_logged_in_account() {
        let mut ctl = controller_with_account();
        ctl.login("123", "x").unwrap();

        let profile = ctl.profile().unwrap();
        assert_eq!(profile.phone, "123");
        assert_eq!(profile.email, "a@b.com");
        // no-op transition
        assert!(ctl.is_authenticated());
    }

    #[test]
    fn authenticated_operations_require_login() {
        let ctl = controller_with_account();
        assert_eq!(ctl.profile(), Err(SessionError::NotAuthenticated));
        assert_eq!(
            ctl.generate_password(12, CharacterClasses::all()),
            Err(SessionError::NotAuthenticated)
        );
        assert_eq!(ctl.stored_passwords(), Err(SessionError::NotAuthenticated));
    }

    #[test]
    fn generation_failure_leaves_session_authenticated() {
        let mut ctl = controller_with_account();
        ctl.login("123", "x").unwrap();

        let err = ctl
            .generate_password(MIN_LENGTH - 1, CharacterClasses::all())
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Generate(GenerateError::LengthTooShort { .. })
        ));
        assert!(ctl.is_authenticated());

        let err = ctl
            .generate_password(12, CharacterClasses::default())
            .unwrap_err();
        assert_eq!(err, SessionError::Generate(GenerateError::NoClassSelected));
        assert!(ctl.is_authenticated());
    }

    #[test]
    fn retained_passwords_are_listed() {
        let mut ctl = controller_with_account();
        ctl.login("123", "x").unwrap();

        ctl.retain_password("bank", "s3cret!").unwrap();
        let stored = ctl.stored_passwords().unwrap();
        assert_eq!(stored, &[("bank".to_string(), "s3cret!".to_string())]);
    }

    #[test]
    fn recover_is_available_anonymously() {
        let ctl = controller_with_account();
        assert_eq!(ctl.recover("123", "a@b.com"), Some("x"));
        assert_eq!(ctl.recover("123", "wrong@b.com"), None);
    }
}
