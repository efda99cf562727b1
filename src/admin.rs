//! Admin session.
//!
//! The session flag lives in a memory-only store, so it never outlives the
//! process, like a browser's session storage.

use crate::{content::StorageKey, log, store::ContentStore};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("admin password required")]
    PasswordRequired,

    #[error("wrong admin password")]
    WrongPassword,
}

pub struct AdminSession {
    /// `None` leaves the admin area open
    password: Option<String>,
    session: ContentStore,
}

impl AdminSession {
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.filter(|p| !p.is_empty()),
            session: ContentStore::in_memory(),
        }
    }

    pub const fn requires_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.password.is_none()
            || self.session.get_raw(StorageKey::AdminAuthenticated).as_deref() == Some("true")
    }

    pub fn login(&self, attempt: &str) -> Result<(), AdminError> {
        match &self.password {
            Some(password) if password != attempt => {
                log!("warn"; "admin login rejected");
                Err(AdminError::WrongPassword)
            }
            _ => {
                self.session.set_raw(StorageKey::AdminAuthenticated, "true");
                Ok(())
            }
        }
    }

    pub fn logout(&self) {
        self.session.remove(StorageKey::AdminAuthenticated);
    }

    /// Pass if already signed in, otherwise sign in with `attempt`.
    pub fn authorize(&self, attempt: Option<&str>) -> Result<(), AdminError> {
        if self.is_authenticated() {
            return Ok(());
        }
        self.login(attempt.ok_or(AdminError::PasswordRequired)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let session = AdminSession::new(Some("lumixpert2025".into()));
        assert!(!session.is_authenticated());

        assert_eq!(session.login("falsch"), Err(AdminError::WrongPassword));
        assert!(!session.is_authenticated());

        session.login("lumixpert2025").unwrap();
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_authorize() {
        let session = AdminSession::new(Some("geheim".into()));
        assert_eq!(session.authorize(None), Err(AdminError::PasswordRequired));
        assert_eq!(session.authorize(Some("nope")), Err(AdminError::WrongPassword));
        session.authorize(Some("geheim")).unwrap();
        // Signed in now
        session.authorize(None).unwrap();
    }

    #[test]
    fn test_no_password_configured() {
        let session = AdminSession::new(Some(String::new()));
        assert!(!session.requires_password());
        assert!(session.is_authenticated());
        session.authorize(None).unwrap();
    }
}
