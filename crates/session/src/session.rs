use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mock authentication session.
///
/// `login` marks the session authenticated without validating credentials;
/// this is an intentionally absent concern, not a defect to fix here. The
/// timestamp is supplied by the caller so the type stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    authenticated: bool,
    email: Option<String>,
    logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Email of the mock identity, when authenticated.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    /// Authenticate unconditionally. The password is accepted as-is.
    pub fn login(&mut self, email: impl Into<String>, _password: &str, at: DateTime<Utc>) {
        self.authenticated = true;
        self.email = Some(email.into());
        self.logged_in_at = Some(at);
    }

    /// Clear the session.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.email = None;
        self.logged_in_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.email().is_none());
        assert!(session.logged_in_at().is_none());
    }

    #[test]
    fn login_succeeds_with_any_credentials() {
        let mut session = Session::new();
        let at = Utc::now();
        session.login("demo@example.com", "definitely-not-checked", at);

        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("demo@example.com"));
        assert_eq!(session.logged_in_at(), Some(at));
    }

    #[test]
    fn logout_clears_the_session() {
        let mut session = Session::new();
        session.login("demo@example.com", "pw", Utc::now());
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.email().is_none());
        assert!(session.logged_in_at().is_none());
    }

    #[test]
    fn relogin_replaces_the_identity() {
        let mut session = Session::new();
        session.login("first@example.com", "pw", Utc::now());
        session.login("second@example.com", "pw", Utc::now());

        assert_eq!(session.email(), Some("second@example.com"));
    }
}
