//! The authenticated owner's identity.
//!
//! Constructed at startup and injected into the view; the username is
//! filled in once the identity query settles. Absence of a username is
//! a valid state, not an error.

/// Label shown when the service reports no username.
pub const FALLBACK_OWNER: &str = "Pharmacy Owner";

/// Read-only session info for the greeting header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    /// Replace the username with the latest identity query result.
    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    /// The name to greet the owner with.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(FALLBACK_OWNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_without_username() {
        let session = Session::default();
        assert_eq!(session.display_name(), FALLBACK_OWNER);
    }

    #[test]
    fn uses_username_when_present() {
        let session = Session::new(Some("alice".to_string()));
        assert_eq!(session.display_name(), "alice");
    }

    #[test]
    fn set_username_overwrites() {
        let mut session = Session::new(Some("alice".to_string()));
        session.set_username(None);
        assert_eq!(session.display_name(), FALLBACK_OWNER);
    }
}
