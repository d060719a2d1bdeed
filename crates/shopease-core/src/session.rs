//! # Session
//!
//! The mock login session: a flat toggle between logged-out and
//! logged-in-as. No credentials, no persistence, no expiry. The UI uses it
//! to gate the account menu and greet the user by name.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::UserIdentity;

/// The current login identity, if any.
///
/// Two states, two transitions:
/// ```text
/// LoggedOut ──login(identity)──► LoggedIn(identity)
/// LoggedIn  ──logout()────────► LoggedOut
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: Option<UserIdentity>,
}

impl Session {
    /// A logged-out session.
    pub fn logged_out() -> Self {
        Session { user: None }
    }

    /// Logs in with the given identity, replacing any current one.
    pub fn login(&mut self, identity: UserIdentity) {
        self.user = Some(identity);
    }

    /// Logs out. No-op when already logged out.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Checks whether a user is logged in.
    #[inline]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the logged-in identity, if any.
    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> UserIdentity {
        UserIdentity {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_default_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::logged_out();

        session.login(jane());
        assert!(session.is_logged_in());
        assert_eq!(session.user().unwrap().name, "Jane");

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_replaces_identity() {
        let mut session = Session::logged_out();
        session.login(jane());
        session.login(UserIdentity {
            name: "John".to_string(),
            email: "john@example.com".to_string(),
        });

        assert_eq!(session.user().unwrap().name, "John");
    }

    #[test]
    fn test_logout_when_logged_out_is_noop() {
        let mut session = Session::logged_out();
        session.logout();
        assert!(!session.is_logged_in());
    }
}
