//! Authentication session state.

use serde::{Deserialize, Serialize};

/// Signed-in account as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Persisted session, stored as JSON in localStorage.
///
/// The access token lives only in memory; the refresh token is what
/// survives a page reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub refresh_token: String,
}

/// Authentication state of the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    SignedOut,
    SigningIn,
    SignedIn {
        user: User,
    },
}

impl AuthState {
    /// Check if a session is active.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }

    /// Email of the signed-in account, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            AuthState::SignedIn { user } => Some(&user.email),
            _ => None,
        }
    }

    /// Two-letter avatar initials derived from the account email.
    ///
    /// Falls back to the product initials when signed out.
    pub fn initials(&self) -> String {
        match self.email() {
            Some(email) if !email.is_empty() => {
                email.chars().take(2).collect::<String>().to_uppercase()
            }
            _ => "NN".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(email: &str) -> AuthState {
        AuthState::SignedIn {
            user: User {
                id: "u-1".to_string(),
                email: email.to_string(),
            },
        }
    }

    #[test]
    fn test_signed_out_state() {
        let state = AuthState::SignedOut;
        assert!(!state.is_signed_in());
        assert_eq!(state.email(), None);
        assert_eq!(state.initials(), "NN");
    }

    #[test]
    fn test_signing_in_state() {
        let state = AuthState::SigningIn;
        assert!(!state.is_signed_in());
        assert_eq!(state.initials(), "NN");
    }

    #[test]
    fn test_signed_in_state() {
        let state = signed_in("ayse@example.com");
        assert!(state.is_signed_in());
        assert_eq!(state.email(), Some("ayse@example.com"));
        assert_eq!(state.initials(), "AY");
    }

    #[test]
    fn test_initials_single_char_email() {
        // Degenerate but possible: keep whatever is there, uppercased
        assert_eq!(signed_in("x").initials(), "X");
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session {
            user: User {
                id: "u-1".to_string(),
                email: "ops@nanonet.dev".to_string(),
            },
            refresh_token: "rt-abc".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }

    #[test]
    fn test_default() {
        assert_eq!(AuthState::default(), AuthState::SignedOut);
    }
}
