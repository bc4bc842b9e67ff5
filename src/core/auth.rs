//! Login flow and session persistence.
//!
//! Credentials are validated client-side before anything touches the
//! network. The refresh token is the only secret that survives a reload;
//! access tokens live in memory and are re-obtained via `/auth/refresh`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{MIN_PASSWORD_LEN, SESSION_KEY};
use crate::core::error::{ApiError, AuthError};
use crate::core::http;
use crate::models::{Session, User};
use crate::utils::dom;

// =============================================================================
// Validation
// =============================================================================

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
    })
}

/// Syntactic email check. The API performs the authoritative validation;
/// this only keeps obvious typos off the wire.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

/// Minimum-length password check matching the backend policy.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(AuthError::PasswordTooShort)
    }
}

// =============================================================================
// Auth API
// =============================================================================

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Token pair issued on login and refresh.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful login payload.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenPair,
}

/// Validate and submit credentials.
///
/// The email is trimmed before validation; 4xx answers surface the server
/// message as [`AuthError::Rejected`].
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, AuthError> {
    let email = email.trim();
    validate_email(email)?;
    validate_password(password)?;

    http::post_json::<AuthResponse, _>("/auth/login", &LoginRequest { email, password }, None)
        .await
        .map_err(|e| match e {
            ApiError::Http {
                status: 400..=499,
                message,
            } => AuthError::Rejected(message.unwrap_or_else(|| "login failed".to_string())),
            other => AuthError::Api(other),
        })
}

/// Exchange the persisted refresh token for a fresh token pair.
pub async fn refresh(refresh_token: &str) -> Result<TokenPair, ApiError> {
    http::post_json("/auth/refresh", &RefreshRequest { refresh_token }, None).await
}

/// Best-effort server-side logout. Local state is cleared regardless.
pub async fn logout(access_token: Option<&str>) {
    if let Err(e) = http::post_empty("/auth/logout", access_token).await {
        web_sys::console::warn_1(&format!("logout request failed: {}", e).into());
    }
}

// =============================================================================
// Session Persistence
// =============================================================================

/// Persist the session to localStorage.
pub fn save_session(session: &Session) {
    if let Some(storage) = dom::local_storage()
        && let Ok(json) = serde_json::to_string(session)
    {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

/// Load the persisted session, if any.
///
/// A corrupt entry is removed and treated as signed-out.
pub fn load_session() -> Option<Session> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(_) => {
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Remove the persisted session.
pub fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("ops@nanonet.dev").is_ok());
        assert!(validate_email("first.last+tag@sub.example.com").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        // Caller trims; untrimmed input is invalid here
        assert!(validate_email(" padded@example.com ").is_err());
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("").is_err());
    }
}
