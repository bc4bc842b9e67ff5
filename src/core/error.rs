//! Custom error types for the application.
//!
//! - [`ApiError`] - transport and decode errors for HTTP requests
//! - [`AuthError`] - login validation and rejection errors

use thiserror::Error;

use crate::config::MIN_PASSWORD_LEN;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset)
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status), with the server's error
    /// message when the body carried one
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http {
        status: u16,
        message: Option<String>,
    },
    /// Failed to read response body
    #[error("failed to read response")]
    ResponseRead,
    /// Response body was not text
    #[error("invalid response content")]
    InvalidContent,
    /// JSON decoding error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Status code for HTTP-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Login flow errors shown on the login form.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    /// The API rejected the credentials.
    #[error("{0}")]
    Rejected(String),
    /// Transport failure before the API could answer.
    #[error("{0}")]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let plain = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(plain.to_string(), "HTTP 500");

        let with_message = ApiError::Http {
            status: 401,
            message: Some("invalid credentials".to_string()),
        };
        assert_eq!(with_message.to_string(), "HTTP 401: invalid credentials");
        assert_eq!(with_message.status(), Some(401));
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::PasswordTooShort.to_string(),
            "password must be at least 8 characters"
        );
        assert_eq!(
            AuthError::Rejected("account locked".to_string()).to_string(),
            "account locked"
        );
        assert_eq!(AuthError::from(ApiError::Timeout).to_string(), "request timed out");
    }
}
