//! Hash-based routing for the dashboard.
//!
//! URL format: `#/segment/...` (e.g. `#/login`, `#/services/svc-1`).
//! Keeping navigation in the hash lets the app be served as a single
//! static file without server-side rewrite rules.

/// Application routes derived from the URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Login screen: `#/login`
    Login,
    /// Service overview grid: `#/` or empty hash
    Overview,
    /// Single service detail: `#/services/<id>`
    Service {
        /// Backend identifier of the service.
        id: String,
    },
    /// Account settings: `#/settings`
    Settings,
    /// Any unrecognized hash. Renders the 404 page.
    NotFound {
        /// The unmatched path, for display on the 404 page.
        path: String,
    },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Overview;
        }

        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("login"), None, _) => Self::Login,
            (Some("settings"), None, _) => Self::Settings,
            (Some("services"), Some(id), None) if !id.is_empty() => Self::Service {
                id: id.to_string(),
            },
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert a route back into a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Login => "#/login".to_string(),
            Self::Overview => "#/".to_string(),
            Self::Service { id } => format!("#/services/{}", id),
            Self::Settings => "#/settings".to_string(),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// Used by the auth guards so redirects don't trap the back button.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }

    /// Whether this route is only reachable with a signed-in session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Label shown in the status bar for the current page.
    ///
    /// The overview has no label (the logo already says where you are).
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Login | Self::Overview => None,
            Self::Service { .. } => Some("Service Detail"),
            Self::Settings => Some("Settings"),
            Self::NotFound { .. } => Some("Not Found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Overview);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Overview);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Overview);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/settings"), AppRoute::Settings);
        assert_eq!(
            AppRoute::from_hash("#/services/svc-1"),
            AppRoute::Service {
                id: "svc-1".to_string(),
            }
        );
        // Trailing slash is tolerated
        assert_eq!(
            AppRoute::from_hash("#/services/svc-1/"),
            AppRoute::Service {
                id: "svc-1".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            AppRoute::from_hash("#/nope"),
            AppRoute::NotFound {
                path: "nope".to_string(),
            }
        );
        // Services without an id is not a page
        assert_eq!(
            AppRoute::from_hash("#/services"),
            AppRoute::NotFound {
                path: "services".to_string(),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/services/svc-1/extra"),
            AppRoute::NotFound {
                path: "services/svc-1/extra".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Login.to_hash(), "#/login");
        assert_eq!(AppRoute::Overview.to_hash(), "#/");
        assert_eq!(AppRoute::Settings.to_hash(), "#/settings");
        assert_eq!(
            AppRoute::Service {
                id: "svc-1".to_string(),
            }
            .to_hash(),
            "#/services/svc-1"
        );
    }

    #[test]
    fn test_guards_and_titles() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::Overview.requires_auth());
        assert!(AppRoute::Settings.requires_auth());

        assert_eq!(AppRoute::Overview.title(), None);
        assert_eq!(AppRoute::Settings.title(), Some("Settings"));
        assert_eq!(
            AppRoute::Service {
                id: "x".to_string(),
            }
            .title(),
            Some("Service Detail")
        );
    }
}
