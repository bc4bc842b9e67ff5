//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name displayed in the status bar and page titles.
pub const APP_NAME: &str = "NanoNet";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// API Configuration
// =============================================================================

/// Base path of the monitoring API. The dashboard is served from the same
/// origin as the API gateway, so a relative path is sufficient.
pub const API_BASE_URL: &str = "/api/v1";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Interval between health-endpoint polls for the LIVE indicator.
pub const HEARTBEAT_INTERVAL_MS: u32 = 15000;

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key for the persisted session.
pub const SESSION_KEY: &str = "nanonet_session";

/// Minimum accepted password length on the login form.
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// Command Feed Configuration
// =============================================================================

/// Maximum number of command records kept in the history feed.
pub const MAX_COMMAND_FEED: usize = 50;

/// Characters of the command id shown in the feed.
pub const COMMAND_ID_PREVIEW_LEN: usize = 8;

// =============================================================================
// Background Animation Configuration
// =============================================================================

/// Decorative particle background settings.
pub mod particles {
    /// Number of shapes in the field.
    pub const SHAPE_COUNT: usize = 35;

    /// Redraw interval in milliseconds (~30 fps).
    pub const FRAME_INTERVAL_MS: u32 = 33;

    /// Size range of a shape in CSS pixels.
    pub const MIN_SIZE: f64 = 2.0;
    pub const MAX_SIZE: f64 = 8.0;

    /// Upward drift speed range in pixels per frame.
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 0.4;

    /// Opacity range of a shape.
    pub const MIN_OPACITY: f64 = 0.1;
    pub const MAX_OPACITY: f64 = 0.5;

    /// Margin past the top edge before a shape respawns at the bottom.
    pub const RESET_MARGIN: f64 = 20.0;

    /// Horizontal wobble amplitude in pixels per frame.
    pub const WOBBLE_AMPLITUDE: f64 = 0.5;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
