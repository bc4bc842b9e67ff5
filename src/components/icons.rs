//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuCircleCheck as Succeeded, LuCircleX as Failed,
        LuClock as Clock, LuEye as Eye, LuEyeOff as EyeOff, LuHouse as Home,
        LuLoaderCircle as Spinner, LuLogOut as SignOut, LuRotateCcw as Restart,
        LuSearch as Search, LuSettings as Settings, LuSquare as Stop, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Restart, BsArrowLeft as ArrowLeft, BsArrowRepeat as Spinner,
        BsBoxArrowRight as SignOut, BsCheckCircle as Succeeded, BsClock as Clock, BsEye as Eye,
        BsEyeSlash as EyeOff, BsGear as Settings, BsHouseFill as Home, BsPerson as User,
        BsSearch as Search, BsSquare as Stop, BsXCircle as Failed,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(HOME, Home);
themed_icon!(USER, User);
themed_icon!(SETTINGS, Settings);
themed_icon!(SIGN_OUT, SignOut);
themed_icon!(EYE, Eye);
themed_icon!(EYE_OFF, EyeOff);
themed_icon!(RESTART, Restart);
themed_icon!(STOP, Stop);
themed_icon!(SPINNER, Spinner);
themed_icon!(SUCCEEDED, Succeeded);
themed_icon!(FAILED, Failed);
themed_icon!(CLOCK, Clock);
themed_icon!(SEARCH, Search);
