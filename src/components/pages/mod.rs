//! Routed pages.

mod login;
mod not_found;
mod overview;
mod service_detail;
mod settings;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use overview::OverviewPage;
pub use service_detail::ServiceDetailPage;
pub use settings::SettingsPage;
