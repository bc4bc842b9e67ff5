//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`] - Hash-based navigation
//! - [`AuthState`], [`Session`], [`User`] - Authentication session state
//! - [`Service`], [`ServiceStatus`] - Monitored services
//! - [`CommandKind`], [`CommandLog`], [`CommandRecord`] - Control commands
//! - [`LinkStatus`] - Gateway reachability for the LIVE indicator
//! - [`ParticleField`] - Decorative background animation state

mod auth;
mod command;
mod link;
mod particle;
mod route;
mod service;

pub use auth::{AuthState, Session, User};
pub use command::{CommandKind, CommandLog, CommandRecord, CommandStatus};
pub use link::LinkStatus;
pub use particle::{Particle, ParticleField, ShapeKind};
pub use route::AppRoute;
pub use service::{Service, ServiceStatus};
