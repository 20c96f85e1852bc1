#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Hero-Config declares static role and ability assignments at application startup.
//!
//! The crate does not decide who may do what. It forwards "grant ability A to
//! role R" and "assign role R to user U" declarations to an injected
//! [`AbilityAuthorizationService`], one item at a time and in order, and stops at
//! the first error the service reports.

// Module for shared data types (Ability, Role, User).
pub mod types;

// Module for the authorization service abstraction.
pub mod service;

// Module for error types.
pub mod error;

// Registration façade and the process-wide service slot.
pub mod config;

// Declarative JSON configuration driving the façade.
pub mod manifest;

// Reference in-memory service.
pub mod memory;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use error::{AuthorizationError, ManifestError};
pub use manifest::AuthorizationManifest;
pub use memory::InMemoryAuthorizationService;
pub use service::AbilityAuthorizationService;
pub use types::{Ability, NamedRole, NamedUser, Role, User};
