//!
//! Defines error types for role and ability configuration.

/// Errors raised by the registration façade and by authorization services.
///
/// Façade functions only ever produce `InvalidArgument` themselves; every other
/// variant originates in the service and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    /// A required argument was missing or blank. Carries the argument name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The authorization service refused the registration.
    #[error("Authorization service rejected the request: {0}")]
    Rejected(String),
    /// A general or otherwise unspecified service error.
    #[error("Authorization service error: {0}")]
    Other(String),
}

/// Errors raised while loading or applying an [`AuthorizationManifest`](crate::manifest::AuthorizationManifest).
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// The manifest parsed but contains an entry that cannot be registered.
    #[error("Invalid manifest: {0}")]
    Invalid(String),
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
}
