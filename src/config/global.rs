//! Process-wide slot for the active authorization service.
//!
//! Applications install their service once at startup with [`initialize`]; code
//! that has no service handed to it can fetch it back with [`installed_service`].

use std::sync::{Arc, RwLock};

use crate::error::AuthorizationError;
use crate::service::AbilityAuthorizationService;

static AUTHORIZATION_SERVICE: RwLock<Option<Arc<dyn AbilityAuthorizationService>>> = RwLock::new(None);

/// Installs `service` as the process-wide authorization service, replacing any previous one.
pub fn initialize(service: Arc<dyn AbilityAuthorizationService>) {
    let mut slot = AUTHORIZATION_SERVICE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if slot.is_some() {
        tracing::debug!("replacing installed authorization service");
    }
    *slot = Some(service);
}

/// Returns the installed authorization service, if any.
pub fn authorization_service() -> Option<Arc<dyn AbilityAuthorizationService>> {
    AUTHORIZATION_SERVICE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Returns the installed authorization service.
///
/// # Errors
/// `InvalidArgument("authorization_service")` when [`initialize`] has not been called.
pub fn installed_service() -> Result<Arc<dyn AbilityAuthorizationService>, AuthorizationError> {
    authorization_service().ok_or(AuthorizationError::InvalidArgument("authorization_service"))
}

/// Clears the process-wide slot.
pub fn reset() {
    *AUTHORIZATION_SERVICE.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
}
