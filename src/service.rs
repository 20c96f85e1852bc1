//! Authorization service abstraction.
//!
//! An `AbilityAuthorizationService` owns the role↔ability and user↔role
//! relationships. This crate never stores them itself; the façade in
//! [`crate::config`] only forwards single-item operations to a service.

use std::sync::Arc;

use crate::error::AuthorizationError;
use crate::types::{Ability, Role, User};

/// Trait implemented by pluggable authorization backends.
///
/// Implementations are expected to be shared process-wide, so every operation
/// takes `&self` and the implementation handles its own synchronisation.
pub trait AbilityAuthorizationService: Send + Sync {
    /// Grants `ability` to `role`.
    fn register_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError>;

    /// Withdraws `ability` from `role`.
    fn unregister_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError>;

    /// Assigns `role` to `user`.
    fn register_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError>;

    /// Removes `role` from `user`.
    fn unregister_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError>;
}

macro_rules! forward_service {
    ($($ptr:ty),*) => {$(
        impl<S: AbilityAuthorizationService + ?Sized> AbilityAuthorizationService for $ptr {
            fn register_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
                (**self).register_ability(role, ability)
            }

            fn unregister_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
                (**self).unregister_ability(role, ability)
            }

            fn register_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
                (**self).register_role(user, role)
            }

            fn unregister_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
                (**self).unregister_role(user, role)
            }
        }
    )*};
}

forward_service!(&S, Box<S>, Arc<S>);
