//! Registration façade.
//!
//! Convenience entry points, intended to be called from one central place at
//! application startup, that declare which abilities belong to which roles and
//! which roles belong to which users. Each function checks its target and then
//! forwards every item, in order, to the matching single-item operation of an
//! [`AbilityAuthorizationService`].
//!
//! The first error returned by the service stops the loop and is handed back
//! unchanged. Items already forwarded stay registered; there is no rollback.

use std::borrow::Borrow;

use crate::error::AuthorizationError;
use crate::service::AbilityAuthorizationService;
use crate::types::{is_blank, Ability, Role, User};

/// Assigns a single ability to a role.
///
/// Equivalent to [`register_abilities`] with a one-element collection.
pub fn register_ability<S>(service: &S, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
{
    register_abilities(service, role, std::iter::once(ability))
}

/// Assigns a set of abilities to a role.
///
/// # Arguments
/// * `service` - The authorization service that owns role and ability storage.
/// * `role` - The role to configure. Must have a non-blank name.
/// * `abilities` - The abilities to grant, forwarded in iteration order.
///
/// # Errors
/// `InvalidArgument("role")` if the role name is blank, in which case the
/// service is never called. Otherwise the first error raised by the service.
pub fn register_abilities<S, I>(service: &S, role: &dyn Role, abilities: I) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<Ability>,
{
    ensure_role(role)?;
    for_each_in_order("register_ability", role.name(), abilities, |ability: &Ability| {
        tracing::debug!(role = role.name(), ability = ability.name(), "registering ability");
        service.register_ability(role, ability)
    })
}

/// Withdraws a single ability from a role.
///
/// Equivalent to [`unregister_abilities`] with a one-element collection.
pub fn unregister_ability<S>(service: &S, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
{
    unregister_abilities(service, role, std::iter::once(ability))
}

/// Withdraws a set of abilities from a role.
///
/// Same argument and error rules as [`register_abilities`].
pub fn unregister_abilities<S, I>(service: &S, role: &dyn Role, abilities: I) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<Ability>,
{
    ensure_role(role)?;
    for_each_in_order("unregister_ability", role.name(), abilities, |ability: &Ability| {
        tracing::debug!(role = role.name(), ability = ability.name(), "unregistering ability");
        service.unregister_ability(role, ability)
    })
}

/// Assigns a single role to a user.
///
/// Equivalent to [`register_roles`] with a one-element collection.
pub fn register_role<S>(service: &S, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
{
    register_roles(service, user, std::iter::once(role))
}

/// Assigns a set of roles to a user.
///
/// # Arguments
/// * `service` - The authorization service that owns user and role storage.
/// * `user` - The user to configure. Must have a non-blank id.
/// * `roles` - The roles to assign, forwarded in iteration order.
///
/// # Errors
/// `InvalidArgument("user")` if the user id is blank, in which case the
/// service is never called. Otherwise the first error raised by the service.
pub fn register_roles<S, I>(service: &S, user: &dyn User, roles: I) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
    I: IntoIterator,
    I::Item: Role,
{
    ensure_user(user)?;
    for_each_in_order("register_role", user.id(), roles, |role: &I::Item| {
        tracing::debug!(user = user.id(), role = role.name(), "registering role");
        service.register_role(user, role)
    })
}

/// Removes a single role from a user.
///
/// Equivalent to [`unregister_roles`] with a one-element collection.
pub fn unregister_role<S>(service: &S, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
{
    unregister_roles(service, user, std::iter::once(role))
}

/// Removes a set of roles from a user.
///
/// Same argument and error rules as [`register_roles`].
pub fn unregister_roles<S, I>(service: &S, user: &dyn User, roles: I) -> Result<(), AuthorizationError>
where
    S: AbilityAuthorizationService + ?Sized,
    I: IntoIterator,
    I::Item: Role,
{
    ensure_user(user)?;
    for_each_in_order("unregister_role", user.id(), roles, |role: &I::Item| {
        tracing::debug!(user = user.id(), role = role.name(), "unregistering role");
        service.unregister_role(user, role)
    })
}

fn ensure_role(role: &dyn Role) -> Result<(), AuthorizationError> {
    if is_blank(role.name()) {
        return Err(AuthorizationError::InvalidArgument("role"));
    }
    Ok(())
}

fn ensure_user(user: &dyn User) -> Result<(), AuthorizationError> {
    if is_blank(user.id()) {
        return Err(AuthorizationError::InvalidArgument("user"));
    }
    Ok(())
}

/// Runs `op` once per item, stopping at the first error.
fn for_each_in_order<I, T, F>(operation: &'static str, subject: &str, items: I, mut op: F) -> Result<(), AuthorizationError>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
    F: FnMut(&T) -> Result<(), AuthorizationError>,
{
    for (position, item) in items.into_iter().enumerate() {
        if let Err(err) = op(Borrow::<T>::borrow(&item)) {
            tracing::warn!(operation, subject, position, error = %err, "authorization service call failed");
            return Err(err);
        }
    }
    Ok(())
}
