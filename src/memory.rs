//! In-memory authorization service.
//!
//! Keeps role→abilities and user→roles tables behind read/write locks. Suitable
//! for tests, tools and small single-process applications; anything that needs
//! persistence plugs its own [`AbilityAuthorizationService`] in instead.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::AuthorizationError;
use crate::manifest::AuthorizationManifest;
use crate::service::AbilityAuthorizationService;
use crate::types::{is_blank, Ability, NamedRole, Role, User};

/// Reference [`AbilityAuthorizationService`] backed by process memory.
///
/// Registration is idempotent, and unregistering a pair that was never
/// registered is a no-op. Entries left empty are dropped.
#[derive(Debug, Default)]
pub struct InMemoryAuthorizationService {
    role_abilities: RwLock<HashMap<String, BTreeSet<Ability>>>,
    user_roles: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl InMemoryAuthorizationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abilities currently granted to `role`, in ascending order.
    pub fn abilities_of(&self, role: &dyn Role) -> Vec<Ability> {
        read(&self.role_abilities)
            .get(role.name())
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Roles currently assigned to `user`, in ascending order.
    pub fn roles_of(&self, user: &dyn User) -> Vec<NamedRole> {
        read(&self.user_roles)
            .get(user.id())
            .map(|set| set.iter().map(|name| NamedRole::new(name.as_str())).collect())
            .unwrap_or_default()
    }

    /// Checks whether any role assigned to `user` grants `ability`.
    pub fn user_has_ability(&self, user: &dyn User, ability: &Ability) -> bool {
        let user_roles = read(&self.user_roles);
        let Some(roles) = user_roles.get(user.id()) else {
            return false;
        };
        let role_abilities = read(&self.role_abilities);
        roles
            .iter()
            .filter_map(|role| role_abilities.get(role))
            .any(|abilities| abilities.contains(ability))
    }

    /// Exports the current tables as a manifest, e.g. to persist a configuration built at runtime.
    pub fn snapshot(&self) -> AuthorizationManifest {
        let roles: BTreeMap<String, Vec<Ability>> = read(&self.role_abilities)
            .iter()
            .map(|(role, abilities)| (role.clone(), abilities.iter().cloned().collect()))
            .collect();
        let users: BTreeMap<String, Vec<NamedRole>> = read(&self.user_roles)
            .iter()
            .map(|(user, roles)| (user.clone(), roles.iter().map(|r| NamedRole::new(r.as_str())).collect()))
            .collect();
        AuthorizationManifest { roles, users }
    }
}

impl AbilityAuthorizationService for InMemoryAuthorizationService {
    fn register_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
        if is_blank(role.name()) {
            return Err(AuthorizationError::InvalidArgument("role"));
        }
        if is_blank(ability.name()) {
            return Err(AuthorizationError::InvalidArgument("ability"));
        }
        write(&self.role_abilities)
            .entry(role.name().to_owned())
            .or_default()
            .insert(ability.clone());
        Ok(())
    }

    fn unregister_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
        let mut table = write(&self.role_abilities);
        if let Some(abilities) = table.get_mut(role.name()) {
            abilities.remove(ability);
            if abilities.is_empty() {
                table.remove(role.name());
            }
        }
        Ok(())
    }

    fn register_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
        if is_blank(user.id()) {
            return Err(AuthorizationError::InvalidArgument("user"));
        }
        if is_blank(role.name()) {
            return Err(AuthorizationError::InvalidArgument("role"));
        }
        write(&self.user_roles)
            .entry(user.id().to_owned())
            .or_default()
            .insert(role.name().to_owned());
        Ok(())
    }

    fn unregister_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
        let mut table = write(&self.user_roles);
        if let Some(roles) = table.get_mut(user.id()) {
            roles.remove(role.name());
            if roles.is_empty() {
                table.remove(user.id());
            }
        }
        Ok(())
    }
}

// A panic while holding a lock leaves the tables in a consistent state (every
// mutation is a single insert/remove), so poisoning is ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
