//! Shared types for abilities, roles and users.
//!
//! Roles and users are traits so applications can hand in their own principal
//! types; `NamedRole` and `NamedUser` cover the common string-keyed case.

use std::sync::Arc;

/// An atomic permission that can be assigned to a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Ability(String);

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Ability(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ability {
    fn from(name: &str) -> Self {
        Ability::new(name)
    }
}

/// A named group of abilities.
pub trait Role {
    fn name(&self) -> &str;
}

/// A principal to which roles are assigned.
pub trait User {
    /// Stable identity used by the authorization service to key the user.
    fn id(&self) -> &str;
}

impl<T: Role + ?Sized> Role for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Role + ?Sized> Role for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Role + ?Sized> Role for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: User + ?Sized> User for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: User + ?Sized> User for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: User + ?Sized> User for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A role identified only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NamedRole(String);

impl NamedRole {
    pub fn new(name: impl Into<String>) -> Self {
        NamedRole(name.into())
    }
}

impl Role for NamedRole {
    fn name(&self) -> &str {
        &self.0
    }
}

/// A user identified only by its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NamedUser(String);

impl NamedUser {
    pub fn new(id: impl Into<String>) -> Self {
        NamedUser(id.into())
    }
}

impl User for NamedUser {
    fn id(&self) -> &str {
        &self.0
    }
}

/// Returns `true` when an identity carries no usable characters.
///
/// A blank identity is the closest thing to an absent role or user and is
/// rejected before anything reaches the authorization service.
#[inline]
pub(crate) fn is_blank(identity: &str) -> bool {
    identity.trim().is_empty()
}
