//! Declarative role and ability configuration.
//!
//! A manifest is a JSON document naming each role's abilities and each user's
//! roles:
//!
//! ```json
//! {
//!   "roles": { "editor": ["posts.read", "posts.write"] },
//!   "users": { "alice": ["editor"] }
//! }
//! ```
//!
//! Applying it at startup drives the registration façade, so all static
//! assignments live in one file instead of being scattered through code.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config;
use crate::error::ManifestError;
use crate::service::AbilityAuthorizationService;
use crate::types::{is_blank, Ability, NamedRole, NamedUser, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizationManifest {
    /// Role name → abilities granted to it, registered in list order.
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<Ability>>,
    /// User id → roles assigned to it, registered in list order.
    #[serde(default)]
    pub users: BTreeMap<String, Vec<NamedRole>>,
}

impl AuthorizationManifest {
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading authorization manifest");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every entry for blank identities.
    ///
    /// Run by [`apply`](Self::apply) and [`revoke`](Self::revoke) before any
    /// service call, so a malformed manifest never leaves a half-applied configuration.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (role, abilities) in &self.roles {
            if is_blank(role) {
                return Err(ManifestError::Invalid("role name must not be blank".into()));
            }
            if abilities.iter().any(|ability| is_blank(ability.name())) {
                return Err(ManifestError::Invalid(format!("role '{role}' lists a blank ability")));
            }
        }
        for (user, roles) in &self.users {
            if is_blank(user) {
                return Err(ManifestError::Invalid("user id must not be blank".into()));
            }
            if roles.iter().any(|role| is_blank(role.name())) {
                return Err(ManifestError::Invalid(format!("user '{user}' lists a blank role")));
            }
        }
        Ok(())
    }

    /// Registers every role's abilities, then every user's roles.
    pub fn apply<S>(&self, service: &S) -> Result<(), ManifestError>
    where
        S: AbilityAuthorizationService + ?Sized,
    {
        self.validate()?;
        for (role, abilities) in &self.roles {
            config::register_abilities(service, &NamedRole::new(role.as_str()), abilities)?;
        }
        for (user, roles) in &self.users {
            config::register_roles(service, &NamedUser::new(user.as_str()), roles)?;
        }
        tracing::info!(roles = self.roles.len(), users = self.users.len(), "applied authorization manifest");
        Ok(())
    }

    /// Unregisters every user's roles, then every role's abilities.
    pub fn revoke<S>(&self, service: &S) -> Result<(), ManifestError>
    where
        S: AbilityAuthorizationService + ?Sized,
    {
        self.validate()?;
        for (user, roles) in &self.users {
            config::unregister_roles(service, &NamedUser::new(user.as_str()), roles)?;
        }
        for (role, abilities) in &self.roles {
            config::unregister_abilities(service, &NamedRole::new(role.as_str()), abilities)?;
        }
        tracing::info!(roles = self.roles.len(), users = self.users.len(), "revoked authorization manifest");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_missing_sections() {
        let manifest = AuthorizationManifest::from_json_str(r#"{ "roles": { "viewer": ["posts.read"] } }"#).unwrap();
        assert_eq!(manifest.roles["viewer"], vec![Ability::new("posts.read")]);
        assert!(manifest.users.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let err = AuthorizationManifest::from_json_str(r#"{ "groups": {} }"#).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_validate_names_offending_entry() {
        let mut manifest = AuthorizationManifest::default();
        manifest.users.insert("alice".into(), vec![NamedRole::new(" ")]);
        match manifest.validate() {
            Err(ManifestError::Invalid(msg)) => assert!(msg.contains("alice")),
            other => panic!("expected Invalid, got {other:?}"),
        }

        let mut manifest = AuthorizationManifest::default();
        manifest.roles.insert("".into(), vec![]);
        assert!(matches!(manifest.validate(), Err(ManifestError::Invalid(_))));
    }

    #[test]
    fn test_json_string_parses_back() {
        let mut manifest = AuthorizationManifest::default();
        manifest.roles.insert("editor".into(), vec![Ability::new("posts.write")]);
        manifest.users.insert("alice".into(), vec![NamedRole::new("editor")]);
        let json = manifest.to_json_string().unwrap();
        assert_eq!(AuthorizationManifest::from_json_str(&json).unwrap(), manifest);
    }
}
