//! The process-wide slot is shared by every test in this binary, so all
//! checks live in a single test function.

use std::panic;
use std::sync::Arc;

use hero_config::config;
use hero_config::error::AuthorizationError;
use hero_config::types::{Ability, NamedRole, NamedUser, Role, User};
use hero_config::{AbilityAuthorizationService, InMemoryAuthorizationService};

/// Service whose destructor panics, poisoning the slot lock when it is dropped under the write guard.
struct PanicOnDrop;

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        panic!("authorization service dropped");
    }
}

impl AbilityAuthorizationService for PanicOnDrop {
    fn register_ability(&self, _role: &dyn Role, _ability: &Ability) -> Result<(), AuthorizationError> {
        Ok(())
    }
    fn unregister_ability(&self, _role: &dyn Role, _ability: &Ability) -> Result<(), AuthorizationError> {
        Ok(())
    }
    fn register_role(&self, _user: &dyn User, _role: &dyn Role) -> Result<(), AuthorizationError> {
        Ok(())
    }
    fn unregister_role(&self, _user: &dyn User, _role: &dyn Role) -> Result<(), AuthorizationError> {
        Ok(())
    }
}

#[test]
fn test_global_service_lifecycle() {
    config::reset();
    assert!(config::authorization_service().is_none());
    assert_eq!(
        config::installed_service().err(),
        Some(AuthorizationError::InvalidArgument("authorization_service"))
    );

    let memory = Arc::new(InMemoryAuthorizationService::new());
    config::initialize(memory.clone());

    let service = config::installed_service().unwrap();
    let editor = NamedRole::new("editor");
    config::register_ability(service.as_ref(), &editor, &Ability::new("posts.write")).unwrap();
    config::register_role(service.as_ref(), &NamedUser::new("alice"), &editor).unwrap();
    assert!(memory.user_has_ability(&NamedUser::new("alice"), &Ability::new("posts.write")));

    // Re-initializing replaces the previous service.
    let replacement = Arc::new(InMemoryAuthorizationService::new());
    config::initialize(replacement.clone());
    config::register_ability(config::installed_service().unwrap().as_ref(), &editor, &Ability::new("posts.read"))
        .unwrap();
    assert_eq!(replacement.abilities_of(&editor), vec![Ability::new("posts.read")]);
    assert_eq!(memory.abilities_of(&editor), vec![Ability::new("posts.write")]);

    config::reset();
    assert!(config::authorization_service().is_none());

    // A poisoned slot is recovered rather than propagating the panic.
    config::initialize(Arc::new(PanicOnDrop));
    let dropped = panic::catch_unwind(config::reset);
    assert!(dropped.is_err());
    assert!(config::authorization_service().is_none());

    let after_poison = Arc::new(InMemoryAuthorizationService::new());
    config::initialize(after_poison.clone());
    let service = config::installed_service().unwrap();
    config::register_ability(service.as_ref(), &editor, &Ability::new("posts.read")).unwrap();
    assert_eq!(after_poison.abilities_of(&editor), vec![Ability::new("posts.read")]);
    drop(service);

    config::reset();
    assert!(config::authorization_service().is_none());
}
