pub mod facade;
pub mod global;

// Re-export the façade so callers can write `hero_config::config::register_abilities`.
pub use facade::{
    register_abilities, register_ability, register_role, register_roles, unregister_abilities, unregister_ability,
    unregister_role, unregister_roles,
};
pub use global::{authorization_service, initialize, installed_service, reset};
