//! Test double for [`AbilityAuthorizationService`].
//!
//! Only compiled for unit tests or with the `test-utils` feature.

use std::sync::Mutex;

use crate::error::AuthorizationError;
use crate::service::AbilityAuthorizationService;
use crate::types::{Ability, Role, User};

/// One call received by a [`RecordingService`], with identities copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    RegisterAbility { role: String, ability: Ability },
    UnregisterAbility { role: String, ability: Ability },
    RegisterRole { user: String, role: String },
    UnregisterRole { user: String, role: String },
}

/// Service that records every call in arrival order and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingService {
    calls: Mutex<Vec<RecordedCall>>,
    fail_at: Option<usize>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `index`-th call (0-based) return `AuthorizationError::Rejected`.
    /// The failing call is still recorded.
    pub fn failing_at(index: usize) -> Self {
        RecordingService { calls: Mutex::new(Vec::new()), fail_at: Some(index) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), AuthorizationError> {
        let mut calls = self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = calls.len();
        calls.push(call);
        if self.fail_at == Some(index) {
            return Err(AuthorizationError::Rejected(format!("call {index} rejected")));
        }
        Ok(())
    }
}

impl AbilityAuthorizationService for RecordingService {
    fn register_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
        self.record(RecordedCall::RegisterAbility { role: role.name().to_owned(), ability: ability.clone() })
    }

    fn unregister_ability(&self, role: &dyn Role, ability: &Ability) -> Result<(), AuthorizationError> {
        self.record(RecordedCall::UnregisterAbility { role: role.name().to_owned(), ability: ability.clone() })
    }

    fn register_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
        self.record(RecordedCall::RegisterRole { user: user.id().to_owned(), role: role.name().to_owned() })
    }

    fn unregister_role(&self, user: &dyn User, role: &dyn Role) -> Result<(), AuthorizationError> {
        self.record(RecordedCall::UnregisterRole { user: user.id().to_owned(), role: role.name().to_owned() })
    }
}
