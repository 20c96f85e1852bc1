use proptest::prelude::*;

use hero_config::config;
use hero_config::testing::{RecordedCall, RecordingService};
use hero_config::types::{Ability, NamedRole, NamedUser};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._]{0,11}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// N abilities produce exactly N calls, one per ability, in input order.
    #[test]
    fn prop_register_abilities_preserves_order(role in arb_name(), names in prop::collection::vec(arb_name(), 0..32)) {
        let service = RecordingService::new();
        let abilities: Vec<Ability> = names.iter().map(|n| Ability::new(n.as_str())).collect();

        config::register_abilities(&service, &NamedRole::new(role.as_str()), &abilities).unwrap();

        let expected: Vec<RecordedCall> = abilities
            .iter()
            .map(|ability| RecordedCall::RegisterAbility { role: role.clone(), ability: ability.clone() })
            .collect();
        prop_assert_eq!(service.calls(), expected);
    }

    /// N roles produce exactly N unregister calls, in input order.
    #[test]
    fn prop_unregister_roles_preserves_order(user in arb_name(), names in prop::collection::vec(arb_name(), 0..32)) {
        let service = RecordingService::new();
        let roles: Vec<NamedRole> = names.iter().map(|n| NamedRole::new(n.as_str())).collect();

        config::unregister_roles(&service, &NamedUser::new(user.as_str()), &roles).unwrap();

        let recorded_roles: Vec<String> = service
            .calls()
            .into_iter()
            .map(|call| match call {
                RecordedCall::UnregisterRole { role, .. } => role,
                other => panic!("unexpected call {other:?}"),
            })
            .collect();
        prop_assert_eq!(recorded_roles, names);
    }

    /// A failure at position k stops iteration: exactly k + 1 calls are made and the error is returned.
    #[test]
    fn prop_fail_fast_at_any_position(len in 1usize..20, pick in any::<prop::sample::Index>()) {
        let fail_at = pick.index(len);
        let service = RecordingService::failing_at(fail_at);
        let abilities: Vec<Ability> = (0..len).map(|i| Ability::new(format!("ability.{i}"))).collect();

        let result = config::unregister_abilities(&service, &NamedRole::new("r"), abilities);

        prop_assert!(result.is_err());
        prop_assert_eq!(service.calls().len(), fail_at + 1);
    }
}
