#![no_main]

// Harness: facade_fail_fast
// Strategy: generate a role list and a failure position; the recorder must
// see exactly the calls up to and including the failing one, in order.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hero_config::config;
use hero_config::testing::{RecordedCall, RecordingService};
use hero_config::types::{NamedRole, NamedUser};

#[derive(Arbitrary, Debug)]
struct Input {
    roles: Vec<String>,
    fail_at: Option<u8>,
}

fuzz_target!(|input: Input| {
    let service = match input.fail_at {
        Some(index) => RecordingService::failing_at(index as usize),
        None => RecordingService::new(),
    };
    let roles: Vec<NamedRole> = input.roles.iter().map(|r| NamedRole::new(r.as_str())).collect();

    let result = config::register_roles(&service, &NamedUser::new("fuzz"), &roles);

    let expected_calls = match input.fail_at {
        Some(index) if (index as usize) < roles.len() => {
            assert!(result.is_err());
            index as usize + 1
        }
        _ => {
            assert!(result.is_ok());
            roles.len()
        }
    };
    let calls = service.calls();
    assert_eq!(calls.len(), expected_calls);
    for (call, role) in calls.iter().zip(&input.roles) {
        assert_eq!(call, &RecordedCall::RegisterRole { user: "fuzz".into(), role: role.clone() });
    }
});
