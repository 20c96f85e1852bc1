#![no_main]

// Harness: manifest_apply
// Strategy: feed arbitrary bytes as a manifest. Anything that parses and
// validates must apply cleanly to the in-memory service, and revoking it
// again must leave the service empty.

use libfuzzer_sys::fuzz_target;
use hero_config::{AuthorizationManifest, InMemoryAuthorizationService};

fuzz_target!(|bytes: &[u8]| {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return;
    };
    let Ok(manifest) = AuthorizationManifest::from_json_str(text) else {
        return;
    };
    if manifest.validate().is_err() {
        return;
    }

    let service = InMemoryAuthorizationService::new();
    manifest.apply(&service).expect("validated manifest must apply");
    manifest.revoke(&service).expect("validated manifest must revoke");
    assert_eq!(service.snapshot(), AuthorizationManifest::default());
});
