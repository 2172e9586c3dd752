mod helpers;

use helpers::mock_collaborators::{
    MemoryConfigStore, MockHostsWriter, MockResolverControl, MockSecretHasher,
};
use std::sync::Arc;
use umbra_dns_application::{ConfigHandle, GetConfigUseCase, SetConfigUseCase};
use umbra_dns_domain::{ConfigError, ConfigValue, ValidationError};

struct Fixture {
    handle: Arc<ConfigHandle>,
    store: MemoryConfigStore,
    resolver: MockResolverControl,
    hosts: MockHostsWriter,
    set: SetConfigUseCase,
    get: GetConfigUseCase,
}

fn fixture() -> Fixture {
    let handle = Arc::new(ConfigHandle::default());
    let store = MemoryConfigStore::new();
    let resolver = MockResolverControl::new();
    let hosts = MockHostsWriter::new();

    let set = SetConfigUseCase::new(
        Arc::clone(&handle),
        Arc::new(store.clone()),
        Arc::new(resolver.clone()),
        Arc::new(hosts.clone()),
        Arc::new(MockSecretHasher),
    );
    let get = GetConfigUseCase::new(Arc::clone(&handle));

    Fixture {
        handle,
        store,
        resolver,
        hosts,
        set,
        get,
    }
}

#[test]
fn test_set_blocking_mode_commits_and_get_reflects_it() {
    let f = fixture();

    let printed = f.set.execute("dns.blocking.mode", "NXDOMAIN").unwrap();

    assert_eq!(printed, "NXDOMAIN");
    assert_eq!(f.get.execute("dns.blocking.mode").unwrap().format(), "NXDOMAIN");
    assert_eq!(f.store.saves(), 1);
    // blocking mode is answered by this process, not the dependent resolver
    assert_eq!(f.resolver.calls(), 0);
}

#[test]
fn test_restart_flagged_field_consults_resolver_before_commit() {
    let f = fixture();

    let printed = f.set.execute("dns.port", "5335").unwrap();

    assert_eq!(printed, "5335");
    assert_eq!(f.resolver.calls(), 1);
    assert_eq!(f.get.execute("dns.port").unwrap(), ConfigValue::Uint16(5335));
    assert_eq!(f.store.saves(), 1);
}

#[test]
fn test_dependent_check_failure_discards_staged_copy() {
    let f = fixture();
    f.resolver.set_should_fail(true);

    let before = f.handle.load();
    let err = f.set.execute("dns.upstreams", r#"["203.0.113.1"]"#).unwrap_err();

    match err {
        ConfigError::DependentCheckFailed(diag) => {
            assert!(diag.contains("staged config"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // live untouched (same snapshot, same value) and nothing persisted
    assert!(Arc::ptr_eq(&before, &f.handle.load()));
    assert_eq!(
        f.get.execute("dns.upstreams").unwrap(),
        before.get("dns.upstreams").unwrap().value
    );
    assert_eq!(f.store.saves(), 0);
}

#[test]
fn test_integer_overflow_is_rejected_without_state_change() {
    let f = fixture();

    let err = f.set.execute("database.maxDBdays", "99999999999").unwrap_err();

    match err {
        ConfigError::Invalid { key, source } => {
            assert_eq!(key, "database.maxDBdays");
            assert!(matches!(source, ValidationError::InvalidInteger { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(f.get.execute("database.maxDBdays").unwrap(), ConfigValue::Int(91));
    assert_eq!(f.store.saves(), 0);
    assert_eq!(f.resolver.calls(), 0);
}

#[test]
fn test_privacy_level_out_of_range_keeps_prior_value() {
    let f = fixture();
    f.set.execute("misc.privacyLevel", "2").unwrap();

    let err = f.set.execute("misc.privacyLevel", "5").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            source: ValidationError::OutOfRange { min: 0, max: 3 },
            ..
        }
    ));
    assert_eq!(f.get.execute("misc.privacyLevel").unwrap(), ConfigValue::PrivacyLevel(2));
}

#[test]
fn test_unknown_key_is_a_distinct_error() {
    let f = fixture();

    let err = f.set.execute("dns.doesNotExist", "true").unwrap_err();

    assert!(matches!(err, ConfigError::UnknownKey(_)));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(f.store.saves(), 0);
}

#[test]
fn test_unchanged_set_skips_checks_but_repersists() {
    let f = fixture();

    // dns.port default is 53 and carries the restart flag
    let printed = f.set.execute("dns.port", "53").unwrap();

    assert_eq!(printed, "53");
    assert_eq!(f.resolver.calls(), 0, "unchanged set must not test the resolver");
    assert_eq!(f.store.saves(), 1, "unchanged set still refreshes the document");
    // the live slot was not replaced
    let before = f.handle.load();
    f.set.execute("dns.port", "53").unwrap();
    assert!(Arc::ptr_eq(&before, &f.handle.load()));
}

#[test]
fn test_replacing_a_duplicated_upstream_is_a_real_change() {
    let f = fixture();
    f.set.execute("dns.upstreams", r#"["1.1.1.1", "1.1.1.1"]"#).unwrap();

    // same length, one shared element: must commit, not be skipped as
    // unchanged
    f.set.execute("dns.upstreams", r#"["1.1.1.1", "8.8.8.8"]"#).unwrap();

    assert_eq!(
        f.get.execute("dns.upstreams").unwrap(),
        ConfigValue::StringArray(vec!["1.1.1.1".to_string(), "8.8.8.8".to_string()])
    );
    assert_eq!(f.resolver.calls(), 2, "both sets must test the resolver");
    assert_eq!(f.store.saves(), 2);
}

#[test]
fn test_secret_is_stored_as_digest_only() {
    let f = fixture();

    let printed = f.set.execute("webserver.api.password", "secret123").unwrap();

    assert_ne!(printed, "secret123");
    assert!(printed.starts_with("$mock$"));

    let stored = f.get.execute("webserver.api.password").unwrap();
    assert_eq!(stored.format(), printed);
    assert!(!stored.format().contains("secret123"));

    // the digest landed in the addressed field, neighbors untouched
    let live = f.handle.load();
    assert_eq!(
        live.get("webserver.api.prettyJSON").unwrap().value,
        ConfigValue::Bool(false)
    );
    assert_eq!(
        live.get("webserver.interface.theme").unwrap().value.format(),
        "default-auto"
    );
}

#[test]
fn test_hosts_change_regenerates_derived_file_before_commit() {
    let f = fixture();

    f.set.execute("dns.hosts", r#"["192.168.1.2 nas.lan"]"#).unwrap();

    assert_eq!(f.hosts.calls(), 1);
    assert_eq!(f.resolver.calls(), 0);
}

#[test]
fn test_hosts_regeneration_failure_aborts_commit() {
    let f = fixture();
    f.hosts.set_should_fail(true);

    let err = f.set.execute("dns.hosts", r#"["192.168.1.2 nas.lan"]"#).unwrap_err();

    assert!(matches!(err, ConfigError::HostsFileFailed(_)));
    assert_eq!(
        f.get.execute("dns.hosts").unwrap(),
        ConfigValue::StringArray(vec![])
    );
    assert_eq!(f.store.saves(), 0);
}

#[test]
fn test_persist_failure_after_commit_keeps_memory_state() {
    let f = fixture();
    f.store.set_should_fail(true);

    // in-memory correctness is the primary guarantee; persistence is
    // best-effort until the next successful write
    let printed = f.set.execute("dns.blockTTL", "30").unwrap();

    assert_eq!(printed, "30");
    assert_eq!(f.get.execute("dns.blockTTL").unwrap(), ConfigValue::Uint(30));
}

#[test]
fn test_persisted_snapshot_matches_committed_registry() {
    let f = fixture();

    f.set.execute("webserver.domain", "blackhole.lan").unwrap();

    let saved = f.store.last_saved().expect("one save");
    assert_eq!(
        saved.get("webserver.domain").unwrap().value,
        ConfigValue::String("blackhole.lan".to_string())
    );
}
