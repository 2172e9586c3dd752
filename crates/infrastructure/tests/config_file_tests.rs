use std::path::PathBuf;
use tempfile::TempDir;

use umbra_dns_domain::{ConfigRegistry, ConfigValue};
use umbra_dns_infrastructure::config_file::{
    load, read_blocking_mode, read_log_file_path, read_verbosity, save,
};

fn doc_path(dir: &TempDir) -> PathBuf {
    dir.path().join("umbra.toml")
}

fn write_doc(dir: &TempDir, content: &str) -> PathBuf {
    let path = doc_path(dir);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_absent_file_is_the_normal_first_run_state() {
    let dir = TempDir::new().unwrap();
    assert!(load(&doc_path(&dir)).is_none());
}

#[test]
fn test_malformed_document_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "[dns\nbroken = ");
    assert!(load(&path).is_none());
}

#[test]
fn test_known_fields_overlay_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        r#"
[dns]
blockTTL = 30
port = 5353

[dns.blocking]
mode = "NXDOMAIN"

[misc]
privacyLevel = 2
"#,
    );

    let registry = load(&path).unwrap();
    assert_eq!(registry.get("dns.blockTTL").unwrap().value, ConfigValue::Uint(30));
    assert_eq!(registry.get("dns.port").unwrap().value, ConfigValue::Uint16(5353));
    assert_eq!(
        registry.get("dns.blocking.mode").unwrap().value.format(),
        "NXDOMAIN"
    );
    assert_eq!(
        registry.get("misc.privacyLevel").unwrap().value,
        ConfigValue::PrivacyLevel(2)
    );
    // untouched fields keep their compiled defaults
    assert_eq!(
        registry.get("database.maxDBdays").unwrap().value,
        ConfigValue::Int(91)
    );
}

#[test]
fn test_invalid_field_falls_back_per_field_without_aborting() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        r#"
[dns]
blockTTL = -5
port = 5353

[misc]
privacyLevel = 99
"#,
    );

    let registry = load(&path).unwrap();
    // the bad values fell back...
    assert_eq!(registry.get("dns.blockTTL").unwrap().value, ConfigValue::Uint(2));
    assert_eq!(
        registry.get("misc.privacyLevel").unwrap().value,
        ConfigValue::PrivacyLevel(0)
    );
    // ...while the good one in the same section still landed
    assert_eq!(registry.get("dns.port").unwrap().value, ConfigValue::Uint16(5353));
}

#[test]
fn test_unknown_sections_and_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        r#"
[dhcp]
active = true

[dns]
blockTTL = 30
futureOption = "whatever"
"#,
    );

    let registry = load(&path).unwrap();
    assert_eq!(registry.get("dns.blockTTL").unwrap().value, ConfigValue::Uint(30));
    assert!(registry.get("dhcp.active").is_none());
}

#[test]
fn test_writer_reader_round_trip_preserves_every_field() {
    let dir = TempDir::new().unwrap();
    let path = doc_path(&dir);

    let mut registry = ConfigRegistry::default();
    registry.get_mut("dns.blockTTL").unwrap().value = ConfigValue::Uint(300);
    registry.get_mut("dns.blocking.mode").unwrap().value =
        ConfigValue::parse(umbra_dns_domain::ValueKind::BlockingMode, "NODATA").unwrap();
    registry.get_mut("dns.hosts").unwrap().value =
        ConfigValue::StringArray(vec!["10.0.0.2 nas.lan".to_string()]);
    registry.get_mut("misc.check.loadAverage").unwrap().value = ConfigValue::Double(1.5);

    save(&registry, &path).unwrap();
    let reloaded = load(&path).unwrap();

    for (field, reloaded_field) in registry.iter().zip(reloaded.iter()) {
        assert_eq!(field.key, reloaded_field.key);
        assert_eq!(field.value, reloaded_field.value, "{}", field.key);
    }
}

#[test]
fn test_unsigned_long_beyond_i64_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = doc_path(&dir);

    let mut registry = ConfigRegistry::default();
    registry.get_mut("database.busyTimeout").unwrap().value = ConfigValue::Ulong(u64::MAX);

    save(&registry, &path).unwrap();
    let reloaded = load(&path).unwrap();
    assert_eq!(
        reloaded.get("database.busyTimeout").unwrap().value,
        ConfigValue::Ulong(u64::MAX)
    );
}

#[test]
fn test_written_document_groups_by_dotted_prefix() {
    let dir = TempDir::new().unwrap();
    let path = doc_path(&dir);

    save(&ConfigRegistry::default(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("[dns]"));
    assert!(content.contains("[dns.blocking]"));
    assert!(content.contains("[dns.rateLimit]"));
    assert!(content.contains("[webserver.api]"));
    assert!(content.contains("# This file is managed by umbra-dns"));
    // enumerated fields document their legal symbols
    assert!(content.contains("Allowed values: [ NULL, IP-NODATA-AAAA, IP, NXDOMAIN, NODATA ]"));
}

#[test]
fn test_secret_is_persisted_as_digest_never_plaintext() {
    let dir = TempDir::new().unwrap();
    let path = doc_path(&dir);

    let mut registry = ConfigRegistry::default();
    registry.get_mut("webserver.api.password").unwrap().value =
        ConfigValue::Password("$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string());

    save(&registry, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("$argon2id$"));

    let reloaded = load(&path).unwrap();
    assert_eq!(
        reloaded.get("webserver.api.password").unwrap().value,
        registry.get("webserver.api.password").unwrap().value
    );
}

#[test]
fn test_write_replaces_document_atomically() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "stale content that is not even TOML");

    save(&ConfigRegistry::default(), &path).unwrap();

    // full replace, no leftover temp file
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale content"));
    assert!(!dir
        .path()
        .read_dir()
        .unwrap()
        .any(|e| e.unwrap().file_name().to_string_lossy().ends_with(".tmp")));
}

#[test]
fn test_early_accessors_read_single_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        r#"
[files]
log = "/tmp/umbra-test.log"

[dns.blocking]
mode = "IP"

[debug]
config = true
"#,
    );

    assert_eq!(read_log_file_path(&path).as_deref(), Some("/tmp/umbra-test.log"));
    assert_eq!(
        read_blocking_mode(&path).map(|m| m.as_str()),
        Some("IP")
    );
    assert_eq!(read_verbosity(&path), Some(true));

    // absent document: every early accessor degrades to None
    let missing = dir.path().join("missing.toml");
    assert!(read_log_file_path(&missing).is_none());
    assert!(read_blocking_mode(&missing).is_none());
    assert!(read_verbosity(&missing).is_none());
}
