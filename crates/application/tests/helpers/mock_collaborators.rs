#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use umbra_dns_application::ports::{ConfigStore, HostsFileWriter, ResolverControl, SecretHasher};
use umbra_dns_domain::{ConfigError, ConfigRegistry};

// ============================================================================
// Mock ResolverControl
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResolverControl {
    calls: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockResolverControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ResolverControl for MockResolverControl {
    fn test_configuration(&self, _staged: &ConfigRegistry) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            Err("bad option at line 3 of staged config".to_string())
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Mock HostsFileWriter
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostsWriter {
    calls: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockHostsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HostsFileWriter for MockHostsWriter {
    fn regenerate(&self, _staged: &ConfigRegistry) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            Err("cannot write hosts file".to_string())
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// In-memory ConfigStore
// ============================================================================

/// Records every persisted registry instead of touching the filesystem.
#[derive(Clone, Default)]
pub struct MemoryConfigStore {
    saved: Arc<Mutex<Vec<ConfigRegistry>>>,
    should_fail: Arc<AtomicBool>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<ConfigRegistry> {
        self.saved.lock().unwrap().last().cloned()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn save(&self, registry: &ConfigRegistry) -> Result<(), ConfigError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(ConfigError::Io("disk full".to_string()));
        }
        self.saved.lock().unwrap().push(registry.clone());
        Ok(())
    }
}

// ============================================================================
// Deterministic SecretHasher
// ============================================================================

/// Marks the input without a real KDF so tests can assert on the digest.
#[derive(Clone, Default)]
pub struct MockSecretHasher;

impl SecretHasher for MockSecretHasher {
    fn hash(&self, plaintext: &str) -> Result<String, String> {
        Ok(format!("$mock$v=1${}", plaintext.len()))
    }
}
