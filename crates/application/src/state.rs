//! Process-wide handle to the live configuration registry.

use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, MutexGuard};

use umbra_dns_domain::ConfigRegistry;

/// The single live registry plus the update lock that serializes staged
/// transactions.
///
/// Readers call [`ConfigHandle::load`] and get a consistent snapshot without
/// blocking: the registry is replaced as a whole via `ArcSwap`, never field
/// by field, so a snapshot is always fully-old or fully-new. Writers hold
/// [`ConfigHandle::begin_update`] from staging until commit or discard, which
/// guarantees at most one staged copy exists at any time.
pub struct ConfigHandle {
    live: ArcSwap<ConfigRegistry>,
    update_lock: Mutex<()>,
}

impl ConfigHandle {
    pub fn new(registry: ConfigRegistry) -> Self {
        Self {
            live: ArcSwap::from_pointee(registry),
            update_lock: Mutex::new(()),
        }
    }

    /// Lock-free snapshot of the live registry.
    pub fn load(&self) -> Arc<ConfigRegistry> {
        self.live.load_full()
    }

    /// Acquire the update lock. Held by the coordinator for the whole
    /// transaction; a poisoned lock is recovered since the live registry is
    /// only ever replaced whole and cannot be left half-updated.
    pub fn begin_update(&self) -> MutexGuard<'_, ()> {
        self.update_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Atomically promote a staged registry to live. Callers must hold the
    /// guard returned by [`ConfigHandle::begin_update`].
    pub fn commit(&self, staged: ConfigRegistry) {
        self.live.store(Arc::new(staged));
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(ConfigRegistry::default())
    }
}
