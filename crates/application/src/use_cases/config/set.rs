use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{ConfigStore, HostsFileWriter, ResolverControl, SecretHasher};
use crate::state::ConfigHandle;
use umbra_dns_domain::{ConfigError, ConfigValue};

/// Key controlling the derived static-hosts file. Changing it triggers a
/// file regeneration instead of a resolver test.
const HOSTS_KEY: &str = "dns.hosts";

/// The transactional update coordinator.
///
/// One `execute` call is one transaction: stage a deep copy of the live
/// registry, apply exactly one change inside the copy, run the dependent
/// side-effect checks, and atomically replace the live registry only if
/// everything passed. A discarded staged copy never affects the live one.
pub struct SetConfigUseCase {
    handle: Arc<ConfigHandle>,
    store: Arc<dyn ConfigStore>,
    resolver: Arc<dyn ResolverControl>,
    hosts: Arc<dyn HostsFileWriter>,
    hasher: Arc<dyn SecretHasher>,
}

impl SetConfigUseCase {
    pub fn new(
        handle: Arc<ConfigHandle>,
        store: Arc<dyn ConfigStore>,
        resolver: Arc<dyn ResolverControl>,
        hosts: Arc<dyn HostsFileWriter>,
        hasher: Arc<dyn SecretHasher>,
    ) -> Self {
        Self {
            handle,
            store,
            resolver,
            hosts,
            hasher,
        }
    }

    /// Validate `raw` for `key` and commit it. Returns the textual form of
    /// what was actually stored (post-validation, post-hash), which is what
    /// the CLI prints back to the caller.
    pub fn execute(&self, key: &str, raw: &str) -> Result<String, ConfigError> {
        // Serializes transactions: at most one staged copy at any time.
        let _update = self.handle.begin_update();

        let live = self.handle.load();
        let live_field = live
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        // Secrets go through the one-way hash before the codec stores them;
        // the registry never sees the plaintext. The digest lands in exactly
        // the field being set.
        let input = if live_field.flags.secret {
            self.hasher.hash(raw).map_err(ConfigError::SecretHashFailed)?
        } else {
            raw.to_string()
        };

        let parsed = ConfigValue::parse(live_field.kind(), &input).map_err(|source| {
            ConfigError::Invalid {
                key: key.to_string(),
                source,
            }
        })?;

        if parsed == live_field.value {
            // Unchanged values skip the collaborator checks entirely but
            // still refresh the on-disk document.
            debug!(key, "config item unchanged");
            let formatted = parsed.format();
            self.persist(&live);
            return Ok(formatted);
        }

        let mut staged = (*live).clone();
        match staged.get_mut(key) {
            Some(field) => field.value = parsed.clone(),
            None => return Err(ConfigError::UnknownKey(key.to_string())),
        }

        if live_field.flags.restart_resolver {
            self.resolver
                .test_configuration(&staged)
                .map_err(ConfigError::DependentCheckFailed)?;
            debug!(key, "dependent resolver accepted the staged configuration");
        } else if key == HOSTS_KEY {
            // Rewrite the derived file from the staged registry before the
            // commit; no resolver restart is needed for this field.
            self.hosts
                .regenerate(&staged)
                .map_err(ConfigError::HostsFileFailed)?;
        }

        // Single indivisible swap: readers see the fully-old or fully-new
        // registry, never a mix.
        self.handle.commit(staged);
        self.persist(&self.handle.load());

        Ok(parsed.format())
    }

    /// Persistence is best-effort once the in-memory commit happened: a
    /// write failure is reported but does not roll back the live registry.
    fn persist(&self, registry: &umbra_dns_domain::ConfigRegistry) {
        if let Err(e) = self.store.save(registry) {
            warn!("cannot write config file, content not updated: {e}");
        }
    }
}
