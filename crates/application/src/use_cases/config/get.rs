use std::sync::Arc;

use crate::state::ConfigHandle;
use umbra_dns_domain::{ConfigError, ConfigValue};

/// Read a single field from the live registry. Never mutates state.
pub struct GetConfigUseCase {
    handle: Arc<ConfigHandle>,
}

impl GetConfigUseCase {
    pub fn new(handle: Arc<ConfigHandle>) -> Self {
        Self { handle }
    }

    /// Current typed value for `key`. Secrets come back as their stored
    /// digest, never plaintext.
    pub fn execute(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        let live = self.handle.load();
        live.get(key)
            .map(|field| field.value.clone())
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }
}
