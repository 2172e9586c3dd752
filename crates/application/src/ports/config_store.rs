use umbra_dns_domain::{ConfigError, ConfigRegistry};

/// Persistence of the full registry to the on-disk document.
///
/// A save fully replaces the document; implementations are responsible for
/// filesystem-level atomicity (write-then-rename).
pub trait ConfigStore: Send + Sync {
    fn save(&self, registry: &ConfigRegistry) -> Result<(), ConfigError>;
}
