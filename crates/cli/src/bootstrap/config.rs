use std::path::Path;
use tracing::info;

use umbra_dns_domain::ConfigRegistry;
use umbra_dns_infrastructure::config_file::load;

/// Build the live registry: compiled defaults overlaid with the document at
/// `path`. An absent or unreadable document is the normal first-run state
/// and yields pure defaults.
pub fn load_registry(path: &Path) -> ConfigRegistry {
    match load(path) {
        Some(registry) => {
            info!(
                config_file = %path.display(),
                fields = registry.len(),
                "Configuration loaded"
            );
            registry
        }
        None => {
            info!(
                config_file = %path.display(),
                "No config file available, using defaults"
            );
            ConfigRegistry::default()
        }
    }
}
