use umbra_dns_domain::ConfigRegistry;

/// Interface to the derived static-hosts file.
///
/// Invoked when the field holding host overrides changes: the file is
/// regenerated from the staged registry before the change is committed, so a
/// rejected regeneration leaves both the live registry and the file alone.
pub trait HostsFileWriter: Send + Sync {
    fn regenerate(&self, staged: &ConfigRegistry) -> Result<(), String>;
}
