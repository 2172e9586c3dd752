use umbra_dns_domain::ConfigRegistry;

/// Interface to the dependent DNS-serving process.
///
/// Invoked only for fields flagged `restart_resolver`: the implementation
/// must check that the resolver would still start with the staged
/// configuration, without restarting or otherwise mutating the live process.
/// The returned error text is surfaced verbatim to the caller.
pub trait ResolverControl: Send + Sync {
    fn test_configuration(&self, staged: &ConfigRegistry) -> Result<(), String>;
}
