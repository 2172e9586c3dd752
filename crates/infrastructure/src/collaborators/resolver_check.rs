//! Dependent-resolver configuration check.
//!
//! Fields flagged `restart_resolver` feed the config of the DNS-serving
//! process. Before such a change is committed, the staged registry is
//! rendered into that process's config format and validated, without
//! touching the running resolver. The first problem found is returned as
//! the diagnostic the CLI shows.

use std::net::{IpAddr, SocketAddr};
use tracing::debug;

use umbra_dns_application::ports::ResolverControl;
use umbra_dns_domain::{ConfigRegistry, ConfigValue, ListeningMode};

#[derive(Default)]
pub struct ResolverConfigCheck;

impl ResolverConfigCheck {
    pub fn new() -> Self {
        Self
    }

    /// Render the resolver config lines derived from the registry.
    /// Also used by the validation pass below.
    pub fn render(&self, registry: &ConfigRegistry) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(ConfigValue::StringArray(upstreams)) =
            registry.get("dns.upstreams").map(|f| &f.value)
        {
            for upstream in upstreams {
                lines.push(format!("server={upstream}"));
            }
        }
        if let Some(ConfigValue::Uint16(port)) = registry.get("dns.port").map(|f| &f.value) {
            lines.push(format!("port={port}"));
        }
        if let Some(ConfigValue::String(interface)) =
            registry.get("dns.interface").map(|f| &f.value)
        {
            if !interface.is_empty() {
                lines.push(format!("interface={interface}"));
            }
        }
        if let Some(ConfigValue::Bool(true)) = registry.get("dns.bogusPriv").map(|f| &f.value) {
            lines.push("bogus-priv".to_string());
        }
        if let Some(ConfigValue::Bool(true)) = registry.get("dns.domainNeeded").map(|f| &f.value) {
            lines.push("domain-needed".to_string());
        }
        if let Some(ConfigValue::Bool(true)) = registry.get("dns.dnssec").map(|f| &f.value) {
            lines.push("dnssec".to_string());
        }

        lines
    }
}

impl ResolverControl for ResolverConfigCheck {
    fn test_configuration(&self, staged: &ConfigRegistry) -> Result<(), String> {
        if let Some(ConfigValue::StringArray(upstreams)) =
            staged.get("dns.upstreams").map(|f| &f.value)
        {
            for upstream in upstreams {
                if upstream.parse::<IpAddr>().is_err() && upstream.parse::<SocketAddr>().is_err() {
                    return Err(format!(
                        "upstream \"{upstream}\" is not a valid address or address:port"
                    ));
                }
            }
        }

        if let Some(ConfigValue::Uint16(0)) = staged.get("dns.port").map(|f| &f.value) {
            return Err("dns.port must not be 0".to_string());
        }

        // Single-interface modes are meaningless without a named interface.
        let mode = staged.get("dns.listeningMode").map(|f| &f.value);
        if let Some(ConfigValue::ListeningMode(ListeningMode::Single | ListeningMode::Bind)) = mode
        {
            match staged.get("dns.interface").map(|f| &f.value) {
                Some(ConfigValue::String(interface)) if !interface.is_empty() => {}
                _ => {
                    return Err(
                        "dns.listeningMode SINGLE/BIND requires dns.interface to be set".to_string()
                    )
                }
            }
        }

        debug!(lines = self.render(staged).len(), "staged resolver config validated");
        Ok(())
    }
}
