//! Derived static-hosts file.
//!
//! `dns.hosts` holds "IP NAME" entries; when it changes, this file is
//! regenerated from the staged registry before the commit so the resolver
//! picks the entries up without a restart.

use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

use umbra_dns_application::ports::HostsFileWriter;
use umbra_dns_domain::{ConfigRegistry, ConfigValue};

pub struct CustomHostsFile {
    path: PathBuf,
}

impl CustomHostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn render(registry: &ConfigRegistry) -> Result<String, String> {
        let entries = match registry.get("dns.hosts").map(|f| &f.value) {
            Some(ConfigValue::StringArray(entries)) => entries,
            _ => return Err("dns.hosts is missing from the registry".to_string()),
        };

        let mut out = String::from("# Automatically generated by umbra-dns, do not edit\n");
        for entry in entries {
            let mut parts = entry.split_whitespace();
            let ip = parts
                .next()
                .ok_or_else(|| format!("empty hosts entry \"{entry}\""))?;
            ip.parse::<IpAddr>()
                .map_err(|_| format!("hosts entry \"{entry}\" does not start with an IP address"))?;
            if parts.next().is_none() {
                return Err(format!("hosts entry \"{entry}\" has no hostname"));
            }
            out.push_str(entry);
            out.push('\n');
        }
        Ok(out)
    }
}

impl HostsFileWriter for CustomHostsFile {
    fn regenerate(&self, staged: &ConfigRegistry) -> Result<(), String> {
        let content = Self::render(staged)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
        }

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, &content).map_err(|e| e.to_string())?;
        std::fs::rename(&tmp, &self.path).map_err(|e| e.to_string())?;

        info!(path = %self.path.display(), "custom hosts file regenerated");
        Ok(())
    }
}
