use serde::{Deserialize, Serialize};

use super::value::{ConfigValue, ValueKind};

/// Metadata flags attached to a schema entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFlags {
    /// Changing this field requires confirming the dependent resolver still
    /// accepts the resulting configuration before commit.
    pub restart_resolver: bool,

    /// Write-only secret: stored and displayed only as a one-way digest.
    pub secret: bool,
}

impl FieldFlags {
    pub const NONE: Self = Self {
        restart_resolver: false,
        secret: false,
    };

    pub const RESTART_RESOLVER: Self = Self {
        restart_resolver: true,
        secret: false,
    };

    pub const SECRET: Self = Self {
        restart_resolver: false,
        secret: true,
    };
}

/// One schema entry: a dotted key, its typed payload, the compiled-in
/// default, and metadata. The key is unique across the registry and its kind
/// never changes; `value` and `default` always share the same kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigField {
    pub key: &'static str,
    pub value: ConfigValue,
    pub default: ConfigValue,
    pub flags: FieldFlags,
    /// One-line explanation written as a comment above the key in the
    /// config document.
    pub description: &'static str,
}

impl ConfigField {
    pub fn new(
        key: &'static str,
        default: ConfigValue,
        flags: FieldFlags,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            value: default.clone(),
            default,
            flags,
            description,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Dotted-path segments, e.g. `dns.rateLimit.count` → `["dns",
    /// "rateLimit", "count"]`. The leading segments name nested tables in
    /// the document, the last one the leaf key.
    pub fn path_segments(&self) -> Vec<&'static str> {
        self.key.split('.').collect()
    }
}
