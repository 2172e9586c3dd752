//! TOML document writer.
//!
//! Serializes the full registry in document order, grouping fields into
//! nested tables by their dotted-key prefixes, and fully replaces the
//! destination file. The write goes to a temporary sibling first and is
//! renamed into place so a crash never leaves a truncated document as the
//! only copy.

use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};
use tracing::{debug, info};

use umbra_dns_application::ports::ConfigStore;
use umbra_dns_domain::{ConfigError, ConfigField, ConfigRegistry, ConfigValue};

/// Serialize `registry` and atomically replace the document at `path`.
pub fn save(registry: &ConfigRegistry, path: &Path) -> Result<(), ConfigError> {
    let mut doc = DocumentMut::new();

    for field in registry.iter() {
        insert_field(&mut doc, field)?;
    }

    let mut content = String::from(
        "# This file is managed by umbra-dns\n\
         #\n\
         # Do not edit it while the service is running\n\
         # or your changes may be overwritten\n",
    );
    content.push_str(&format!(
        "#\n# Last update: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    content.push_str(&doc.to_string());

    write_atomically(path, &content)?;
    info!(path = %path.display(), "config file written");
    Ok(())
}

fn insert_field(doc: &mut DocumentMut, field: &ConfigField) -> Result<(), ConfigError> {
    let segments = field.path_segments();
    let (leaf, tables) = segments
        .split_last()
        .ok_or_else(|| ConfigError::Io(format!("empty key path for {}", field.key)))?;

    let mut table = doc.as_table_mut();
    for segment in tables {
        if !table.contains_key(segment) {
            let mut nested = toml_edit::Table::new();
            nested.set_implicit(true);
            table.insert(segment, Item::Table(nested));
        }
        table = table
            .get_mut(segment)
            .and_then(Item::as_table_mut)
            .ok_or_else(|| {
                ConfigError::Io(format!("config path conflict at {} in {}", segment, field.key))
            })?;
    }

    table.insert(leaf, Item::Value(render_value(field)));

    // Description comment above the key; enumerated kinds also list the
    // accepted symbols, the way users expect to discover legal values.
    if let Some(mut key) = table.key_mut(leaf) {
        let mut comment = format!("# {}\n", field.description);
        if let Some(allowed) = field.kind().allowed_values() {
            comment.push_str(&format!("# Allowed values: [ {} ]\n", allowed.join(", ")));
        }
        key.leaf_decor_mut().set_prefix(comment);
    }

    Ok(())
}

/// Render a typed payload as a TOML value. Secrets are rendered as their
/// stored digest, which is the only form that ever reaches the disk.
fn render_value(field: &ConfigField) -> toml_edit::Value {
    match &field.value {
        ConfigValue::Bool(b) => (*b).into(),
        ConfigValue::Int(v) => i64::from(*v).into(),
        ConfigValue::Int16(v) => i64::from(*v).into(),
        ConfigValue::Uint(v) => i64::from(*v).into(),
        ConfigValue::Uint16(v) => i64::from(*v).into(),
        ConfigValue::Long(v) => (*v).into(),
        // TOML integers are 64-bit signed; larger values go through a string
        ConfigValue::Ulong(v) => match i64::try_from(*v) {
            Ok(v) => v.into(),
            Err(_) => v.to_string().into(),
        },
        ConfigValue::Double(v) => (*v).into(),
        ConfigValue::String(s) => s.as_str().into(),
        ConfigValue::Password(digest) => digest.as_str().into(),
        ConfigValue::PrivacyLevel(level) => i64::from(*level).into(),
        ConfigValue::Ipv4(addr) => addr.to_string().into(),
        ConfigValue::Ipv6(addr) => addr.to_string().into(),
        ConfigValue::StringArray(items) => {
            let mut array = toml_edit::Array::new();
            for item in items {
                array.push(item.as_str());
            }
            array.into()
        }
        other => other.format().into(),
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let io_err = |e: std::io::Error| ConfigError::Io(e.to_string());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, content).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    debug!(path = %path.display(), "document replaced via temporary file");
    Ok(())
}

/// [`ConfigStore`] adapter: persists the registry to a fixed document path.
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for TomlConfigStore {
    fn save(&self, registry: &ConfigRegistry) -> Result<(), ConfigError> {
        save(registry, &self.path)
    }
}
