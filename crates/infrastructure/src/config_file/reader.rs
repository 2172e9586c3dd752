//! TOML document reader.
//!
//! Loads the on-disk document and overlays it onto the compiled defaults.
//! The absence of the file is the normal first-run state, not an error, and
//! a field that fails validation falls back to its default without aborting
//! the rest of the load.

use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, warn};

use umbra_dns_domain::{BlockingMode, ConfigRegistry, ConfigValue, ValidationError, ValueKind};

/// Load the document at `path` and overlay it onto the defaults.
///
/// Returns `None` when the file is absent or unparseable; callers fall back
/// to a pure-defaults registry. Unknown sections and keys are ignored.
pub fn load(path: &Path) -> Option<ConfigRegistry> {
    // Verbosity is read out-of-band first so the main pass knows how loudly
    // to report missing keys.
    let verbose = read_verbosity(path).unwrap_or(false);

    // The blocking mode is needed by other subsystems before the full load
    // completes; reading it here mirrors that early access.
    if let Some(mode) = read_blocking_mode(path) {
        debug!(mode = mode.as_str(), "early read: dns.blocking.mode");
    }

    let document = parse_document(path)?;
    let mut registry = ConfigRegistry::default();

    for field in registry.iter_mut() {
        match lookup(&document, &field.path_segments()) {
            Some(value) => match from_toml(field.kind(), value) {
                Ok(parsed) => field.value = parsed,
                Err(e) => warn!("Invalid setting for {}, using default: {e}", field.key),
            },
            None if verbose => debug!("{} does not exist", field.key),
            None => {}
        }
    }

    debug!("config file parsed, {} fields considered", registry.len());
    Some(registry)
}

/// Narrow early accessor: diagnostics verbosity (`debug.config`), readable
/// before logging for the main load is decided.
pub fn read_verbosity(path: &Path) -> Option<bool> {
    let document = parse_document(path)?;
    lookup(&document, &["debug", "config"])?.as_bool()
}

/// Narrow early accessor: the blocking mode, queried by the reply engine
/// independently of the main load.
pub fn read_blocking_mode(path: &Path) -> Option<BlockingMode> {
    let document = parse_document(path)?;
    let text = lookup(&document, &["dns", "blocking", "mode"])?.as_str()?;
    let mode = BlockingMode::from_text(text);
    if mode.is_none() {
        warn!("Unknown blocking mode \"{text}\", using default");
    }
    mode
}

/// Narrow early accessor: the log file path, needed before logging itself
/// is set up.
pub fn read_log_file_path(path: &Path) -> Option<String> {
    let document = parse_document(path)?;
    Some(lookup(&document, &["files", "log"])?.as_str()?.to_string())
}

fn parse_document(path: &Path) -> Option<Table> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No config file available ({e}), using defaults");
            return None;
        }
    };

    match content.parse::<Table>() {
        Ok(table) => Some(table),
        Err(e) => {
            warn!("Cannot parse config file: {e}");
            None
        }
    }
}

/// Walk nested tables along the dotted-key segments down to the leaf value.
fn lookup<'a>(document: &'a Table, segments: &[&str]) -> Option<&'a Value> {
    let (leaf, tables) = segments.split_last()?;
    let mut current = document;
    for segment in tables {
        current = current.get(*segment)?.as_table()?;
    }
    current.get(*leaf)
}

/// Convert a TOML value into the field's kind. TOML carries native booleans,
/// integers, floats, and arrays, so this is a structural conversion rather
/// than a re-parse of CLI text.
fn from_toml(kind: ValueKind, value: &Value) -> Result<ConfigValue, ValidationError> {
    match kind {
        ValueKind::Bool => value
            .as_bool()
            .map(ConfigValue::Bool)
            .ok_or(ValidationError::InvalidBoolean),
        ValueKind::Int => integer(kind, value).map(ConfigValue::Int),
        ValueKind::Int16 => integer(kind, value).map(ConfigValue::Int16),
        ValueKind::Uint => integer(kind, value).map(ConfigValue::Uint),
        ValueKind::Uint16 => integer(kind, value).map(ConfigValue::Uint16),
        ValueKind::Long => integer(kind, value).map(ConfigValue::Long),
        // values above i64::MAX are written as strings, TOML integers being
        // 64-bit signed
        ValueKind::Ulong => match value {
            Value::String(s) => ConfigValue::parse(kind, s),
            _ => integer(kind, value).map(ConfigValue::Ulong),
        },
        ValueKind::Double => match value {
            Value::Float(f) => Ok(ConfigValue::Double(*f)),
            Value::Integer(i) => Ok(ConfigValue::Double(*i as f64)),
            _ => Err(ValidationError::InvalidFloat),
        },
        ValueKind::StringArray => {
            let items = value.as_array().ok_or_else(|| ValidationError::InvalidArray {
                reason: "not an array".to_string(),
            })?;
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) => out.push(s.to_string()),
                    None => return Err(ValidationError::ArrayElementNotString { index }),
                }
            }
            Ok(ConfigValue::StringArray(out))
        }
        ValueKind::PrivacyLevel => match value {
            Value::Integer(i) => ConfigValue::parse(kind, &i.to_string()),
            Value::String(s) => ConfigValue::parse(kind, s),
            _ => Err(ValidationError::OutOfRange { min: 0, max: 3 }),
        },
        // Strings, secrets (already digests on disk), enums, and addresses
        // share the textual codec with the CLI.
        _ => {
            let text = value.as_str().ok_or_else(|| text_expected_error(kind))?;
            ConfigValue::parse(kind, text)
        }
    }
}

fn text_expected_error(kind: ValueKind) -> ValidationError {
    if let Some(allowed) = kind.allowed_values() {
        return ValidationError::InvalidEnum {
            allowed: allowed.to_vec(),
        };
    }
    match kind {
        ValueKind::Ipv4 => ValidationError::InvalidAddress {
            family: umbra_dns_domain::AddressFamily::Ipv4,
        },
        ValueKind::Ipv6 => ValidationError::InvalidAddress {
            family: umbra_dns_domain::AddressFamily::Ipv6,
        },
        _ => ValidationError::InvalidString,
    }
}

fn integer<T: TryFrom<i64>>(kind: ValueKind, value: &Value) -> Result<T, ValidationError> {
    let err = || ValidationError::InvalidInteger {
        expected: kind.integer_description(),
    };
    let wide = value.as_integer().ok_or_else(err)?;
    T::try_from(wide).map_err(|_| err())
}
