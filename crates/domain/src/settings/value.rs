//! The closed set of configuration value kinds and their codec.
//!
//! Every field in the registry stores exactly one [`ConfigValue`] variant and
//! never changes kind. [`ConfigValue::parse`] is the single entry point for
//! textual input (CLI and API), [`ConfigValue::format`] produces the same
//! textual form `get` prints, and the `PartialEq` impl is the sole authority
//! for "did this field change" inside an update transaction.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::enums::{
    BlockingMode, BusyMode, ListeningMode, PtrMode, RefreshHostnames, WebTheme,
    PRIVACY_LEVEL_MAX, PRIVACY_LEVEL_MIN,
};
use crate::errors::{AddressFamily, ValidationError};

/// Kind tag for a [`ConfigValue`]. Stored per field in the schema so a field
/// can be parsed before it holds any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int,
    Int16,
    Uint,
    Uint16,
    Long,
    Ulong,
    Double,
    String,
    /// Write-only secret. Only a one-way digest is ever stored or shown.
    Password,
    PtrMode,
    BusyMode,
    BlockingMode,
    RefreshHostnames,
    ListeningMode,
    WebTheme,
    /// Bounded integer range rather than a symbol table.
    PrivacyLevel,
    Ipv4,
    Ipv6,
    StringArray,
}

impl ValueKind {
    /// Human-readable set of legal symbols, for enumerated kinds only.
    /// Used in error messages and in the written document's comments.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::PtrMode => Some(PtrMode::variants()),
            Self::BusyMode => Some(BusyMode::variants()),
            Self::BlockingMode => Some(BlockingMode::variants()),
            Self::RefreshHostnames => Some(RefreshHostnames::variants()),
            Self::ListeningMode => Some(ListeningMode::variants()),
            Self::WebTheme => Some(WebTheme::variants()),
            _ => None,
        }
    }

    /// Wording used in integer validation errors, naming the expected width.
    pub fn integer_description(&self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Int16 => "integer (16 bit)",
            Self::Uint => "unsigned integer",
            Self::Uint16 => "unsigned integer (16 bit)",
            Self::Long => "long integer",
            Self::Ulong => "unsigned long integer",
            _ => "integer",
        }
    }
}

/// One typed configuration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Int16(i16),
    Uint(u32),
    Uint16(u16),
    Long(i64),
    Ulong(u64),
    Double(f64),
    String(String),
    /// The stored digest of a secret, never the plaintext.
    Password(String),
    PtrMode(PtrMode),
    BusyMode(BusyMode),
    BlockingMode(BlockingMode),
    RefreshHostnames(RefreshHostnames),
    ListeningMode(ListeningMode),
    WebTheme(WebTheme),
    PrivacyLevel(u8),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    StringArray(Vec<String>),
}

impl ConfigValue {
    /// Kind tag of this payload.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Int16(_) => ValueKind::Int16,
            Self::Uint(_) => ValueKind::Uint,
            Self::Uint16(_) => ValueKind::Uint16,
            Self::Long(_) => ValueKind::Long,
            Self::Ulong(_) => ValueKind::Ulong,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Password(_) => ValueKind::Password,
            Self::PtrMode(_) => ValueKind::PtrMode,
            Self::BusyMode(_) => ValueKind::BusyMode,
            Self::BlockingMode(_) => ValueKind::BlockingMode,
            Self::RefreshHostnames(_) => ValueKind::RefreshHostnames,
            Self::ListeningMode(_) => ValueKind::ListeningMode,
            Self::WebTheme(_) => ValueKind::WebTheme,
            Self::PrivacyLevel(_) => ValueKind::PrivacyLevel,
            Self::Ipv4(_) => ValueKind::Ipv4,
            Self::Ipv6(_) => ValueKind::Ipv6,
            Self::StringArray(_) => ValueKind::StringArray,
        }
    }

    /// Parse textual input into a typed payload of the requested kind.
    ///
    /// For [`ValueKind::Password`] the input must already be the digest; the
    /// caller hashes plaintext before it ever reaches the codec, so the
    /// registry mutates exactly the field being set and plaintext is never
    /// stored anywhere.
    pub fn parse(kind: ValueKind, raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        match kind {
            ValueKind::Bool => {
                if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") {
                    Ok(Self::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("no") {
                    Ok(Self::Bool(false))
                } else {
                    Err(ValidationError::InvalidBoolean)
                }
            }
            ValueKind::Int => parse_integer(kind, raw).map(Self::Int),
            ValueKind::Int16 => parse_integer(kind, raw).map(Self::Int16),
            ValueKind::Uint => parse_integer(kind, raw).map(Self::Uint),
            ValueKind::Uint16 => parse_integer(kind, raw).map(Self::Uint16),
            ValueKind::Long => parse_integer(kind, raw).map(Self::Long),
            ValueKind::Ulong => parse_integer(kind, raw).map(Self::Ulong),
            ValueKind::Double => raw
                .parse::<f64>()
                .map(Self::Double)
                .map_err(|_| ValidationError::InvalidFloat),
            ValueKind::String => Ok(Self::String(raw.to_string())),
            ValueKind::Password => Ok(Self::Password(raw.to_string())),
            ValueKind::PtrMode => parse_symbol(raw, PtrMode::from_text, PtrMode::variants())
                .map(Self::PtrMode),
            ValueKind::BusyMode => parse_symbol(raw, BusyMode::from_text, BusyMode::variants())
                .map(Self::BusyMode),
            ValueKind::BlockingMode => {
                parse_symbol(raw, BlockingMode::from_text, BlockingMode::variants())
                    .map(Self::BlockingMode)
            }
            ValueKind::RefreshHostnames => {
                parse_symbol(raw, RefreshHostnames::from_text, RefreshHostnames::variants())
                    .map(Self::RefreshHostnames)
            }
            ValueKind::ListeningMode => {
                parse_symbol(raw, ListeningMode::from_text, ListeningMode::variants())
                    .map(Self::ListeningMode)
            }
            ValueKind::WebTheme => parse_symbol(raw, WebTheme::from_text, WebTheme::variants())
                .map(Self::WebTheme),
            ValueKind::PrivacyLevel => {
                let out_of_range = || ValidationError::OutOfRange {
                    min: PRIVACY_LEVEL_MIN as i64,
                    max: PRIVACY_LEVEL_MAX as i64,
                };
                let level: i64 = raw.parse().map_err(|_| out_of_range())?;
                if (PRIVACY_LEVEL_MIN as i64..=PRIVACY_LEVEL_MAX as i64).contains(&level) {
                    Ok(Self::PrivacyLevel(level as u8))
                } else {
                    Err(out_of_range())
                }
            }
            ValueKind::Ipv4 => raw
                .parse::<Ipv4Addr>()
                .map(Self::Ipv4)
                .map_err(|_| ValidationError::InvalidAddress {
                    family: AddressFamily::Ipv4,
                }),
            ValueKind::Ipv6 => raw
                .parse::<Ipv6Addr>()
                .map(Self::Ipv6)
                .map_err(|_| ValidationError::InvalidAddress {
                    family: AddressFamily::Ipv6,
                }),
            ValueKind::StringArray => parse_string_array(raw).map(Self::StringArray),
        }
    }

    /// Textual form of the stored value, identical to what `get` prints and
    /// round-trippable through [`ConfigValue::parse`].
    pub fn format(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Int16(v) => v.to_string(),
            Self::Uint(v) => v.to_string(),
            Self::Uint16(v) => v.to_string(),
            Self::Long(v) => v.to_string(),
            Self::Ulong(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::String(s) => s.clone(),
            Self::Password(digest) => digest.clone(),
            Self::PtrMode(m) => m.as_str().to_string(),
            Self::BusyMode(m) => m.as_str().to_string(),
            Self::BlockingMode(m) => m.as_str().to_string(),
            Self::RefreshHostnames(m) => m.as_str().to_string(),
            Self::ListeningMode(m) => m.as_str().to_string(),
            Self::WebTheme(m) => m.as_str().to_string(),
            Self::PrivacyLevel(level) => level.to_string(),
            Self::Ipv4(addr) => addr.to_string(),
            Self::Ipv6(addr) => addr.to_string(),
            Self::StringArray(items) => {
                // serde_json never fails on Vec<String>
                serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }
}

/// Kind-appropriate comparison: numeric for numbers, byte-wise for strings
/// and addresses, order-insensitive for arrays (duplicates are significant,
/// element order is not).
impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Uint16(a), Self::Uint16(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Ulong(a), Self::Ulong(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Password(a), Self::Password(b)) => a == b,
            (Self::PtrMode(a), Self::PtrMode(b)) => a == b,
            (Self::BusyMode(a), Self::BusyMode(b)) => a == b,
            (Self::BlockingMode(a), Self::BlockingMode(b)) => a == b,
            (Self::RefreshHostnames(a), Self::RefreshHostnames(b)) => a == b,
            (Self::ListeningMode(a), Self::ListeningMode(b)) => a == b,
            (Self::WebTheme(a), Self::WebTheme(b)) => a == b,
            (Self::PrivacyLevel(a), Self::PrivacyLevel(b)) => a == b,
            (Self::Ipv4(a), Self::Ipv4(b)) => a == b,
            (Self::Ipv6(a), Self::Ipv6(b)) => a == b,
            (Self::StringArray(a), Self::StringArray(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                let mut a_sorted: Vec<&String> = a.iter().collect();
                let mut b_sorted: Vec<&String> = b.iter().collect();
                a_sorted.sort();
                b_sorted.sort();
                a_sorted == b_sorted
            }
            _ => false,
        }
    }
}

fn parse_symbol<T>(
    raw: &str,
    lookup: fn(&str) -> Option<T>,
    variants: &'static [&'static str],
) -> Result<T, ValidationError> {
    lookup(raw).ok_or(ValidationError::InvalidEnum {
        allowed: variants.to_vec(),
    })
}

fn parse_integer<T: std::str::FromStr>(kind: ValueKind, raw: &str) -> Result<T, ValidationError> {
    raw.parse::<T>().map_err(|_| ValidationError::InvalidInteger {
        expected: kind.integer_description(),
    })
}

fn parse_string_array(raw: &str) -> Result<Vec<String>, ValidationError> {
    let parsed: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ValidationError::InvalidArray {
            reason: e.to_string(),
        })?;

    let items = parsed.as_array().ok_or_else(|| ValidationError::InvalidArray {
        reason: "not an array".to_string(),
    })?;

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => out.push(s.to_string()),
            None => return Err(ValidationError::ArrayElementNotString { index }),
        }
    }
    Ok(out)
}
