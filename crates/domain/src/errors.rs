use thiserror::Error;

/// Address family named in [`ValidationError::InvalidAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// A value failed the type, range, or symbol-table rule of its field.
///
/// Messages name the accepted value space so CLI users see what would have
/// been legal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("allowed options are: [ true, false, yes, no ]")]
    InvalidBoolean,

    #[error("allowed options are: {expected}")]
    InvalidInteger { expected: &'static str },

    #[error("allowed options are: floating point number")]
    InvalidFloat,

    #[error("allowed options are: string")]
    InvalidString,

    #[error("allowed options are: [ {} ]", allowed.join(", "))]
    InvalidEnum { allowed: Vec<&'static str> },

    #[error("allowed options are: integer between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("allowed options are: valid {family} address")]
    InvalidAddress { family: AddressFamily },

    #[error("not a valid string array (example: [ \"a\", \"b\", \"c\" ]): {reason}")]
    InvalidArray { reason: String },

    #[error("element with index {index} is not a string")]
    ArrayElementNotString { index: usize },
}

/// Everything the configuration core can report to a caller.
///
/// None of these are fatal to the owning process: user errors leave the live
/// registry untouched, and I/O failures degrade (defaults on load, logged
/// warning on post-commit persist).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown config option: {0}")]
    UnknownKey(String),

    #[error("config setting {key} is invalid, {source}")]
    Invalid {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error("dependent resolver rejected the new configuration: {0}")]
    DependentCheckFailed(String),

    #[error("hosts file regeneration failed: {0}")]
    HostsFileFailed(String),

    #[error("cannot hash secret value: {0}")]
    SecretHashFailed(String),

    #[error("config file I/O error: {0}")]
    Io(String),
}

impl ConfigError {
    /// Process exit status for the CLI surface. Unknown keys get their own
    /// code so scripts can tell a typo from a rejected value.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownKey(_) => 2,
            _ => 1,
        }
    }
}
