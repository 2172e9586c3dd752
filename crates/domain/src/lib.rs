//! Umbra DNS Domain Layer
//!
//! Pure types for the runtime configuration core: the closed value-kind set
//! and its codec, the compiled field schema, the ordered registry, and the
//! error taxonomy. No I/O lives here.

pub mod errors;
pub mod settings;

pub use errors::{AddressFamily, ConfigError, ValidationError};
pub use settings::{
    BlockingMode, BusyMode, ConfigField, ConfigRegistry, ConfigValue, FieldFlags, ListeningMode,
    PtrMode, RefreshHostnames, ValueKind, WebTheme,
};
