//! Typed configuration registry: value kinds, codec, and schema.

pub mod enums;
pub mod field;
pub mod registry;
pub mod value;

pub use enums::{
    BlockingMode, BusyMode, ListeningMode, PtrMode, RefreshHostnames, WebTheme,
    PRIVACY_LEVEL_MAX, PRIVACY_LEVEL_MIN,
};
pub use field::{ConfigField, FieldFlags};
pub use registry::ConfigRegistry;
pub use value::{ConfigValue, ValueKind};
