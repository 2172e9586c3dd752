//! Umbra DNS Infrastructure Layer
//!
//! Adapters behind the application ports: the TOML document reader/writer,
//! password hashing, and the dependent-resolver and hosts-file
//! collaborators.

pub mod auth;
pub mod collaborators;
pub mod config_file;

pub use auth::Argon2PasswordHasher;
pub use collaborators::{CustomHostsFile, ResolverConfigCheck};
pub use config_file::TomlConfigStore;
