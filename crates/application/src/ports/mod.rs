//! Collaborator interfaces owned by the application layer.

pub mod config_store;
pub mod hosts_writer;
pub mod resolver_control;
pub mod secret_hasher;

pub use config_store::ConfigStore;
pub use hosts_writer::HostsFileWriter;
pub use resolver_control::ResolverControl;
pub use secret_hasher::SecretHasher;
