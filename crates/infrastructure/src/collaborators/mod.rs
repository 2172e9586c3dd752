pub mod hosts_file;
pub mod resolver_check;

pub use hosts_file::CustomHostsFile;
pub use resolver_check::ResolverConfigCheck;
