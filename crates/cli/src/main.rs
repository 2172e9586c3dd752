//! # Umbra DNS control CLI
//!
//! Typed get/set access to the runtime configuration registry. `set` goes
//! through the transactional update coordinator: the value is validated,
//! dependent side effects are tested against a staged copy, and only then is
//! the live configuration replaced and persisted.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use umbra_dns_application::{ConfigHandle, GetConfigUseCase, SetConfigUseCase};
use umbra_dns_domain::ConfigValue;
use umbra_dns_infrastructure::{
    Argon2PasswordHasher, CustomHostsFile, ResolverConfigCheck, TomlConfigStore,
};

mod bootstrap;

/// Derived static-hosts file regenerated when dns.hosts changes.
const CUSTOM_HOSTS_PATH: &str = "/etc/umbra-dns/hosts/custom.list";

#[derive(Parser)]
#[command(name = "umbra-dns")]
#[command(version)]
#[command(about = "A black hole for unwanted DNS traffic - config CLI")]
struct Cli {
    /// Location of the config document
    #[arg(short, long, default_value = "/etc/umbra-dns/umbra.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current value of a config option
    Get {
        /// Dotted key, e.g. dns.blocking.mode
        key: String,

        /// Print nothing; report boolean options via the exit status
        #[arg(short, long)]
        quiet: bool,
    },
    /// Validate and commit a new value for a config option
    Set {
        /// Dotted key, e.g. dns.blocking.mode
        key: String,

        /// New value in the same textual form `get` prints
        value: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose =
        umbra_dns_infrastructure::config_file::read_verbosity(&cli.config).unwrap_or(false);
    bootstrap::init_logging(verbose);

    let handle = Arc::new(ConfigHandle::new(bootstrap::load_registry(&cli.config)));

    match cli.command {
        Commands::Get { key, quiet } => run_get(handle, &key, quiet),
        Commands::Set { key, value } => run_set(handle, &cli.config, &key, &value),
    }
}

fn run_get(handle: Arc<ConfigHandle>, key: &str, quiet: bool) -> ExitCode {
    match GetConfigUseCase::new(handle).execute(key) {
        // quiet mode turns booleans into an exit status for scripting
        Ok(ConfigValue::Bool(value)) if quiet => {
            if value {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Ok(value) => {
            println!("{}", value.format());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run_set(handle: Arc<ConfigHandle>, config_path: &Path, key: &str, value: &str) -> ExitCode {
    let set = SetConfigUseCase::new(
        handle,
        Arc::new(TomlConfigStore::new(config_path)),
        Arc::new(ResolverConfigCheck::new()),
        Arc::new(CustomHostsFile::new(CUSTOM_HOSTS_PATH)),
        Arc::new(Argon2PasswordHasher),
    );

    match set.execute(key, value) {
        Ok(stored) => {
            // echo what was actually stored, post-validation and post-hash
            println!("{stored}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
