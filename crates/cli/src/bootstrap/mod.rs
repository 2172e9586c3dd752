pub mod config;
pub mod logging;

pub use config::load_registry;
pub use logging::init_logging;
