//! Umbra DNS Application Layer
//!
//! Use cases for the typed configuration registry: the CLI accessor
//! (get/set) and the transactional update coordinator, plus the ports the
//! coordinator calls out to (dependent resolver test, hosts file
//! regeneration, document persistence, secret hashing).

pub mod ports;
pub mod state;
pub mod use_cases;

pub use state::ConfigHandle;
pub use use_cases::config::{GetConfigUseCase, SetConfigUseCase};
