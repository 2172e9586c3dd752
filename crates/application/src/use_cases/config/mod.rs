pub mod get;
pub mod set;

pub use get::GetConfigUseCase;
pub use set::SetConfigUseCase;
