pub mod cli;
pub mod config;
pub mod core;
pub mod plugins;
pub mod regions;
pub mod utils;
pub mod vendor;

// Re-export commonly used types
pub use config::RunConfig;
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
