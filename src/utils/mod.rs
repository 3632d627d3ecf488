pub mod error;
pub mod http;

pub use error::{AppError, Result};
