// Shared kernel: concerns used by every module

pub mod config; // Runtime settings from the environment
pub mod errors; // Shared error types
pub mod infrastructure; // HTTP access with timeout and retry
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
