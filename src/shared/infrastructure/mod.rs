/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod http;

// Re-exports for convenience
pub use http::{decode_entries, HttpHandler, RetryConfig, RetryUtil};
