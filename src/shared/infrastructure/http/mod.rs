pub mod http_handler;
pub mod retry_util;
pub mod schema;

pub use http_handler::HttpHandler;
pub use retry_util::{RetryConfig, RetryUtil};
pub use schema::decode_entries;
