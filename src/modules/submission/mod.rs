pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{
    ContactField, ContactInfo, SubmissionClient, SubmissionReceipt, SubmissionRecord,
};
pub use infrastructure::HttpSubmissionClient;
