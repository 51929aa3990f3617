pub mod contact_info;
pub mod submission_client;
pub mod submission_record;

pub use contact_info::{ContactField, ContactInfo};
pub use submission_client::SubmissionClient;
#[cfg(test)]
pub use submission_client::MockSubmissionClient;
pub use submission_record::{SubmissionReceipt, SubmissionRecord};
