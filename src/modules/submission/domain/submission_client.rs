use super::submission_record::{SubmissionReceipt, SubmissionRecord};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Accepts a finished collection point registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn create_point(&self, record: &SubmissionRecord) -> AppResult<SubmissionReceipt>;
}
