use super::dto::{CreatePointRequest, CreatePointResponse};
use crate::modules::submission::domain::{SubmissionClient, SubmissionReceipt, SubmissionRecord};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{HttpHandler, RetryConfig};
use crate::shared::utils::LogContext;
use crate::{log_info, log_warn};
use async_trait::async_trait;

const SERVICE_NAME: &str = "Ecoleta API";

/// Posts registrations to the backend's `points` endpoint.
///
/// Writes are sent once: a retried POST after a timeout could register the
/// same point twice. The user retries from the form instead.
pub struct HttpSubmissionClient {
    http: HttpHandler,
    base_url: String,
}

impl HttpSubmissionClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = HttpHandler::new(SERVICE_NAME, config.http_timeout, RetryConfig::no_retry())?;
        Ok(Self::with_handler(&config.api_url, http))
    }

    pub fn with_handler(base_url: &str, http: HttpHandler) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn create_point(&self, record: &SubmissionRecord) -> AppResult<SubmissionReceipt> {
        let url = format!("{}/points", self.base_url);
        let request = CreatePointRequest::from(record);
        LogContext::api_call(self.http.service_name(), "POST /points");

        let body = self.http.post_json(&url, &request, "create point").await?;
        let response = if body.is_null() {
            CreatePointResponse::default()
        } else {
            serde_json::from_value::<CreatePointResponse>(body)
                .map_err(AppError::from)
                .unwrap_or_else(|e| {
                    log_warn!("Point created but response was not understood: {}", e);
                    CreatePointResponse::default()
                })
        };

        let receipt = SubmissionReceipt::from(response);
        log_info!(
            "Collection point '{}' registered in {}/{} (id: {:?})",
            record.contact.name,
            record.municipality,
            record.region,
            receipt.point_id
        );
        Ok(receipt)
    }
}
