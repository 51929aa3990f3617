use super::retry_util::{RetryConfig, RetryUtil};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = "Ecoleta-Desktop/0.1";

/// JSON-over-HTTP access to one remote service, with timeout and retry.
#[derive(Clone)]
pub struct HttpHandler {
    client: Client,
    service_name: String,
    retry: RetryConfig,
}

impl HttpHandler {
    pub fn new(service_name: &str, timeout: Duration, retry: RetryConfig) -> AppResult<Self> {
        let client = Self::create_http_client(timeout)?;
        Ok(Self {
            client,
            service_name: service_name.to_string(),
            retry,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Create an HTTP client with consistent configuration
    fn create_http_client(timeout: Duration) -> AppResult<Client> {
        Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))
    }

    /// GET a URL whose body must be a JSON array. Entries are returned raw so
    /// callers can decode them one at a time.
    pub async fn get_json_array(&self, url: &str, operation_name: &str) -> AppResult<Vec<Value>> {
        let timer = TimedOperation::new(&format!("{} {}", self.service_name, operation_name));
        let body = RetryUtil::with_retry(
            || self.fetch_body(url),
            &self.retry,
            &format!("{} {}", self.service_name, operation_name),
        )
        .await?;
        timer.finish();

        match body {
            Value::Array(entries) => Ok(entries),
            other => Err(AppError::InvalidResponse(format!(
                "{} returned {} where an array was expected",
                self.service_name,
                Self::json_kind(&other)
            ))),
        }
    }

    /// POST a JSON body. Returns the response body when it is JSON, `Value::Null` otherwise.
    pub async fn post_json<B>(&self, url: &str, body: &B, operation_name: &str) -> AppResult<Value>
    where
        B: Serialize + Sync,
    {
        let timer = TimedOperation::new(&format!("{} {}", self.service_name, operation_name));
        let response = RetryUtil::with_retry(
            || async {
                let response = self.client.post(url).json(body).send().await?;
                self.handle_response_status(response.status())?;
                Ok::<String, AppError>(response.text().await?)
            },
            &self.retry,
            &format!("{} {}", self.service_name, operation_name),
        )
        .await?;
        timer.finish();

        Ok(serde_json::from_str(&response).unwrap_or(Value::Null))
    }

    async fn fetch_body(&self, url: &str) -> AppResult<Value> {
        let response = self.client.get(url).send().await?;
        self.handle_response_status(response.status())?;

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            AppError::InvalidResponse(format!(
                "Failed to parse {} response: {}",
                self.service_name, e
            ))
        })
    }

    /// Handle HTTP response status codes consistently across all services
    fn handle_response_status(&self, status: StatusCode) -> AppResult<()> {
        if status.is_success() {
            return Ok(());
        }

        let message = match status {
            StatusCode::TOO_MANY_REQUESTS => format!("{} rate limit exceeded", self.service_name),
            StatusCode::NOT_FOUND => format!("{} resource not found", self.service_name),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                format!("{} rejected the request", self.service_name)
            }
            _ if status.is_server_error() => format!("{} service unavailable", self.service_name),
            _ => format!("Unexpected status code from {}", self.service_name),
        };

        Err(AppError::UpstreamError {
            status: status.as_u16(),
            message,
        })
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
