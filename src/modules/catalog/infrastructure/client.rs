use super::dto::ItemDto;
use crate::modules::catalog::domain::{ItemCatalogClient, ItemCategory};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{decode_entries, HttpHandler, RetryConfig};
use crate::shared::utils::LogContext;
use crate::log_debug;
use async_trait::async_trait;

const SERVICE_NAME: &str = "Ecoleta API";

/// Reads the item catalog from the backend's `items` endpoint.
pub struct HttpItemCatalogClient {
    http: HttpHandler,
    base_url: String,
}

impl HttpItemCatalogClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = HttpHandler::new(
            SERVICE_NAME,
            config.http_timeout,
            RetryConfig::with_max_retries(config.http_retries),
        )?;
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
impl ItemCatalogClient for HttpItemCatalogClient {
    async fn list_items(&self) -> AppResult<Vec<ItemCategory>> {
        let url = format!("{}/items", self.base_url);
        LogContext::api_call(self.http.service_name(), "GET /items");

        let entries = self.http.get_json_array(&url, "list items").await?;
        let items: Vec<ItemCategory> = decode_entries::<ItemDto, ItemCategory>(entries, "items");

        log_debug!("Item catalog loaded with {} categories", items.len());
        Ok(items)
    }
}
