use super::dto::{IbgeMunicipalityDto, IbgeStateDto};
use crate::log_debug;
use crate::modules::region::domain::{MunicipalityName, RegionCode, RegionDirectoryClient};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{decode_entries, HttpHandler, RetryConfig};
use crate::shared::utils::LogContext;
use async_trait::async_trait;

const SERVICE_NAME: &str = "IBGE";

/// Client for the IBGE `localidades` API.
pub struct IbgeRegionDirectoryClient {
    http: HttpHandler,
    base_url: String,
}

impl IbgeRegionDirectoryClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = HttpHandler::new(
            SERVICE_NAME,
            config.http_timeout,
            RetryConfig::with_max_retries(config.http_retries),
        )?;
        Ok(Self::with_handler(&config.regions_api_url, http))
    }

    pub fn with_handler(base_url: &str, http: HttpHandler) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RegionDirectoryClient for IbgeRegionDirectoryClient {
    async fn list_regions(&self) -> AppResult<Vec<RegionCode>> {
        let url = format!("{}/estados", self.base_url);
        LogContext::api_call(SERVICE_NAME, "GET /estados");
        let entries = self.http.get_json_array(&url, "list states").await?;

        let mut regions: Vec<RegionCode> =
            decode_entries::<IbgeStateDto, RegionCode>(entries, "IBGE states");
        regions.sort();
        regions.dedup();

        log_debug!("Loaded {} regions", regions.len());
        Ok(regions)
    }

    async fn list_municipalities(&self, region: &RegionCode) -> AppResult<Vec<MunicipalityName>> {
        let url = format!(
            "{}/estados/{}/municipios",
            self.base_url,
            urlencoding::encode(region.as_str())
        );
        LogContext::api_call(SERVICE_NAME, "GET /estados/{UF}/municipios");
        let entries = self.http.get_json_array(&url, "list municipalities").await?;

        let municipalities: Vec<MunicipalityName> =
            decode_entries::<IbgeMunicipalityDto, MunicipalityName>(entries, "IBGE municipalities");

        log_debug!(
            "Loaded {} municipalities for {}",
            municipalities.len(),
            region
        );
        Ok(municipalities)
    }
}
