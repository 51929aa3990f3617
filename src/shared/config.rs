use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_REGIONS_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Runtime settings for the remote collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend serving `items` and accepting `points`
    pub api_url: String,
    /// Address lookup service (states and municipalities)
    pub regions_api_url: String,
    pub http_timeout: Duration,
    /// Extra attempts after the first one for transient failures
    pub http_retries: u32,
    pub geolocation_timeout: Duration,
    /// `(latitude, longitude)` used by the fixed geolocation provider
    pub device_position: Option<(f64, f64)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            regions_api_url: DEFAULT_REGIONS_API_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            http_retries: 1,
            geolocation_timeout: Duration::from_secs(5),
            device_position: None,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after merging a `.env` file if present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;

        log_info!(
            "Configuration loaded: api={}, regions={}, timeout={:?}, retries={}",
            config.api_url,
            config.regions_api_url,
            config.http_timeout,
            config.http_retries
        );
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup("ECOLETA_API_URL") {
            Some(url) => Self::validate_url("ECOLETA_API_URL", &url)?,
            None => defaults.api_url,
        };
        let regions_api_url = match lookup("ECOLETA_REGIONS_API_URL") {
            Some(url) => Self::validate_url("ECOLETA_REGIONS_API_URL", &url)?,
            None => defaults.regions_api_url,
        };
        let http_timeout = match lookup("ECOLETA_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(Self::parse_positive("ECOLETA_HTTP_TIMEOUT_SECS", &raw)?),
            None => defaults.http_timeout,
        };
        let http_retries = match lookup("ECOLETA_HTTP_RETRIES") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::ConfigError(format!("ECOLETA_HTTP_RETRIES: {}", e))
            })?,
            None => defaults.http_retries,
        };
        let geolocation_timeout = match lookup("ECOLETA_GEOLOCATION_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(Self::parse_positive(
                "ECOLETA_GEOLOCATION_TIMEOUT_SECS",
                &raw,
            )?),
            None => defaults.geolocation_timeout,
        };
        let device_position = match lookup("ECOLETA_DEVICE_POSITION") {
            Some(raw) if !raw.trim().is_empty() => Some(Self::parse_position(&raw)?),
            _ => None,
        };

        Ok(Self {
            api_url,
            regions_api_url,
            http_timeout,
            http_retries,
            geolocation_timeout,
            device_position,
        })
    }

    fn validate_url(key: &str, url: &str) -> AppResult<String> {
        let url = url.trim().trim_end_matches('/');
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "{} must start with http:// or https://",
                key
            )));
        }
        Ok(url.to_string())
    }

    fn parse_positive(key: &str, raw: &str) -> AppResult<u64> {
        match raw.trim().parse::<u64>() {
            Ok(0) => Err(AppError::ConfigError(format!("{} must be positive", key))),
            Ok(value) => Ok(value),
            Err(e) => Err(AppError::ConfigError(format!("{}: {}", key, e))),
        }
    }

    /// Parses `"lat,lng"`.
    fn parse_position(raw: &str) -> AppResult<(f64, f64)> {
        let (lat, lng) = raw.split_once(',').ok_or_else(|| {
            AppError::ConfigError(
                "ECOLETA_DEVICE_POSITION must look like '<latitude>,<longitude>'".to_string(),
            )
        })?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::ConfigError(format!("ECOLETA_DEVICE_POSITION: {}", e)))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::ConfigError(format!("ECOLETA_DEVICE_POSITION: {}", e)))?;
        Ok((latitude, longitude))
    }
}
