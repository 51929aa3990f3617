use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

// Same grammar browsers apply to `<input type="email">`.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> Result<&'static Regex, AppError> {
    if let Some(re) = EMAIL_REGEX.get() {
        return Ok(re);
    }
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {}", e)))?;
    Ok(EMAIL_REGEX.get_or_init(|| re))
}

pub struct Validator;

impl Validator {
    /// An empty address passes, like an optional email input would.
    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.is_empty() {
            return Ok(());
        }

        if !email_regex()?.is_match(email) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }

    pub fn validate_region_code(code: &str) -> Result<(), AppError> {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::InvalidInput(format!(
                "Region code must be two letters, got '{}'",
                code
            )));
        }
        Ok(())
    }

    pub fn validate_item_id(id: i32) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::InvalidInput(
                "Item ID must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_latitude(latitude: f64) -> Result<(), AppError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidInput(format!(
                "Latitude {} is outside -90..=90",
                latitude
            )));
        }
        Ok(())
    }

    pub fn validate_longitude(longitude: f64) -> Result<(), AppError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidInput(format!(
                "Longitude {} is outside -180..=180",
                longitude
            )));
        }
        Ok(())
    }
}
