//! Boundary decoding for list endpoints.
//!
//! Remote payloads are decoded one entry at a time: an entry that does not
//! match its schema is dropped with a warning instead of failing the whole list.

use crate::log_warn;
use crate::shared::errors::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode every entry into `D`, then convert it with `TryFrom`. Entries failing
/// either step are skipped.
pub fn decode_entries<D, T>(entries: Vec<Value>, source: &str) -> Vec<T>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = AppError>,
{
    let total = entries.len();
    let decoded: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let dto = match serde_json::from_value::<D>(entry) {
                Ok(dto) => dto,
                Err(e) => {
                    log_warn!("{}: dropping entry {} with unexpected shape: {}", source, index, e);
                    return None;
                }
            };
            match T::try_from(dto) {
                Ok(value) => Some(value),
                Err(e) => {
                    log_warn!("{}: dropping invalid entry {}: {}", source, index, e);
                    None
                }
            }
        })
        .collect();

    if decoded.len() < total {
        log_warn!(
            "{}: kept {} of {} entries",
            source,
            decoded.len(),
            total
        );
    }
    decoded
}
