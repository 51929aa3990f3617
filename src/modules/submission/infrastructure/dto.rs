use crate::modules::submission::domain::{SubmissionReceipt, SubmissionRecord};
use serde::{Deserialize, Serialize};

/// Body of `POST /points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePointRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<i32>,
}

impl From<&SubmissionRecord> for CreatePointRequest {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            name: record.contact.name.clone(),
            email: record.contact.email.clone(),
            whatsapp: record.contact.whatsapp.clone(),
            uf: record.region.as_str().to_string(),
            city: record.municipality.as_str().to_string(),
            latitude: record.coordinate.latitude,
            longitude: record.coordinate.longitude,
            items: record.items.iter().copied().collect(),
        }
    }
}

/// Response of `POST /points`. Only the id is read, and only if present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePointResponse {
    #[serde(default)]
    pub id: Option<i32>,
}

impl From<CreatePointResponse> for SubmissionReceipt {
    fn from(response: CreatePointResponse) -> Self {
        Self {
            point_id: response.id,
        }
    }
}
