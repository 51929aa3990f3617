use serde::{Deserialize, Serialize};

/// Contact details typed by the user. Free text, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

impl ContactInfo {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Whatsapp => self.whatsapp = value,
        }
    }
}
