pub mod service;

pub use service::{CollectionPointForm, NavigationTarget, SubmitOutcome};
