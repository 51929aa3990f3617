pub mod application;
#[cfg(feature = "desktop")]
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::{CollectionPointForm, NavigationTarget, SubmitOutcome};
pub use domain::{FormPhase, FormSnapshot, Notice, NoticeLevel};
