use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;

/// `Pristine → Editing → Submitting → {SubmittedOk, Editing}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub enum FormPhase {
    #[default]
    Pristine,
    Editing,
    Submitting,
    SubmittedOk,
}

impl FormPhase {
    /// A finished form is closed to edits.
    pub fn ensure_editable(&self) -> AppResult<()> {
        if *self == FormPhase::SubmittedOk {
            return Err(AppError::InvalidOperation(
                "Form was already submitted".to_string(),
            ));
        }
        Ok(())
    }

    /// Record a successful user edit.
    pub fn mark_edited(&mut self) {
        if *self == FormPhase::Pristine {
            *self = FormPhase::Editing;
        }
    }

    pub fn begin_submit(&mut self) -> AppResult<()> {
        match self {
            FormPhase::Editing => {
                *self = FormPhase::Submitting;
                Ok(())
            }
            FormPhase::Pristine => Err(AppError::InvalidOperation(
                "Nothing to submit yet".to_string(),
            )),
            FormPhase::Submitting => Err(AppError::InvalidOperation(
                "Submission already in progress".to_string(),
            )),
            FormPhase::SubmittedOk => Err(AppError::InvalidOperation(
                "Form was already submitted".to_string(),
            )),
        }
    }

    pub fn finish_submit(&mut self, succeeded: bool) {
        if *self == FormPhase::Submitting {
            *self = if succeeded {
                FormPhase::SubmittedOk
            } else {
                FormPhase::Editing
            };
        }
    }

    pub fn can_submit(&self) -> bool {
        *self == FormPhase::Editing
    }
}
