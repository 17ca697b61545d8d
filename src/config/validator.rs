use std::collections::HashMap;
use thiserror::Error;

use crate::config::{Settings, WidgetSettings};
use crate::domain::CandidateItem;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_widget(&settings.widget) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_candidates(&settings.candidates) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_widget(widget: &WidgetSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if widget.placeholder.contains('\n') {
            errors.push(ValidationError::InvalidValue {
                field: "widget.placeholder".to_string(),
                reason: "Placeholder must fit on a single line".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_candidates(candidates: &[CandidateItem]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_ids = HashMap::new();

        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.id.is_empty() {
                errors.push(ValidationError::MissingField(format!("candidates[{}].id", idx)));
            } else if let Some(prev_idx) = seen_ids.insert(&candidate.id, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Candidate id '{}' appears at indices {} and {}",
                    candidate.id, prev_idx, idx
                )));
            }

            if candidate.label.trim().is_empty() {
                errors.push(ValidationError::MissingField(format!("candidates[{}].label", idx)));
            }

            if candidate.image.as_ref().is_some_and(|image| image.as_str().is_empty()) {
                errors.push(ValidationError::InvalidValue {
                    field: format!("candidates[{}].image", idx),
                    reason: "Image reference must not be empty".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
