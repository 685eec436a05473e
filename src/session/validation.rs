// SPDX-License-Identifier: MPL-2.0
//! Required-field validation for the welcome form.

use super::{SessionDraft, SessionRequest};

/// Form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Time,
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Empty after trimming whitespace.
    Required,
}

impl FieldError {
    /// Returns the i18n message key shown next to `field`.
    #[must_use]
    pub fn i18n_key(self, field: Field) -> &'static str {
        match (self, field) {
            (FieldError::Required, Field::Name) => "error-name-required",
            (FieldError::Required, Field::Time) => "error-time-required",
        }
    }
}

/// Per-field outcome of the last submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub time: Option<FieldError>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Time => self.time,
        }
    }
}

fn check_required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

/// Validates a draft. Both fields are checked on every call so each one's
/// error is either set or cleared.
pub fn validate(draft: &SessionDraft) -> Result<SessionRequest, FormErrors> {
    let errors = FormErrors {
        name: check_required(&draft.name),
        time: check_required(&draft.time),
    };

    if errors.is_empty() {
        Ok(SessionRequest::new(
            draft.name.trim().to_string(),
            draft.time.trim().to_string(),
        ))
    } else {
        Err(errors)
    }
}
