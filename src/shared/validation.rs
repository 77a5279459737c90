//! Validation Utilities

use validator::{Validate, ValidationErrors};

use super::error::AppError;

/// Validate a request value, converting failures to `AppError::Validation`.
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(validation_error)
}

/// Convert validation errors to AppError.
///
/// Fields are reported in name order so the message is deterministic.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .first()
        .map(|(field, message)| format!("{}: {}", field, message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}
