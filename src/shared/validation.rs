//! Validation Utilities

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use super::error::AppError;

/// Field-level validation error
#[derive(Debug)]
struct FieldError {
    field: String,
    message: String,
}

/// Reject strings that are empty once surrounding whitespace is trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// "{field} {message}" for a single failed rule
pub fn field_message(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => format!("{} {}", field, message),
        None => format!("{} is invalid", field),
    }
}

/// Flatten validation errors in `order`. Fields not listed go last, by name.
fn field_errors(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let mut field_errors: Vec<(usize, FieldError)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            let rank = order
                .iter()
                .position(|f| *f == field)
                .unwrap_or(order.len());
            errs.iter().map(move |e| {
                (
                    rank,
                    FieldError {
                        field: field.clone(),
                        message: field_message(&field, e),
                    },
                )
            })
        })
        .collect();
    field_errors.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.field.cmp(&b.field)));
    field_errors.into_iter().map(|(_, e)| e).collect()
}

/// Human-readable description of the first failing field in `order`
pub fn first_error_message(errors: &ValidationErrors, order: &[&str]) -> String {
    field_errors(errors, order)
        .into_iter()
        .next()
        .map(|e| e.message)
        .unwrap_or_else(|| "Validation failed".into())
}

/// Convert validation errors to AppError, reporting the first field in `order`
pub fn validation_error(errors: ValidationErrors, order: &[&str]) -> AppError {
    AppError::Validation(first_error_message(&errors, order))
}
