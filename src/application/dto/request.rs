//! Request DTOs
//!
//! Data structures for API request bodies. Every field is optional so that
//! an absent field (or explicit `null`) stays distinct from an empty string.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CreateTodoDto, PatchTodoDto, TodoField, UpdateTodoDto};
use crate::shared::error::AppError;
use crate::shared::validation::{field_message, not_blank, validation_error};

/// Create todo request. Validated by the service.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<CreateTodoRequest> for CreateTodoDto {
    fn from(body: CreateTodoRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
        }
    }
}

/// Full update request (PUT)
///
/// Presence of each field is enforced by the service; supplied text fields
/// must not be blank.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Blank check in field order. Stops at the first absent field, which the
    /// service then reports as missing, so the earliest failing field wins.
    pub fn check(&self) -> Result<(), AppError> {
        let text_fields = [
            (TodoField::Name, &self.name),
            (TodoField::Description, &self.description),
        ];
        for (field, value) in text_fields {
            let Some(text) = value else { break };
            not_blank(text)
                .map_err(|e| AppError::Validation(field_message(field.as_str(), &e)))?;
        }
        Ok(())
    }
}

impl From<UpdateTodoRequest> for UpdateTodoDto {
    fn from(body: UpdateTodoRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            completed: body.completed,
        }
    }
}

/// Partial update request (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchTodoRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,

    pub completed: Option<bool>,
}

impl PatchTodoRequest {
    /// Blank check on the supplied text fields, first field in order wins
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| validation_error(e, &TodoField::names()))
    }
}

impl From<PatchTodoRequest> for PatchTodoDto {
    fn from(body: PatchTodoRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            completed: body.completed,
        }
    }
}
