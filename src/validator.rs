//! JSON body extraction with schema validation.
//!
//! [`ValidatedJson`] deserializes the body and runs the DTO's `validator`
//! rules, converting both failure kinds into the field-scoped error envelope
//! (`{"errors": {field: msg}}`).

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .iter()
                .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field.to_string(), message)
        })
        .collect()
}

fn rejection_errors(rejection: &JsonRejection) -> HashMap<String, String> {
    let body_text = rejection.body_text();

    if let Some(field) = body_text
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return HashMap::from([(field.to_string(), format!("{} is required", field))]);
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return HashMap::from([(
            "body".to_string(),
            "Missing 'Content-Type: application/json' header".to_string(),
        )]);
    }

    HashMap::from([("body".to_string(), "Invalid request body".to_string())])
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection_errors(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(field_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
