//! JSON body extractor that also runs `validator` rules.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use tokengate_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but rejects bodies that fail their `Validate` rules.
///
/// An unparsable body and a rule violation both answer 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                ApiError::from(AppError::validation("Invalid request body"))
            })?;

        value.validate().map_err(validation_error)?;
        Ok(ValidatedJson(value))
    }
}

/// Builds a 400 whose message lists every violated rule, field by field.
fn validation_error(errors: ValidationErrors) -> ApiError {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    let message = fields
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");

    ApiError::from(AppError::validation(message)).with_details(serde_json::json!(fields))
}
