//! Custom request extractors
//!
//! Provides a JSON extractor that rejects malformed bodies through
//! [`ServerError`], so validation failures carry field-level detail in the
//! same error shape as the rest of the API.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

/// JSON extractor with field-level error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = match rejection {
                    // body_text names the offending field for serde errors
                    JsonRejection::JsonDataError(err) => err.body_text(),
                    JsonRejection::JsonSyntaxError(err) => err.body_text(),
                    JsonRejection::MissingJsonContentType(_) => {
                        "missing 'Content-Type: application/json' header".to_string()
                    }
                    other => other.body_text(),
                };
                Err(ServerError::InvalidRequest(message))
            }
        }
    }
}
