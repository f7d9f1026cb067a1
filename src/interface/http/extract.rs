use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::interface::http::problem::{ApiProblem, SHAPE_ERROR_KIND};

/// `Json<T>` whose every rejection becomes a 422 [`ApiProblem`].
///
/// Axum's own extractor answers 400 for syntax errors and 415 for a missing
/// content type; clients of this API expect a single validation status.
/// Only JSON objects are accepted: serde would otherwise also bind a
/// positional array to a struct.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiProblem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        if !body.is_object() {
            return Err(ApiProblem::invalid_body(
                SHAPE_ERROR_KIND,
                "Input should be a valid JSON object",
            ));
        }

        serde_json::from_value(body)
            .map(Self)
            .map_err(|err| ApiProblem::invalid_body(SHAPE_ERROR_KIND, err.to_string()))
    }
}
