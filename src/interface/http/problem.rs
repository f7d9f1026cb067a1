use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiProblem>;

pub const ROUTE_NOT_FOUND_DETAIL: &str = "Not Found";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

/// Issue type for a body that parses as JSON but is not a course object.
pub const SHAPE_ERROR_KIND: &str = "model_attributes_type";

/// Error response rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    detail: ProblemDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProblemDetail {
    Message(String),
    Issues(Vec<FieldIssue>),
}

/// One rejected part of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ApiProblem {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, ProblemDetail::Message(error.to_string()))
            }
        }
    }

    pub fn route_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ProblemDetail::Message(ROUTE_NOT_FOUND_DETAIL.to_string()),
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ProblemDetail::Message(METHOD_NOT_ALLOWED_DETAIL.to_string()),
        )
    }

    pub fn invalid_body(kind: &'static str, msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ProblemDetail::Issues(vec![FieldIssue {
                loc: vec!["body".to_string()],
                msg: msg.into(),
                kind,
            }]),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &ProblemDetail {
        &self.detail
    }

    fn new(status: StatusCode, detail: ProblemDetail) -> Self {
        Self { status, detail }
    }
}

impl From<JsonRejection> for ApiProblem {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => SHAPE_ERROR_KIND,
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_unreadable",
        };
        Self::invalid_body(kind, rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ProblemBody {
    detail: ProblemDetail,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        (self.status, Json(ProblemBody { detail: self.detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn not_found_renders_plain_detail() {
        let problem = ApiProblem::from_domain(DomainError::not_found("Course"));
        assert_eq!(problem.status(), StatusCode::NOT_FOUND);

        let body = serde_json::to_value(ProblemBody {
            detail: problem.detail().clone(),
        })
        .unwrap();
        assert_eq!(body, json!({ "detail": "Course not found" }));
    }

    #[test]
    fn invalid_body_renders_issue_list() {
        let problem = ApiProblem::invalid_body("json_invalid", "bad json");
        assert_eq!(problem.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = serde_json::to_value(ProblemBody {
            detail: problem.detail().clone(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "detail": [{ "loc": ["body"], "msg": "bad json", "type": "json_invalid" }]
            })
        );
    }
}
