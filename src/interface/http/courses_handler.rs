use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    application::dto::{CourseRequest, HealthResponse},
    domain::course::Course,
    interface::http::{
        extract::ValidatedJson,
        problem::{ApiProblem, ApiResult},
    },
    state::AppState,
};

pub const COURSES_COLLECTION_PATH: &str = "/courses/";

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    let courses = state
        .course_service
        .list_courses()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(courses))
}

pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CourseRequest>,
) -> ApiResult<Json<Course>> {
    let created = state
        .course_service
        .create_course(request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(created))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let course = state
        .course_service
        .get_course(&id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(course))
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CourseRequest>,
) -> ApiResult<Json<Course>> {
    let updated = state
        .course_service
        .update_course(&id, request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(updated))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let deleted = state
        .course_service
        .delete_course(&id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(deleted))
}

/// `/courses` without the trailing slash; 307 keeps the method and body.
pub async fn redirect_to_collection() -> Redirect {
    Redirect::temporary(COURSES_COLLECTION_PATH)
}

pub async fn route_not_found() -> ApiProblem {
    ApiProblem::route_not_found()
}

pub async fn method_not_allowed() -> ApiProblem {
    ApiProblem::method_not_allowed()
}
