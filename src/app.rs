use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    application::course_service::CourseService,
    infrastructure::in_memory_course_repository::InMemoryCourseRepository,
    interface::http::courses_handler::{
        create_course, delete_course, get_course, healthcheck, list_courses,
        method_not_allowed, redirect_to_collection, route_not_found, update_course,
    },
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

const COURSE_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

pub fn build_router(state: AppState) -> Router {
    with_http_layers(course_routes()).with_state(state)
}

/// State wired to a fresh, empty in-memory registry.
pub fn in_memory_state() -> AppState {
    let repository = Arc::new(InMemoryCourseRepository::new());
    AppState::new(Arc::new(CourseService::new(repository)))
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/courses/", get(list_courses).post(create_course))
        .route(
            "/courses",
            get(redirect_to_collection).post(redirect_to_collection),
        )
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

fn with_http_layers(routes: Router<AppState>) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(COURSE_METHODS);

    routes
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
}
