use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        teachers::{create_teacher, create_teachers, delete_teacher, get_teacher, update_teacher},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for the teacher endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let teacher_routes = Router::new()
        .route("/teacher", post(create_teacher).put(update_teacher))
        .route("/teacher/{id}", get(get_teacher).delete(delete_teacher))
        .route("/teachers", post(create_teachers))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(teacher_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
