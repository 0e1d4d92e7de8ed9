use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        users::{read_user, upsert_user},
    },
    state::AppState,
};

/// Parses a comma separated origin list. `*` anywhere allows any origin.
fn allow_origin(cors_origin: &str) -> AllowOrigin {
    let origins: Vec<&str> = cors_origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if origins.contains(&"*") {
        return AllowOrigin::any();
    }

    let values = origins.into_iter().filter_map(|origin| {
        HeaderValue::from_str(origin)
            .inspect_err(|err| tracing::warn!(%origin, error = %err, "Ignoring invalid CORS origin"))
            .ok()
    });

    AllowOrigin::list(values)
}

/// Create the application router with all routes and middleware.
///
/// `cors_origin` is the raw `CORS_ORIGIN` setting.
pub fn create_app(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(cors_origin))
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/hello/{username}", get(read_user).put(upsert_user))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
