use crate::application::dto::{NavigationRequest, NavigationResponse};
use crate::ports::inbound::SharedNavigator;
use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Path serving the rendered view for the breadcrumb in the query string
pub const VIEW_PATH: &str = "/";
/// Liveness probe path
pub const HEALTH_PATH: &str = "/healthz";

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Builds the navigator's router
///
/// Every view request is independent: the breadcrumb travels in the
/// repeated `n` query parameters and no session state is kept.
pub fn router(navigator: SharedNavigator) -> Router {
    Router::new()
        .route(VIEW_PATH, get(view))
        .route(HEALTH_PATH, get(health))
        .with_state(navigator)
        .layer(TraceLayer::new_for_http())
}

async fn view(State(navigator): State<SharedNavigator>, RawQuery(query): RawQuery) -> Response {
    let request = NavigationRequest::from_query(query.as_deref());

    match navigator.navigate(request).await {
        NavigationResponse::Rendered {
            content_type, body, ..
        } => (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response(),
        NavigationResponse::RenderFailed { message, .. } => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, PLAIN_TEXT)],
            format!("error: {}", message),
        )
            .into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}
