use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_emoticon::get_emoticon;
use super::handlers::health::health;
use super::handlers::issue_token::issue_token;
use super::middleware::require_bearer;
use crate::domain::identity::service::IdentityService;
use crate::outbound::store::InMemoryUserStore;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService<InMemoryUserStore>>,
}

pub fn create_router(identity: Arc<IdentityService<InMemoryUserStore>>) -> Router {
    let state = AppState { identity };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/token", post(issue_token));

    let protected_routes = Router::new()
        .route("/emoticon/:name", get(get_emoticon))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
