use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_animal::create_animal;
use super::handlers::like_animal::like_animal;
use super::handlers::list_animals::list_animals;
use super::handlers::list_liked::list_liked;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::refresh::refresh;
use super::handlers::signup::signup;
use super::handlers::unlike_animal::unlike_animal;
use super::middleware::authenticate as auth_middleware;
use crate::domain::animal::ports::AnimalServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub animal_service: Arc<dyn AnimalServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    animal_service: Arc<dyn AnimalServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        animal_service,
    };

    // /auth/refresh does its own bearer handling with refresh purpose, so it
    // stays off the access-token middleware
    let public_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/refresh", get(refresh));

    let protected_routes = Router::new()
        .route("/me", get(me))
        .route("/animals", post(create_animal))
        .route("/animals", get(list_animals))
        .route("/save/liked", post(like_animal))
        .route("/save/liked", get(list_liked))
        .route("/save/liked/:animal_id", delete(unlike_animal))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
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
