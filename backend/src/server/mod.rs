//! Router assembly.

use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use common::search_const::{HEALTH_PATH, SEARCH_PATH};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{api, config::ServerConfig};

const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route(HEALTH_PATH, get(api::health::health))
        .route(SEARCH_PATH, post(api::search::search))
        .layer(cors_layer(&config.cors_origins))
        .layer(middleware::from_fn(log_request))
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(_) if origin.trim() == "*" => {
                tracing::warn!("ignoring wildcard CORS origin");
                None
            }
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH, HeaderName::from_static("x-requested-with")])
        .max_age(CORS_MAX_AGE)
        .allow_credentials(true)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!("{} {} -> {}", method, path, response.status());
    response
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
