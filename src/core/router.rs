//! 路由组装

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::middleware::request_logging_middleware;
use crate::app::birds::{self, handler, repository::BirdRepository};

/// 组装全部路由与中间件
pub fn build_router<R: BirdRepository>(state: handler::AppState<R>, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handler::health_check::<R>))
        .merge(birds::routes::<R>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
