use axum::middleware::from_fn;
use axum::{routing::get, Router};

use super::handlers::applications;
use super::handlers::probes::{health, health_db};
use super::middlewares::authn;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/applications",
            get(applications::list).post(applications::create),
        )
        .route(
            "/applications/{id}",
            get(applications::get)
                .patch(applications::update)
                .delete(applications::delete),
        )
        .layer(from_fn(authn::identify))
        .route("/health", get(health))
        .route("/health/db", get(health_db))
        .with_state(state)
}
