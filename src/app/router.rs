use crate::app::state::AppState;
use crate::handlers::{health, payments, webhooks};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness))
        .route("/create-payment", post(payments::create_payment))
        .route("/asaas-webhook", post(webhooks::asaas_webhook))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
