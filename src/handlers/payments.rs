use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::app::state::AppState;
use crate::models::payment::PaymentRequest;

const CREATE_PAYMENT_ERROR: &str = "Erro ao criar pagamento";

pub async fn create_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request: PaymentRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            error!("Invalid payment request: {}", e);
            return Err(failure());
        }
    };

    info!("Received payment request: paymentMethod={:?}", request.payment_method);

    match state.payment_service.create_payment(request).await {
        Ok(provider_body) => Ok(Json(provider_body)),
        Err(e) => {
            error!("Failed to create payment: {:?}", e);
            Err(failure())
        }
    }
}

fn failure() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": CREATE_PAYMENT_ERROR })),
    )
}
