use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::app::state::AppState;
use crate::models::webhook::WebhookEvent;
use crate::services::WebhookOutcome;

/// ASAAS webhook receiver. Always answers 200 with an empty body: a failure
/// status would make ASAAS redeliver and send duplicate emails.
///
/// No signature check is done on the incoming call.
pub async fn asaas_webhook(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("Unparsable webhook body acknowledged anyway: {}", e);
            return StatusCode::OK;
        }
    };

    match state.webhook_service.handle(&event).await {
        WebhookOutcome::Notified => info!("Webhook {} handled, email sent", event.event_name()),
        WebhookOutcome::NotificationFailed(e) => {
            warn!("Webhook {} acknowledged without email: {}", event.event_name(), e)
        }
        WebhookOutcome::Ignored => {}
    }

    StatusCode::OK
}
