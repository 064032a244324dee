use crate::models::email::PaymentReceivedEmail;
use crate::models::webhook::WebhookEvent;
use crate::services::brevo_client::{EmailNotifier, NotifyError};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What happened while handling one webhook. The HTTP acknowledgment never
/// depends on it.
#[derive(Debug)]
pub enum WebhookOutcome {
    Ignored,
    Notified,
    NotificationFailed(NotifyError),
}

pub struct WebhookService {
    notifier: Arc<dyn EmailNotifier>,
}

impl WebhookService {
    pub fn new(notifier: Arc<dyn EmailNotifier>) -> Self {
        Self { notifier }
    }

    pub async fn handle(&self, event: &WebhookEvent) -> WebhookOutcome {
        if !event.is_payment_received() {
            debug!("Ignoring webhook event {}", event.event_name());
            return WebhookOutcome::Ignored;
        }

        let payment = event.payment.clone().unwrap_or_default();
        let Some(recipient) = payment.recipient() else {
            warn!("PAYMENT_RECEIVED without customerEmail, skipping email");
            return WebhookOutcome::NotificationFailed(NotifyError::MissingRecipient);
        };

        let email = PaymentReceivedEmail {
            name: payment.customer_name_or_default(),
            email: recipient,
            value: payment.value_display(),
        };

        match self.notifier.send_payment_received(&email).await {
            Ok(()) => WebhookOutcome::Notified,
            Err(e) => {
                error!("Erro ao enviar e-mail Brevo: {}", e);
                WebhookOutcome::NotificationFailed(e)
            }
        }
    }
}
