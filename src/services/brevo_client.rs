use crate::app::config::Config;
use crate::models::email::{BrevoContact, BrevoEmailPayload, PaymentReceivedEmail};
use reqwest::Client;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no recipient address in payment")]
    MissingRecipient,
    #[error("email provider unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("email provider rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait::async_trait]
pub trait EmailNotifier: Send + Sync {
    async fn send_payment_received(&self, email: &PaymentReceivedEmail) -> Result<(), NotifyError>;
}

pub struct BrevoClient {
    client: Client,
    endpoint: String,
    api_key: String,
    sender: BrevoContact,
}

impl BrevoClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: format!("{}/smtp/email", config.brevo_api_url),
            api_key: config.brevo_api_key.clone(),
            sender: BrevoContact {
                email: config.brevo_sender.clone(),
                name: Some(config.brevo_sender_name.clone()),
            },
        }
    }
}

#[async_trait::async_trait]
impl EmailNotifier for BrevoClient {
    async fn send_payment_received(&self, email: &PaymentReceivedEmail) -> Result<(), NotifyError> {
        let payload = BrevoEmailPayload::payment_received(self.sender.clone(), email);

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(NotifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Payment received email sent to {}", email.email);
        Ok(())
    }
}
