use crate::app::config::Config;
use crate::services::http_client::build_client;
use crate::services::{AsaasClient, BrevoClient, PaymentService, WebhookService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: Arc<PaymentService>,
    pub webhook_service: Arc<WebhookService>,
}

impl AppState {
    pub fn new(payment_service: PaymentService, webhook_service: WebhookService) -> Self {
        Self {
            payment_service: Arc::new(payment_service),
            webhook_service: Arc::new(webhook_service),
        }
    }

    /// Wires the ASAAS and Brevo adapters over one shared HTTP client.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = build_client(config.http_timeout)?;

        let gateway = Arc::new(AsaasClient::new(client.clone(), config));
        let notifier = Arc::new(BrevoClient::new(client, config));

        Ok(Self::new(
            PaymentService::new(gateway),
            WebhookService::new(notifier),
        ))
    }
}
