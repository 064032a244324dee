pub mod asaas_client;
pub mod brevo_client;
pub mod http_client;
pub mod payment_service;
pub mod webhook_service;

pub use asaas_client::AsaasClient;
pub use brevo_client::BrevoClient;
pub use payment_service::PaymentService;
pub use webhook_service::{WebhookOutcome, WebhookService};
