use crate::models::payment::{AsaasPaymentPayload, PaymentRequest};
use crate::services::asaas_client::{GatewayError, PaymentGateway};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub enum ServiceError {
    ProviderFailed(GatewayError),
}

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Forwards the request to ASAAS with today's (UTC) date as due date.
    pub async fn create_payment(&self, request: PaymentRequest) -> Result<Value, ServiceError> {
        self.create_payment_due(request, Utc::now().date_naive()).await
    }

    async fn create_payment_due(
        &self,
        request: PaymentRequest,
        due_date: NaiveDate,
    ) -> Result<Value, ServiceError> {
        let payload = AsaasPaymentPayload::from_request(request, due_date);

        let body = self
            .gateway
            .create_payment(&payload)
            .await
            .map_err(ServiceError::ProviderFailed)?;

        let payment_id = body.get("id").and_then(|id| id.as_str()).unwrap_or("<none>");
        info!(
            "Payment created: id={} billingType={:?}",
            payment_id, payload.billing_type
        );
        Ok(body)
    }
}
