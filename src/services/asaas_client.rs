use crate::app::config::Config;
use crate::models::payment::AsaasPaymentPayload;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment provider unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("payment provider rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("payment provider returned malformed body: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates one charge and returns the provider's body untouched.
    async fn create_payment(&self, payload: &AsaasPaymentPayload) -> Result<Value, GatewayError>;
}

pub struct AsaasClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AsaasClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.asaas_api_url.clone(),
            api_key: config.asaas_api_key.clone(),
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for AsaasClient {
    async fn create_payment(&self, payload: &AsaasPaymentPayload) -> Result<Value, GatewayError> {
        let url = format!("{}/payments", self.base_url);
        debug!("POST {} billingType={:?}", url, payload.billing_type);

        let response = self
            .client
            .post(&url)
            .header("access_token", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(GatewayError::InvalidResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AsaasClient {
        let config = Config::from_lookup(|key| match key {
            "ASAAS_API_URL" => Some(server.uri()),
            "ASAAS_API_KEY" => Some("test-key".to_string()),
            _ => None,
        });
        AsaasClient::new(Client::new(), &config)
    }

    fn payload() -> AsaasPaymentPayload {
        let request = serde_json::from_value(json!({
            "name": "Bob",
            "paymentMethod": "BOLETO",
            "value": 10
        }))
        .unwrap();
        AsaasPaymentPayload::from_request(request, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[tokio::test]
    async fn test_sends_api_key_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .and(header("access_token", "test-key"))
            .and(body_partial_json(json!({
                "billingType": "BOLETO",
                "dueDate": "2026-10-18",
                "customer": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "pay_9", "status": "PENDING" })))
            .expect(1)
            .mount(&server)
            .await;

        let body = tokio_test::assert_ok!(client_for(&server).create_payment(&payload()).await);
        assert_eq!(body, json!({ "id": "pay_9", "status": "PENDING" }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid cpfCnpj"))
            .mount(&server)
            .await;

        let err = tokio_test::assert_err!(client_for(&server).create_payment(&payload()).await);
        match err {
            GatewayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid cpfCnpj");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = tokio_test::assert_err!(client_for(&server).create_payment(&payload()).await);
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let config = Config::from_lookup(|key| match key {
            "ASAAS_API_URL" => Some("http://127.0.0.1:1".to_string()),
            _ => None,
        });
        let client = AsaasClient::new(Client::new(), &config);

        let err = tokio_test::assert_err!(client.create_payment(&payload()).await);
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
