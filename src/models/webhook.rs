use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::money::scalar_display;

pub const PAYMENT_RECEIVED: &str = "PAYMENT_RECEIVED";

const FALLBACK_CUSTOMER_NAME: &str = "cliente";
const FALLBACK_VALUE: &str = "0";

/// Notification posted by ASAAS to /asaas-webhook. ASAAS owns the schema and
/// sends many event types with different shapes, so every field is kept as
/// raw JSON and a field of the wrong type only affects itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub event: Option<Value>,
    #[serde(default, deserialize_with = "lenient_payment")]
    pub payment: Option<WebhookPayment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayment {
    #[serde(default)]
    pub customer_name: Option<Value>,
    #[serde(default)]
    pub customer_email: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

// Um `payment` que não é objeto vira pagamento vazio, com os fallbacks.
fn lenient_payment<'de, D>(deserializer: D) -> Result<Option<WebhookPayment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => None,
        Value::Object(_) => Some(serde_json::from_value(raw).unwrap_or_default()),
        _ => Some(WebhookPayment::default()),
    })
}

impl WebhookEvent {
    pub fn is_payment_received(&self) -> bool {
        self.event.as_ref().and_then(Value::as_str) == Some(PAYMENT_RECEIVED)
    }

    pub fn event_name(&self) -> String {
        self.event
            .as_ref()
            .and_then(scalar_display)
            .unwrap_or_else(|| "<missing>".to_string())
    }
}

impl WebhookPayment {
    pub fn customer_name_or_default(&self) -> String {
        self.customer_name
            .as_ref()
            .and_then(scalar_display)
            .unwrap_or_else(|| FALLBACK_CUSTOMER_NAME.to_string())
    }

    /// Value as it should appear in the email: strings verbatim, numbers in
    /// plain form (`100.00` → `100`), anything else replaced by the fallback.
    pub fn value_display(&self) -> String {
        self.value
            .as_ref()
            .and_then(scalar_display)
            .unwrap_or_else(|| FALLBACK_VALUE.to_string())
    }

    pub fn recipient(&self) -> Option<String> {
        self.customer_email
            .as_ref()
            .and_then(scalar_display)
            .map(|email| email.trim().to_string())
    }
}
