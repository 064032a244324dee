use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment instrument forwarded to ASAAS. Anything other than the three known
/// codes is kept as the raw JSON value, ASAAS decides whether it is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum BillingType {
    Pix,
    Boleto,
    CreditCard,
    Other(Value),
}

impl From<Value> for BillingType {
    fn from(raw: Value) -> Self {
        match raw.as_str() {
            Some("PIX") => BillingType::Pix,
            Some("BOLETO") => BillingType::Boleto,
            Some("CREDIT_CARD") => BillingType::CreditCard,
            _ => BillingType::Other(raw),
        }
    }
}

impl From<BillingType> for Value {
    fn from(billing_type: BillingType) -> Self {
        match billing_type {
            BillingType::Pix => Value::from("PIX"),
            BillingType::Boleto => Value::from("BOLETO"),
            BillingType::CreditCard => Value::from("CREDIT_CARD"),
            BillingType::Other(raw) => raw,
        }
    }
}

// Payload recebido do cliente em /create-payment. Nenhum campo é validado aqui.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub cpf_cnpj: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub payment_method: Option<BillingType>,
}

// Payload enviado para POST {ASAAS_API_URL}/payments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasPaymentPayload {
    /// Always `null`: no customer registry is kept on this side.
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(with = "due_date_format")]
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<Value>,
}

impl AsaasPaymentPayload {
    pub fn from_request(request: PaymentRequest, due_date: NaiveDate) -> Self {
        Self {
            customer: None,
            billing_type: request.payment_method,
            value: request.value,
            description: request.description,
            due_date,
            customer_email: request.email,
            customer_name: request.name,
            cpf_cnpj: request.cpf_cnpj,
        }
    }
}

mod due_date_format {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }
}
