use serde::Serialize;

pub const PAYMENT_RECEIVED_SUBJECT: &str = "Pagamento Recebido 💚";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceivedEmail {
    pub name: String,
    pub email: String,
    pub value: String,
}

impl PaymentReceivedEmail {
    /// Name and value are interpolated as-is, without escaping or currency
    /// formatting.
    pub fn html_content(&self) -> String {
        format!(
            "<h2>Olá {}!</h2>\n<p>Recebemos seu pagamento de <strong>R$ {}</strong> com sucesso!</p>\n<p>Obrigado por fazer parte do Clube 520 🌿</p>",
            self.name, self.value
        )
    }
}

// Payload para POST {BREVO_API_URL}/smtp/email
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrevoEmailPayload {
    pub sender: BrevoContact,
    pub to: Vec<BrevoContact>,
    pub subject: String,
    pub html_content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrevoContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BrevoEmailPayload {
    pub fn payment_received(sender: BrevoContact, email: &PaymentReceivedEmail) -> Self {
        Self {
            sender,
            to: vec![BrevoContact {
                email: email.email.clone(),
                name: None,
            }],
            subject: PAYMENT_RECEIVED_SUBJECT.to_string(),
            html_content: email.html_content(),
        }
    }
}
