use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASAAS_API_URL: &str = "https://www.asaas.com/api/v3";
const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com/v3";
const DEFAULT_SENDER_NAME: &str = "Clube 520";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub asaas_api_key: String,
    pub asaas_api_url: String,
    pub brevo_api_key: String,
    pub brevo_api_url: String,
    pub brevo_sender: String,
    pub brevo_sender_name: String,
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests never touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            asaas_api_key: lookup("ASAAS_API_KEY").unwrap_or_default(),
            asaas_api_url: trim_base_url(
                lookup("ASAAS_API_URL").unwrap_or_else(|| DEFAULT_ASAAS_API_URL.to_string()),
            ),
            brevo_api_key: lookup("BREVO_API_KEY").unwrap_or_default(),
            brevo_api_url: trim_base_url(
                lookup("BREVO_API_URL").unwrap_or_else(|| DEFAULT_BREVO_API_URL.to_string()),
            ),
            brevo_sender: lookup("BREVO_SENDER").unwrap_or_default(),
            brevo_sender_name: lookup("BREVO_SENDER_NAME")
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
            http_timeout: lookup("HTTP_TIMEOUT_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis),
        }
    }

    /// Names of credentials that are empty. The relay still starts without
    /// them, every outbound call will just be rejected upstream.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.asaas_api_key.is_empty() {
            missing.push("ASAAS_API_KEY");
        }
        if self.brevo_api_key.is_empty() {
            missing.push("BREVO_API_KEY");
        }
        if self.brevo_sender.is_empty() {
            missing.push("BREVO_SENDER");
        }
        missing
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
