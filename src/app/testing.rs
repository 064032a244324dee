use crate::app::config::Config;
use crate::app::state::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;

/// State wired to real adapters pointed at the given base URLs.
pub fn state_for(asaas_url: &str, brevo_url: &str) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "ASAAS_API_URL" => Some(asaas_url.to_string()),
        "ASAAS_API_KEY" => Some("asaas-test-key".to_string()),
        "BREVO_API_URL" => Some(brevo_url.to_string()),
        "BREVO_API_KEY" => Some("brevo-test-key".to_string()),
        "BREVO_SENDER" => Some("contato@clube520.com".to_string()),
        _ => None,
    });
    AppState::from_config(&config).unwrap()
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
