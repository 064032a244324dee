use reqwest::Client;
use std::time::Duration;

/// Single outbound client shared by the ASAAS and Brevo adapters.
/// No request timeout unless one is configured.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(20) // Mantém conexões vivas
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
