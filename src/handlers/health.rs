use tracing::debug;

pub const LIVENESS_MESSAGE: &str = "Servidor Pagamento-Clube rodando 🌿";

pub async fn liveness() -> &'static str {
    debug!("Liveness check");
    LIVENESS_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::LIVENESS_MESSAGE;
    use crate::app::router::build_router;
    use crate::app::testing::{read_body, state_for};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_returns_liveness_text() {
        let app = build_router(state_for("http://127.0.0.1:1", "http://127.0.0.1:1"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, LIVENESS_MESSAGE);
    }
}
