use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse { http: true, email };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticHealth(HealthStatus);

    impl HealthService for StaticHealth {
        async fn get_status(&self) -> HealthStatus {
            self.0
        }
    }

    #[tokio::test]
    async fn healthy() {
        let service = Arc::new(StaticHealth(HealthStatus { email: true }));
        let response = health(State(service)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unhealthy() {
        let service = Arc::new(StaticHealth(HealthStatus { email: false }));
        let response = health(State(service)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
