use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::catalog::JobCatalog;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    jobs_loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Verifies the job catalog is populated. Use for load balancers and
/// uptime monitors.
#[get("/health")]
async fn health_check(catalog: web::Data<Arc<JobCatalog>>) -> impl Responder {
    if catalog.is_empty() {
        error!("Health check failed: job catalog is empty");
        return HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: "unhealthy".to_string(),
            jobs_loaded: 0,
            error: Some("Job catalog is empty".to_string()),
        });
    }

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        jobs_loaded: catalog.len(),
        error: None,
    })
}

/// Liveness check endpoint
///
/// Simple check that the process is alive. Does not inspect the catalog.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        jobs_loaded: 0,
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config.service(health_check).service(liveness_check);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn health_reports_catalog_size() {
        let catalog = Arc::new(JobCatalog::load(None).unwrap());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(catalog))
                .configure(health_config),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["jobs_loaded"], json!(50));
    }

    #[actix_web::test]
    async fn empty_catalog_is_unhealthy() {
        let catalog = Arc::new(JobCatalog::from_postings(Vec::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(catalog))
                .configure(health_config),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
