use actix_web::{
    HttpResponse, Responder, get, post,
    web::{self, Data, Query, ServiceConfig, scope},
};
use actix_web_validator::Json;

use super::dto::{ListQuery, MatchJobsRequest, SearchRequest};
use super::service::{JobService, ServiceError};

/// GET /api/jobs?role=&location=
#[get("/jobs")]
async fn list_jobs(service: Data<JobService>, query: Query<ListQuery>) -> impl Responder {
    let response = service.list_jobs(query.role.as_deref(), query.location.as_deref());
    HttpResponse::Ok().json(response)
}

/// POST /api/jobs/search
#[post("/jobs/search")]
async fn search_jobs(service: Data<JobService>, body: Json<SearchRequest>) -> impl Responder {
    HttpResponse::Ok().json(service.search_jobs(&body))
}

/// POST /api/match-jobs
///
/// The catalog scan runs on the blocking pool so a large catalog cannot
/// stall the async workers; any failure there maps to the generic 500
/// body, mirroring the boundary's catch-all.
#[post("/match-jobs")]
async fn match_jobs(
    service: Data<JobService>,
    body: Json<MatchJobsRequest>,
) -> Result<HttpResponse, ServiceError> {
    let svc = service.get_ref().clone();
    let skills = body.into_inner().skills;

    let response = web::block(move || svc.match_jobs(&skills))
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(response))
}

pub fn jobs_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api")
            .service(list_jobs)
            .service(search_jobs)
            .service(match_jobs),
    );
}
