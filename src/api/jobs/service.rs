use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::dto::{JobListResponse, JobPayload, MatchResponse, MatchedJobPayload, SearchRequest};
use crate::api::validation::ErrorResponse;
use crate::catalog::JobCatalog;
use crate::{filter, matcher};

/// Service-level errors
#[derive(Debug)]
pub enum ServiceError {
    /// Candidate skills missing or empty
    MissingSkills,

    /// Unexpected failure during matching
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::MissingSkills => write!(f, "skills array is required"),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::MissingSkills => {
                warn!("Match request rejected: no skills supplied");
                HttpResponse::BadRequest().json(ErrorResponse::new("skills array is required"))
            }
            ServiceError::Internal(msg) => {
                // Detail stays in the logs; the client gets a generic message.
                error!("Job matching failed: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse::new("Job matching failed"))
            }
        }
    }
}

/// Job service containing the listing, search and matching logic over the
/// shared read-only catalog.
#[derive(Clone)]
pub struct JobService {
    catalog: Arc<JobCatalog>,
    location_wildcard: String,
}

impl JobService {
    pub fn new(catalog: Arc<JobCatalog>, location_wildcard: impl Into<String>) -> Self {
        Self {
            catalog,
            location_wildcard: location_wildcard.into(),
        }
    }

    /// Filtered catalog listing for GET /api/jobs.
    pub fn list_jobs(&self, role: Option<&str>, location: Option<&str>) -> JobListResponse {
        let results = filter::filter_jobs(
            self.catalog.all(),
            role,
            location,
            &self.location_wildcard,
        );
        info!(
            "Service: Listing jobs (role={:?}, location={:?}) -> {} results",
            role,
            location,
            results.len()
        );

        let jobs: Vec<JobPayload> = results.into_iter().map(JobPayload::from).collect();
        JobListResponse {
            success: true,
            count: jobs.len(),
            jobs,
        }
    }

    /// Keyword search for POST /api/jobs/search. Same predicates as the
    /// listing, fed from the request body instead of the query string.
    pub fn search_jobs(&self, request: &SearchRequest) -> JobListResponse {
        self.list_jobs(request.role_query(), request.location.as_deref())
    }

    /// Rank the catalog against the candidate's skills.
    ///
    /// Rejects an empty skill set before any scoring so callers never see
    /// an all-zero ranking in place of an error.
    pub fn match_jobs(&self, candidate_skills: &[String]) -> Result<MatchResponse, ServiceError> {
        if candidate_skills.is_empty() {
            return Err(ServiceError::MissingSkills);
        }

        let outcome = matcher::match_jobs(self.catalog.all(), candidate_skills);
        info!(
            "Service: Matched {} jobs for {} candidate skills (returning {})",
            outcome.total_matched,
            candidate_skills.len(),
            outcome.results.len()
        );

        Ok(MatchResponse {
            success: true,
            total_matched: outcome.total_matched,
            user_skills: candidate_skills.to_vec(),
            jobs: outcome.results.iter().map(MatchedJobPayload::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JobPosting;

    fn service() -> JobService {
        let jobs = vec![
            JobPosting {
                id: 1,
                title: "Frontend Developer".to_string(),
                company: "TechMahindra".to_string(),
                location: "Pune".to_string(),
                required_skills: vec!["React".to_string(), "CSS".to_string()],
                required_experience: 1,
                salary_min: 4,
                salary_max: 8,
            },
            JobPosting {
                id: 2,
                title: "Data Analyst".to_string(),
                company: "Mu Sigma".to_string(),
                location: "Bangalore".to_string(),
                required_skills: vec!["SQL".to_string(), "Python".to_string()],
                required_experience: 1,
                salary_min: 4,
                salary_max: 9,
            },
        ];
        JobService::new(Arc::new(JobCatalog::from_postings(jobs)), "india")
    }

    #[test]
    fn empty_skills_is_a_client_error() {
        let err = service().match_jobs(&[]).unwrap_err();
        assert!(matches!(err, ServiceError::MissingSkills));
    }

    #[test]
    fn match_response_echoes_raw_user_skills() {
        let response = service().match_jobs(&["  SQL ".to_string()]).unwrap();
        assert!(response.success);
        assert_eq!(response.user_skills, vec!["  SQL "]);
        assert_eq!(response.total_matched, 1);
        assert_eq!(response.jobs[0].id, 2);
        assert_eq!(response.jobs[0].match_score, 50);
    }

    #[test]
    fn listing_honors_the_wildcard_sentinel() {
        let svc = service();
        let all = svc.list_jobs(None, Some("india"));
        assert_eq!(all.count, 2);

        let pune = svc.list_jobs(None, Some("pune"));
        assert_eq!(pune.count, 1);
        assert_eq!(pune.jobs[0].id, 1);
    }

    #[test]
    fn empty_filter_result_still_succeeds() {
        let response = service().list_jobs(Some("cobol"), None);
        assert!(response.success);
        assert_eq!(response.count, 0);
        assert!(response.jobs.is_empty());
    }
}
