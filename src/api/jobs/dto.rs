use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::JobPosting;
use crate::matcher::MatchResult;

/// Body of POST /api/match-jobs.
///
/// `skills` defaults to empty when the field is absent so that a missing
/// array fails validation with the same message as an empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct MatchJobsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "skills array is required"))]
    pub skills: Vec<String>,
}

/// Body of POST /api/jobs/search. `keywords` wins over the legacy `query`
/// alias when both are present.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    pub keywords: Option<String>,
    pub query: Option<String>,
    pub location: Option<String>,
}

impl SearchRequest {
    pub fn role_query(&self) -> Option<&str> {
        self.keywords
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.query.as_deref())
    }
}

/// Query string of GET /api/jobs.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub role: Option<String>,
    pub location: Option<String>,
}

/// A posting formatted for listing/search responses.
#[derive(Debug, Serialize)]
pub struct JobPayload {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "jobType")]
    pub job_type: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "applyLink")]
    pub apply_link: String,
    pub url: String,
    pub snippet: String,
    pub skills: Vec<String>,
    pub experience: u32,
    pub salary_min: u32,
    pub salary_max: u32,
    pub badges: Vec<String>,
    #[serde(rename = "opportunityScore")]
    pub opportunity_score: u32,
}

impl From<&JobPosting> for JobPayload {
    fn from(job: &JobPosting) -> Self {
        let job_type = if job.is_remote() { "Remote" } else { "Full-time" };
        let badges = if job.is_remote() {
            vec!["Remote".to_string()]
        } else if job.required_experience == 0 {
            vec!["Fresher".to_string()]
        } else {
            Vec::new()
        };

        JobPayload {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: format_salary(job),
            job_type: job_type.to_string(),
            kind: job_type.to_string(),
            apply_link: "#".to_string(),
            url: "#".to_string(),
            snippet: format_snippet(job),
            skills: job.required_skills.clone(),
            experience: job.required_experience,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            badges,
            opportunity_score: job.opportunity_score(),
        }
    }
}

/// A posting plus its match breakdown, for the matching response.
#[derive(Debug, Serialize)]
pub struct MatchedJobPayload {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "jobType")]
    pub job_type: String,
    pub url: String,
    pub snippet: String,
    pub required_skills: Vec<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
    #[serde(rename = "totalRequired")]
    pub total_required: usize,
}

impl From<&MatchResult<'_>> for MatchedJobPayload {
    fn from(result: &MatchResult<'_>) -> Self {
        let job = result.job;
        let job_type = if job.is_remote() { "Remote" } else { "Full-time" };

        MatchedJobPayload {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: format_salary(job),
            job_type: job_type.to_string(),
            url: "#".to_string(),
            snippet: format_snippet(job),
            required_skills: job.required_skills.clone(),
            match_score: result.match_score,
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            match_count: result.match_count,
            total_required: result.total_required,
        }
    }
}

/// Response for GET /api/jobs and POST /api/jobs/search.
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub success: bool,
    pub count: usize,
    pub jobs: Vec<JobPayload>,
}

/// Response for POST /api/match-jobs.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub success: bool,
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
    #[serde(rename = "userSkills")]
    pub user_skills: Vec<String>,
    pub jobs: Vec<MatchedJobPayload>,
}

fn format_salary(job: &JobPosting) -> String {
    format!("₹{}-{} LPA", job.salary_min, job.salary_max)
}

fn format_snippet(job: &JobPosting) -> String {
    format!(
        "{} at {}. Required skills: {}. Experience: {}+ years.",
        job.title,
        job.company,
        job.required_skills.join(", "),
        job.required_experience
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(location: &str, experience: u32) -> JobPosting {
        JobPosting {
            id: 3,
            title: "Full Stack Developer".to_string(),
            company: "Wipro".to_string(),
            location: location.to_string(),
            required_skills: vec!["React".to_string(), "Node.js".to_string()],
            required_experience: experience,
            salary_min: 6,
            salary_max: 12,
        }
    }

    #[test]
    fn onsite_job_formats_as_full_time() {
        let payload = JobPayload::from(&posting("Hyderabad", 2));
        assert_eq!(payload.salary, "₹6-12 LPA");
        assert_eq!(payload.job_type, "Full-time");
        assert_eq!(payload.kind, "Full-time");
        assert!(payload.badges.is_empty());
        assert_eq!(
            payload.snippet,
            "Full Stack Developer at Wipro. Required skills: React, Node.js. Experience: 2+ years."
        );
    }

    #[test]
    fn remote_job_gets_remote_badge() {
        let payload = JobPayload::from(&posting("Remote", 2));
        assert_eq!(payload.job_type, "Remote");
        assert_eq!(payload.badges, vec!["Remote"]);
    }

    #[test]
    fn zero_experience_onsite_job_gets_fresher_badge() {
        let payload = JobPayload::from(&posting("Chennai", 0));
        assert_eq!(payload.badges, vec!["Fresher"]);
    }

    #[test]
    fn keywords_take_precedence_over_query_alias() {
        let req = SearchRequest {
            keywords: Some("react".to_string()),
            query: Some("python".to_string()),
            location: None,
        };
        assert_eq!(req.role_query(), Some("react"));

        let req = SearchRequest {
            keywords: Some("  ".to_string()),
            query: Some("python".to_string()),
            location: None,
        };
        assert_eq!(req.role_query(), Some("python"));
    }
}
