use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Jobs shipped with the binary. Used unless JOBS_DATA_PATH points elsewhere.
const EMBEDDED_JOBS: &str = include_str!("../data/jobs.json");

/// A single job posting. Loaded once at startup, never mutated afterwards.
///
/// Salary bounds are in LPA (lakhs per annum) and satisfy
/// `salary_min <= salary_max`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub required_experience: u32,
    pub salary_min: u32,
    pub salary_max: u32,
}

impl JobPosting {
    pub fn is_remote(&self) -> bool {
        self.location.eq_ignore_ascii_case("remote")
    }

    /// Decorative score for the listing page, derived purely from the id
    /// (range 65-97). Not a measure of fit; the content-derived match score
    /// lives in the matcher.
    pub fn opportunity_score(&self) -> u32 {
        (self.id * 37 + 11) % 33 + 65
    }
}

/// Read-only collection of job postings shared across request handlers.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
}

impl JobCatalog {
    /// Load the catalog: from `path` when an override is configured,
    /// otherwise from the embedded dataset.
    ///
    /// Called once at process start; failures here abort startup rather
    /// than surfacing at request time.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let raw = match path {
            Some(p) => std::fs::read_to_string(p)
                .map_err(|e| format!("Failed to read jobs data from {}: {}", p.display(), e))?,
            None => EMBEDDED_JOBS.to_string(),
        };

        let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse jobs data: {}", e))?;

        for job in &jobs {
            if job.salary_min > job.salary_max {
                return Err(format!(
                    "Job {} has salary_min > salary_max ({} > {})",
                    job.id, job.salary_min, job.salary_max
                ));
            }
        }

        info!("Loaded job catalog with {} postings", jobs.len());
        Ok(JobCatalog { jobs })
    }

    pub fn from_postings(jobs: Vec<JobPosting>) -> Self {
        JobCatalog { jobs }
    }

    pub fn all(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
