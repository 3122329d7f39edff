use crate::catalog::JobPosting;

/// Maximum number of matches returned to the caller. `total_matched`
/// reports the count before this cutoff is applied.
pub const MAX_RESULTS: usize = 20;

/// Lowercase + trim, applied to both sides before any skill comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Per-posting match computed against a candidate's skill set.
///
/// `matched_skills` and `missing_skills` partition the posting's required
/// skills (in normalized form, preserving the posting's order).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub job: &'a JobPosting,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_count: usize,
    pub total_required: usize,
}

/// Ranked matches plus the pre-truncation count.
#[derive(Debug)]
pub struct MatchOutcome<'a> {
    pub total_matched: usize,
    pub results: Vec<MatchResult<'a>>,
}

/// Score every posting against `candidate_skills`, drop zero-score
/// postings, rank by score descending and truncate to [`MAX_RESULTS`].
///
/// A required skill counts as matched when any candidate skill contains it
/// or is contained by it. The bidirectional containment tolerates phrasing
/// differences ("React" vs "React.js") at the cost of known false
/// positives ("Java" vs "JavaScript"); callers rely on this exact behavior.
///
/// The sort is stable: equal scores keep catalog order, so identical
/// inputs always produce identical output. The caller is responsible for
/// rejecting an empty `candidate_skills` before reaching this function.
pub fn match_jobs<'a>(jobs: &'a [JobPosting], candidate_skills: &[String]) -> MatchOutcome<'a> {
    let normalized: Vec<String> = candidate_skills.iter().map(|s| normalize(s)).collect();

    let mut results: Vec<MatchResult<'a>> = jobs
        .iter()
        .map(|job| score_job(job, &normalized))
        .filter(|r| r.match_score > 0)
        .collect();

    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    let total_matched = results.len();
    results.truncate(MAX_RESULTS);

    MatchOutcome {
        total_matched,
        results,
    }
}

fn score_job<'a>(job: &'a JobPosting, candidate_skills: &[String]) -> MatchResult<'a> {
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for required in &job.required_skills {
        let js = normalize(required);
        let found = candidate_skills
            .iter()
            .any(|us| us.contains(&js) || js.contains(us));
        if found {
            matched_skills.push(js);
        } else {
            missing_skills.push(js);
        }
    }

    let match_count = matched_skills.len();
    let total_required = job.required_skills.len();
    // Floor of 1 keeps a skill-less posting at score 0 instead of dividing by zero.
    let divisor = total_required.max(1);
    let match_score = ((match_count as f64 / divisor as f64) * 100.0).round() as u32;

    MatchResult {
        job,
        match_score,
        matched_skills,
        missing_skills,
        match_count,
        total_required,
    }
}
