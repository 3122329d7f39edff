use crate::catalog::JobPosting;
use crate::matcher::normalize;

/// Narrow `jobs` by optional role and location substring predicates.
///
/// The role query matches against title, company, or any required skill;
/// the location query matches against location only. Both are
/// case-insensitive substring checks combined with AND. An empty query
/// passes everything, as does a location equal to `location_wildcard`
/// (the "any location" sentinel, `"india"` in the shipped config).
///
/// Catalog order is preserved; an empty result is a valid outcome.
pub fn filter_jobs<'a>(
    jobs: &'a [JobPosting],
    role: Option<&str>,
    location: Option<&str>,
    location_wildcard: &str,
) -> Vec<&'a JobPosting> {
    let role = role.map(normalize).filter(|q| !q.is_empty());
    let location = location
        .map(normalize)
        .filter(|q| !q.is_empty() && q.as_str() != location_wildcard);

    jobs.iter()
        .filter(|job| match &role {
            Some(q) => {
                job.title.to_lowercase().contains(q)
                    || job.company.to_lowercase().contains(q)
                    || job
                        .required_skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(q))
            }
            None => true,
        })
        .filter(|job| match &location {
            Some(q) => job.location.to_lowercase().contains(q),
            None => true,
        })
        .collect()
}
