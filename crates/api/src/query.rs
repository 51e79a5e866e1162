//! Query parameter types for list endpoints.

use serde::Deserialize;

/// Query parameters for `GET /api/jobs`.
///
/// `status` stays a raw string so `all` and unknown values can be told apart
/// in the handler rather than as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct JobListParams {
    pub status: Option<String>,
    #[serde(rename = "includeArchived", alias = "include_archived", default)]
    pub include_archived: bool,
}

/// Query parameters for `GET /api/applications`.
///
/// All filters are raw strings; an empty value means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    #[serde(rename = "jobId", alias = "job_id")]
    pub job_id: Option<String>,
    pub stage: Option<String>,
    pub status: Option<String>,
}

/// Trimmed filter value, or `None` when absent or blank.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
