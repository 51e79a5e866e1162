//! Job posting rules: lifecycle status, employment type, closure reasons and
//! create-time defaults.

use crate::error::CoreError;

define_text_enum! {
    /// Job lifecycle status. Any status may move to any other.
    #[derive(Default)]
    JobStatus ("job status") {
        #[default]
        Draft = "draft",
        Published = "published",
        Paused = "paused",
        Closed = "closed",
        Archived = "archived",
    }
}

define_text_enum! {
    /// Employment type of a posting.
    #[derive(Default)]
    JobType ("job type") {
        #[default]
        FullTime = "full-time",
        PartTime = "part-time",
        Contract = "contract",
        Internship = "internship",
    }
}

define_text_enum! {
    /// Why a job was closed.
    ClosureReason ("closure reason") {
        Filled = "filled",
        Cancelled = "cancelled",
        Budget = "budget",
        Deadline = "deadline",
        Other = "other",
    }
}

pub const DEFAULT_COLOR: &str = "#3B82F6";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const MAX_TITLE_LEN: usize = 200;

/// Number of description characters copied into a default meta description.
pub const META_DESCRIPTION_LEN: usize = 160;

/// Query value meaning "do not filter by status".
pub const STATUS_FILTER_ALL: &str = "all";

/// Validate a job title (non-blank, at most [`MAX_TITLE_LEN`] characters).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a display color in `#RGB` or `#RRGGBB` form.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| CoreError::Validation(format!("Invalid color '{color}'")))?;
    if !(hex.len() == 3 || hex.len() == 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!("Invalid color '{color}'")));
    }
    Ok(())
}

/// Default SEO description: the first [`META_DESCRIPTION_LEN`] characters of
/// the description, or `None` if the description is blank.
pub fn default_meta_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(META_DESCRIPTION_LEN).collect())
}

/// Parse the `status` list filter. `None` and `"all"` both mean unfiltered.
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<JobStatus>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") | Some(STATUS_FILTER_ALL) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_status_is_validation_error() {
        assert_matches!(
            "open".parse::<JobStatus>(),
            Err(CoreError::Validation(msg)) if msg.contains("draft, published")
        );
    }

    #[test]
    fn job_type_uses_hyphenated_wire_names() {
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            "\"full-time\""
        );
        assert_eq!(
            serde_json::from_str::<JobType>("\"part-time\"").unwrap(),
            JobType::PartTime
        );
    }

    #[test]
    fn status_filter_all_and_missing_are_unfiltered() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("paused")).unwrap(),
            Some(JobStatus::Paused)
        );
        assert!(parse_status_filter(Some("bogus")).is_err());
    }

    #[test]
    fn title_validation() {
        assert!(validate_title("QA Engineer").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"t".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn color_validation() {
        assert!(validate_color("#10B981").is_ok());
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("10B981").is_err());
        assert!(validate_color("#12345").is_err());
        assert!(validate_color("#GGGGGG").is_err());
    }

    #[test]
    fn meta_description_is_truncated_by_characters() {
        let description = "é".repeat(200);
        let meta = default_meta_description(&description).unwrap();
        assert_eq!(meta.chars().count(), META_DESCRIPTION_LEN);
        assert_eq!(default_meta_description("   "), None);
    }
}
