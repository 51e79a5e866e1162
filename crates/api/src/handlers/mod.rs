pub mod applications;
pub mod jobs;
pub mod templates;

use careers_core::error::CoreError;
use careers_core::types::DbId;

use crate::error::AppError;

/// Parse a path identifier as a UUID.
///
/// A malformed identifier cannot name an existing row, so it is reported as
/// `NotFound` for `entity` rather than as a bad request.
pub(crate) fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::not_found(entity, raw)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_id_accepts_uuid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id("Job", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_id_maps_garbage_to_not_found() {
        let err = parse_id("Application", "not-a-uuid").unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound { entity: "Application", ref id }) if id == "not-a-uuid"
        );
    }
}
