//! Slug generation for job postings.
//!
//! A slug is derived once from the job title at creation time and never
//! changes afterwards. Uniqueness is settled by [`next_available_slug`], which
//! the repository calls while holding a per-slug advisory lock.

use crate::error::CoreError;

/// Slug used when a title contains no ASCII alphanumerics at all.
pub const FALLBACK_SLUG: &str = "job";

/// Maximum length of the base slug (before any `-N` suffix).
pub const MAX_BASE_SLUG_LEN: usize = 80;

/// Generate a URL-safe slug from a job title.
///
/// Converts to lowercase, replaces everything that is not an ASCII
/// alphanumeric with a hyphen, collapses consecutive hyphens, and trims
/// leading/trailing hyphens. Falls back to [`FALLBACK_SLUG`] when nothing
/// survives.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = true;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.truncate(MAX_BASE_SLUG_LEN);
    let trimmed = result.trim_matches('-');

    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pick the first free slug among `base`, `base-2`, `base-3`, ...
///
/// `taken` holds the slugs already in use that share the `base` prefix.
pub fn next_available_slug<S: AsRef<str>>(base: &str, taken: &[S]) -> String {
    let is_taken = |candidate: &str| taken.iter().any(|s| s.as_ref() == candidate);

    if !is_taken(base) {
        return base.to_string();
    }

    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(generate_slug("Senior Rust Engineer"), "senior-rust-engineer");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(generate_slug("TEST_QA  Engineer (Remote)!"), "test-qa-engineer-remote");
    }

    #[test]
    fn leading_and_trailing_noise_is_trimmed() {
        assert_eq!(generate_slug("  --Designer--  "), "designer");
    }

    #[test]
    fn non_ascii_only_title_falls_back() {
        assert_eq!(generate_slug("日本語"), FALLBACK_SLUG);
        assert_eq!(generate_slug(""), FALLBACK_SLUG);
    }

    #[test]
    fn generated_slugs_never_contain_spaces() {
        for title in ["a b c", "   ", "Data\tScientist", "C++ / Go Developer"] {
            let slug = generate_slug(title);
            assert!(!slug.contains(' '), "slug {slug:?} contains a space");
            assert!(!slug.is_empty());
            validate_slug(&slug).unwrap();
        }
    }

    #[test]
    fn long_titles_are_truncated() {
        let title = "x".repeat(200);
        assert_eq!(generate_slug(&title).len(), MAX_BASE_SLUG_LEN);
    }

    #[test]
    fn free_base_is_used_as_is() {
        let taken: [&str; 0] = [];
        assert_eq!(next_available_slug("designer", &taken), "designer");
    }

    #[test]
    fn taken_base_gets_numeric_suffix() {
        assert_eq!(
            next_available_slug("designer", &["designer"]),
            "designer-2"
        );
        assert_eq!(
            next_available_slug("designer", &["designer", "designer-2", "designer-4"]),
            "designer-3"
        );
    }

    #[test]
    fn unrelated_prefix_matches_do_not_block() {
        assert_eq!(
            next_available_slug("designer", &["designer-lead"]),
            "designer"
        );
    }

    #[test]
    fn validate_rejects_uppercase_and_spaces() {
        assert!(validate_slug("Designer").is_err());
        assert!(validate_slug("lead designer").is_err());
        assert!(validate_slug("").is_err());
    }
}
