//! Property-based tests for slug generation
//!
//! Generated project names exercise the whitespace/punctuation collapsing
//! that the unit tests only sample.

use proptest::prelude::*;

use dapphunt::shared::models::project::slugify;

proptest! {
    #[test]
    fn test_slug_contains_only_lowercase_alnum_and_dashes(name in ".*") {
        let slug = slugify(&name);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_slug_never_starts_or_ends_with_a_dash(name in ".*") {
        let slug = slugify(&name);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_slug_has_no_dash_runs(name in ".*") {
        prop_assert!(!slugify(&name).contains("--"));
    }

    #[test]
    fn test_slugify_is_idempotent(name in ".*") {
        let once = slugify(&name);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slug_ignores_case(name in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(slugify(&name.to_uppercase()), slugify(&name.to_lowercase()));
    }

    #[test]
    fn test_plain_words_survive_unchanged(name in "[a-z0-9]{1,20}") {
        prop_assert_eq!(slugify(&name), name);
    }
}
