//! Property-based tests for the path algebra as seen through [`Pathname`].
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on the laws tying the `Pathname` operations together.

use super::relationship::PathRelationship;
use crate::Pathname;
use proptest::prelude::*;

// Strategy for generating plain segment names
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

// Relative or absolute paths built from plain segments
fn plain_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 1..6),
    )
        .prop_map(|(absolute, parts)| {
            let body = parts.join("/");
            if absolute {
                format!("/{body}")
            } else {
                body
            }
        })
}

// Arbitrary path-like strings including dots and redundant separators
fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        0..8,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The raw string survives construction untouched
    #[test]
    fn raw_string_round_trips(s in messy_path_strategy()) {
        prop_assert_eq!(Pathname::new(s.clone()).to_string(), s);
    }

    // The first ascend entry is the path itself
    #[test]
    fn ascend_starts_with_self(s in messy_path_strategy()) {
        let path = Pathname::new(s);
        prop_assert_eq!(&path.ascend()[0], &path);
    }

    // descend is ascend reversed
    #[test]
    fn descend_reverses_ascend(s in messy_path_strategy()) {
        let path = Pathname::new(s);
        let mut ascended = path.ascend();
        ascended.reverse();
        prop_assert_eq!(path.descend(), ascended);
    }

    // Every ascend entry after the first is the parent of the one before it
    #[test]
    fn ascend_walks_parents(s in plain_path_strategy()) {
        let chain = Pathname::new(s).ascend();
        for pair in chain.windows(2) {
            prop_assert_eq!(&pair[1], &pair[0].parent());
        }
    }

    // split is exactly (dirname, basename)
    #[test]
    fn split_matches_parts(s in messy_path_strategy()) {
        let path = Pathname::new(s);
        prop_assert_eq!(path.split(), (path.dirname(), path.basename()));
    }

    // Rejoining dirname and basename gives back the cleaned path
    #[test]
    fn dirname_join_basename_is_clean(s in plain_path_strategy()) {
        let path = Pathname::new(s);
        let rejoined = path.dirname().join([path.basename().as_str()]);
        prop_assert_eq!(rejoined, path.cleanpath());
    }

    // The parent joined with the basename is the cleaned path
    #[test]
    fn parent_join_basename_is_clean(s in plain_path_strategy()) {
        let path = Pathname::new(s);
        let rejoined = path.parent().join([path.basename().as_str()]);
        prop_assert_eq!(rejoined, path.cleanpath());
    }

    // Stripping the extension and re-appending it restores the basename
    #[test]
    fn basename_splits_at_extension(s in plain_path_strategy()) {
        let path = Pathname::new(s);
        let ext = path.extname();
        let stem = path.basename_without(&ext);
        prop_assert_eq!(format!("{stem}{ext}"), path.basename().to_string());
    }

    // Cleaning twice is the same as cleaning once
    #[test]
    fn cleanpath_idempotent(s in messy_path_strategy()) {
        let once = Pathname::new(s).cleanpath();
        prop_assert_eq!(once.cleanpath(), once);
    }

    // Expanding a relative result against its base finds the target again
    #[test]
    fn relative_path_expands_back(
        target in prop::collection::vec(segment_strategy(), 1..5),
        base in prop::collection::vec(segment_strategy(), 1..5),
    ) {
        let target = Pathname::new(format!("/{}", target.join("/")));
        let base = Pathname::new(format!("/{}", base.join("/")));
        let relative = target.relative_path_from(&base).unwrap();
        prop_assert!(relative.is_relative());
        prop_assert_eq!(relative.expand_path_from(base.as_str()).unwrap(), target);
    }

    // Joining a segment always produces a descendant
    #[test]
    fn join_produces_descendant(s in plain_path_strategy(), child in segment_strategy()) {
        let path = Pathname::new(s);
        let joined = path.join([child.as_str()]);
        prop_assert_eq!(path.relationship_to(&joined), PathRelationship::Ancestor);
    }
}
