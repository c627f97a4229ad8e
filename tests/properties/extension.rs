//! Property tests for extension helpers.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use psdkeep::domain::value_objects::normalize_extension;
use psdkeep::{extension_of, with_extension};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _.\\-]{1,24}")
        .unwrap()
        .prop_filter("not a special component", |s| s != "." && s != "..")
}

fn dir_component() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.\\-]{1,12}")
        .unwrap()
        .prop_filter("not a special component", |s| s != "." && s != "..")
}

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("\\.[a-z0-9]{1,4}").unwrap()
}

fn path_of(dirs: &[String], name: &str) -> PathBuf {
    let mut path: PathBuf = dirs.iter().collect();
    path.push(name);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An extension is empty or starts with a period and is lowercase.
    #[test]
    fn property_extension_shape(
        dirs in proptest::collection::vec(dir_component(), 0..=3),
        name in file_name(),
    ) {
        let ext = extension_of(&path_of(&dirs, &name));

        prop_assert!(ext.is_empty() || ext.starts_with('.'));
        prop_assert_eq!(ext.to_lowercase(), ext.clone());
        prop_assert!(!ext.contains('/'));
    }

    /// PROPERTY: Parent directories never contribute to the extension.
    #[test]
    fn property_extension_ignores_directories(
        dirs in proptest::collection::vec(dir_component(), 1..=3),
        name in file_name(),
    ) {
        prop_assert_eq!(
            extension_of(&path_of(&dirs, &name)),
            extension_of(Path::new(&name))
        );
    }

    /// PROPERTY: After substitution the path reports the new extension and
    /// stays in the same directory.
    #[test]
    fn property_with_extension_sets_extension(
        dirs in proptest::collection::vec(dir_component(), 0..=3),
        name in file_name(),
        new_ext in extension(),
    ) {
        let path = path_of(&dirs, &name);
        let replaced = with_extension(&path, &new_ext);

        prop_assert_eq!(extension_of(&replaced), new_ext.clone());
        prop_assert_eq!(replaced.parent(), path.parent());
    }

    /// PROPERTY: Substitution is idempotent.
    #[test]
    fn property_with_extension_idempotent(
        name in file_name(),
        new_ext in extension(),
    ) {
        let once = with_extension(Path::new(&name), &new_ext);
        let twice = with_extension(&once, &new_ext);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Normalizing an extension is idempotent and case-insensitive.
    #[test]
    fn property_normalize_extension(raw in "[.]{0,2}[A-Za-z0-9]{1,5}") {
        let normalized = normalize_extension(&raw);

        prop_assert!(normalized.starts_with('.'));
        prop_assert!(!normalized[1..].starts_with('.'));
        prop_assert_eq!(normalize_extension(&normalized), normalized.clone());
        prop_assert_eq!(normalize_extension(&raw.to_uppercase()), normalized);
    }
}
