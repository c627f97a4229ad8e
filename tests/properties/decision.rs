//! Property tests for the decision table.

use proptest::prelude::*;

use psdkeep::{decide, verdict, Action, FileKind, FileState};

fn kind() -> impl Strategy<Value = FileKind> {
    prop_oneof![
        Just(FileKind::Asset),
        Just(FileKind::Archive),
        Just(FileKind::Other),
    ]
}

fn state() -> impl Strategy<Value = FileState> {
    (kind(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(kind, has_preview, has_archive, has_asset)| match kind {
            FileKind::Other => FileState::untracked(),
            FileKind::Asset => FileState {
                kind,
                has_preview,
                has_archive,
                has_asset: true,
            },
            FileKind::Archive => FileState {
                kind,
                has_preview,
                has_archive: true,
                has_asset,
            },
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An asset is never compliant and always gets an action.
    #[test]
    fn property_assets_always_act(state in state()) {
        if state.kind == FileKind::Asset {
            prop_assert!(!decide(&state).is_noop());
            prop_assert!(verdict(&state).is_some());
        }
    }

    /// PROPERTY: Anything reconcile would change, audit reports.
    #[test]
    fn property_action_implies_violation(state in state()) {
        if !decide(&state).is_noop() {
            prop_assert!(verdict(&state).is_some());
        }
    }

    /// PROPERTY: A missing preview outranks every other asset rule.
    #[test]
    fn property_preview_first(has_archive in any::<bool>()) {
        let state = FileState {
            kind: FileKind::Asset,
            has_preview: false,
            has_archive,
            has_asset: true,
        };
        prop_assert_eq!(decide(&state), Action::GeneratePreview);
    }

    /// PROPERTY: Non-asset files never trigger anything.
    #[test]
    fn property_other_files_untouched(_seed in any::<u8>()) {
        let state = FileState::untracked();
        prop_assert_eq!(decide(&state), Action::NoOp);
        prop_assert!(verdict(&state).is_none());
    }

    /// PROPERTY: Archives are only ever extracted, never deleted.
    #[test]
    fn property_archives_only_extract(state in state()) {
        if state.kind == FileKind::Archive {
            let action = decide(&state);
            prop_assert!(
                action == Action::NoOp || action == Action::ExtractThenGeneratePreview
            );
        }
    }
}
