//! Property-based tests for the path algebra.
//!
//! Note: unit tests in each module pin the literal scenarios. This module
//! checks the algebraic laws over generated paths.

use super::normalize::{CURRENT, PARENT};
use super::types::NormalizedPath;
use crate::environment::{EnvironmentConfig, Platform};
use proptest::prelude::*;

// Strategy for generating named path components
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Components including `.`, `..` and empty runs
fn noisy_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => path_component_strategy(),
        1 => Just(CURRENT.to_string()),
        1 => Just(PARENT.to_string()),
        1 => Just(String::new()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn any_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(prop_oneof![Just("c:"), Just("d:")]),
        any::<bool>(),
        prop::collection::vec(noisy_component_strategy(), 0..10),
        prop_oneof![Just("/"), Just("\\")],
        any::<bool>(),
    )
        .prop_map(|(volume, rooted, parts, separator, trailing)| {
            let mut text = volume.unwrap_or_default().to_string();
            if rooted {
                text.push_str(separator);
            }
            text.push_str(&parts.join(separator));
            if trailing {
                text.push_str(separator);
            }
            text
        })
}

fn fixed_env() -> EnvironmentConfig {
    EnvironmentConfig::default()
        .with_cwd("/work/dir")
        .with_platform(Platform::Posix)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(format(normalize(p))) == normalize(p)
    #[test]
    fn normalization_idempotent(text in any_path_strategy()) {
        let once = NormalizedPath::new(&text);
        let twice = NormalizedPath::new(&once.to_unix());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.to_windows(), NormalizedPath::new(&once.to_windows()).to_windows());
    }

    // Normalized segments never contain "." and only lead with ".."
    #[test]
    fn normalized_segments_are_clean(text in any_path_strategy()) {
        let path = NormalizedPath::new(&text);
        let segments = path.segments();
        prop_assert!(segments.iter().all(|s| !s.is_empty() && s != CURRENT));

        let leading = segments.iter().take_while(|s| *s == PARENT).count();
        prop_assert!(segments[leading..].iter().all(|s| s != PARENT));
        if path.is_absolute() {
            prop_assert_eq!(leading, 0);
        }
    }

    // Relative paths render with "." or ".." first
    #[test]
    fn relative_paths_render_explicitly(text in any_path_strategy()) {
        let path = NormalizedPath::new(&text);
        if !path.is_absolute() {
            let rendered = path.to_unix();
            prop_assert!(rendered.starts_with(CURRENT));
        }
    }

    // Absolute paths round-trip through their Unix form
    #[test]
    fn absolute_round_trip(text in absolute_path_strategy()) {
        let path = NormalizedPath::new(&text);
        prop_assert!(path.is_absolute());
        prop_assert_eq!(path.to_unix(), text);
    }

    // Resolution always yields an absolute path
    #[test]
    fn resolve_is_absolute(base in any_path_strategy(), other in any_path_strategy()) {
        let resolved = NormalizedPath::new(&base).resolve(&[other], &fixed_env()).unwrap();
        prop_assert!(resolved.is_absolute());
    }

    // The volume of the rightmost absolute candidate survives resolution
    #[test]
    fn resolve_preserves_root_volume(
        label in "[a-z]",
        root in absolute_path_strategy(),
        tail in prop::collection::vec(path_component_strategy(), 0..4),
    ) {
        let rooted = format!("{label}:{root}");
        let resolved = NormalizedPath::new("x/y")
            .resolve(&[rooted.as_str(), tail.join("/").as_str()], &fixed_env())
            .unwrap();
        prop_assert_eq!(resolved.volume().map(|v| v.label().to_string()), Some(label));
    }

    // Walking the relative path from `a` reconstructs `b`
    #[test]
    fn relative_inverse(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let env = fixed_env();
        let from = NormalizedPath::new(&a);
        let to = NormalizedPath::new(&b);
        let relative = from.relative_to(&to, &env).unwrap();
        prop_assert!(!relative.is_absolute());

        let back = from.resolve(&[relative.to_unix()], &env).unwrap();
        prop_assert_eq!(back.segments(), to.segments());
    }

    // dirname is directory-shaped and stable
    #[test]
    fn dirname_is_stable(text in any_path_strategy()) {
        let dir = NormalizedPath::new(&text).dirname();
        prop_assert_eq!(dir.basename(), "");
        prop_assert_eq!(dir.dirname(), dir);
    }
}
