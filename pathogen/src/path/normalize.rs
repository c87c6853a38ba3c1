//! Path parsing and normalization.
//!
//! This module turns raw path text into a [`NormalizedPath`] by:
//! - Extracting an optional volume label (`c:`)
//! - Treating `\` and `/` alike as separators
//! - Collapsing separator runs
//! - Resolving `.` and `..` components

use crate::path::types::{Anchor, NormalizedPath, Volume};

/// The current-directory component.
pub const CURRENT: &str = ".";

/// The parent-directory component.
pub const PARENT: &str = "..";

/// Split a leading volume label off a path text.
///
/// A volume is a non-empty run of ASCII word characters followed by `:`,
/// appearing before any separator. The rest of the text is returned as is.
///
/// # Examples
///
/// ```
/// use pathogen::path::normalize::split_volume;
///
/// let (volume, rest) = split_volume("c:\\windows");
/// assert_eq!(volume.unwrap().as_str(), "c:");
/// assert_eq!(rest, "\\windows");
///
/// let (volume, rest) = split_volume("/a/b:c");
/// assert!(volume.is_none());
/// assert_eq!(rest, "/a/b:c");
/// ```
#[must_use]
pub fn split_volume(text: &str) -> (Option<Volume>, &str) {
    if let Some((label, rest)) = text.split_once(':') {
        if let Some(volume) = Volume::new(label) {
            return (Some(volume), rest);
        }
    }
    (None, text)
}

/// Resolve `.` and `..` components of a segment sequence.
///
/// The sequence is walked right to left with a counter of pending `..`
/// components; each named segment consumes one pending `..` or is kept.
/// Empty and `.` segments are dropped. Pending `..` components are kept as
/// leading segments of a relative sequence and discarded for an absolute
/// one, since nothing lies above the root.
///
/// # Examples
///
/// ```
/// use pathogen::path::normalize::collapse;
/// use pathogen::Anchor;
///
/// let parts = collapse(Anchor::Relative, "../a/./b/../../..".split('/'));
/// assert_eq!(parts, ["..", ".."]);
///
/// let parts = collapse(Anchor::Absolute, "../a/./b/../../..".split('/'));
/// assert!(parts.is_empty());
/// ```
pub fn collapse<'a, I>(anchor: Anchor, parts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut up = 0usize;
    let mut kept = Vec::new();

    for part in parts.into_iter().rev() {
        match part {
            "" | CURRENT => {}
            PARENT => up += 1,
            _ if up > 0 => up -= 1,
            _ => kept.push(part.to_string()),
        }
    }

    match anchor {
        Anchor::Relative => kept.extend(std::iter::repeat(PARENT.to_string()).take(up)),
        Anchor::Absolute if up > 0 => {
            log::trace!("discarding {up} parent component(s) above the root");
        }
        Anchor::Absolute => {}
    }

    kept.reverse();
    kept
}

/// Normalize path text that carries no volume label.
///
/// A leading separator makes the path absolute and a trailing separator is
/// preserved. Never fails: the empty string normalizes to `.`.
///
/// # Examples
///
/// ```
/// use pathogen::path::normalize::normalize_text;
///
/// assert_eq!(normalize_text("/../.././some/path/").to_unix(), "/some/path/");
/// assert_eq!(normalize_text("././../").to_unix(), "../");
/// assert_eq!(normalize_text("").to_unix(), ".");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> NormalizedPath {
    let text = text.replace('\\', "/");
    let anchor = if text.starts_with('/') {
        Anchor::Absolute
    } else {
        Anchor::Relative
    };
    let trailing_separator = text.ends_with('/');
    let segments = collapse(anchor, text.split('/'));

    NormalizedPath::from_parts(None, anchor, segments, trailing_separator)
}

/// Parse a single path text, volume label included.
///
/// A volume-qualified text is rooted on its volume: `c:foo` parses as
/// `c:/foo` and `e:` as `e:/`.
#[must_use]
pub fn parse(text: &str) -> NormalizedPath {
    from_paths(&[text])
}

/// Parse several path texts as one, joined with separators.
///
/// Only the first text contributes a volume; labels on the others are
/// stripped. Empty texts count as `.`.
#[must_use]
pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> NormalizedPath {
    let Some(first) = paths.first() else {
        return NormalizedPath::default();
    };
    let (volume, _) = split_volume(first.as_ref());

    let mut pieces = Vec::with_capacity(paths.len() + 1);
    if volume.is_some() {
        pieces.push("");
    }
    for path in paths {
        let (_, body) = split_volume(path.as_ref());
        pieces.push(if body.is_empty() { CURRENT } else { body });
    }

    normalize_text(&pieces.join("/")).with_volume(volume)
}
