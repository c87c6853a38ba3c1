//! Core types for path handling.
//!
//! This module defines the structural representation of a normalized path:
//! an optional [`Volume`], an [`Anchor`], the ordered named segments and a
//! trailing-separator flag.

use std::fmt;

use crate::path::normalize::{self, CURRENT, PARENT};

/// Whether a path is rooted.
///
/// # Examples
///
/// ```
/// use pathogen::{Anchor, NormalizedPath};
///
/// assert_eq!(NormalizedPath::new("/usr").anchor(), Anchor::Absolute);
/// assert_eq!(NormalizedPath::new("usr").anchor(), Anchor::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// The path starts at the root of its volume.
    Absolute,

    /// The path is relative to some directory supplied later.
    #[default]
    Relative,
}

/// A drive or volume label such as `c:`.
///
/// A label is a non-empty run of ASCII word characters (`[A-Za-z0-9_]`).
/// Labels are kept verbatim; no case folding is applied.
///
/// # Examples
///
/// ```
/// use pathogen::Volume;
///
/// let volume = Volume::new("c").unwrap();
/// assert_eq!(volume.as_str(), "c:");
/// assert_eq!(volume.label(), "c");
///
/// assert!(Volume::new("").is_none());
/// assert!(Volume::new("a/b").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Volume(String);

impl Volume {
    /// Create a volume from its label, without the trailing colon.
    ///
    /// Returns `None` if the label is empty or contains anything other than
    /// ASCII word characters.
    #[must_use]
    pub fn new(label: &str) -> Option<Self> {
        let valid = !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        valid.then(|| Self(format!("{label}:")))
    }

    /// The volume as it is written in front of a path, colon included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare label, without the colon.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path in normalized, structural form.
///
/// `NormalizedPath` is an immutable value: every operation that would modify
/// a path returns a new one. Normalization guarantees that:
///
/// - no segment is `.`;
/// - `..` only appears as leading segments of a relative path that climbs
///   above its starting point;
/// - the root path has no segments and always carries a trailing separator.
///
/// # Examples
///
/// ```
/// use pathogen::NormalizedPath;
///
/// let path = NormalizedPath::new("../.././////////some/path");
/// assert_eq!(path.to_unix(), "../../some/path");
/// assert_eq!(path.segments(), ["..", "..", "some", "path"]);
///
/// let path = NormalizedPath::new("/some/path/..");
/// assert_eq!(path.to_unix(), "/some");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedPath {
    volume: Option<Volume>,
    anchor: Anchor,
    segments: Vec<String>,
    trailing_separator: bool,
}

impl NormalizedPath {
    /// Parse and normalize a path text.
    ///
    /// Any string is accepted. Both `/` and `\` are separators, runs of
    /// separators collapse, and the empty string is treated as `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert_eq!(NormalizedPath::new("").to_unix(), ".");
    /// assert_eq!(NormalizedPath::new("/").to_unix(), "/");
    /// assert_eq!(NormalizedPath::new("some\\folder").to_unix(), "./some/folder");
    /// assert_eq!(NormalizedPath::new("c:\\windows").to_unix(), "c:/windows");
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        normalize::parse(text)
    }

    /// Build a path from several texts joined with a separator.
    ///
    /// The volume of the first text is kept; volume labels on later texts
    /// are dropped. An empty slice yields `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// let path = NormalizedPath::from_paths(&["a/b", "../c", "d/"]);
    /// assert_eq!(path.to_unix(), "./a/c/d/");
    ///
    /// let path = NormalizedPath::from_paths::<&str>(&[]);
    /// assert_eq!(path.to_unix(), ".");
    /// ```
    #[must_use]
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        normalize::from_paths(paths)
    }

    /// Assemble a path from already collapsed segments.
    ///
    /// The root (absolute, no segments) is always directory-shaped.
    pub(crate) fn from_parts(
        volume: Option<Volume>,
        anchor: Anchor,
        segments: Vec<String>,
        trailing_separator: bool,
    ) -> Self {
        let trailing_separator =
            trailing_separator || (anchor == Anchor::Absolute && segments.is_empty());
        Self {
            volume,
            anchor,
            segments,
            trailing_separator,
        }
    }

    /// The volume label, if any.
    #[must_use]
    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    /// Whether the path is absolute or relative.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns `true` if the path is rooted.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.anchor == Anchor::Absolute
    }

    /// Returns `true` if the path is the root of its volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert!(NormalizedPath::new("/a/..").is_root());
    /// assert!(NormalizedPath::new("e:").is_root());
    /// assert!(!NormalizedPath::new(".").is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_absolute() && self.segments.is_empty()
    }

    /// The named segments, without any `.` marker or separators.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if the path ends with a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Replace the volume label.
    ///
    /// The anchor is left untouched, so a volume-qualified relative path
    /// such as `c:./foo` can be built this way.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{NormalizedPath, Volume};
    ///
    /// let path = NormalizedPath::new("foo").with_volume(Volume::new("c"));
    /// assert_eq!(path.to_unix(), "c:./foo");
    /// assert!(!path.is_absolute());
    /// ```
    #[must_use]
    pub fn with_volume(mut self, volume: Option<Volume>) -> Self {
        self.volume = volume;
        self
    }

    /// The same path, rooted.
    ///
    /// Parent segments that would climb above the root are discarded.
    #[must_use]
    pub(crate) fn rooted(self) -> Self {
        if self.is_absolute() {
            return self;
        }
        let segments = normalize::collapse(
            Anchor::Absolute,
            self.segments.iter().map(String::as_str),
        );
        Self::from_parts(
            self.volume,
            Anchor::Absolute,
            segments,
            self.trailing_separator,
        )
    }

    /// The last component of the path, verbatim.
    ///
    /// Empty when the path ends with a separator, which includes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert_eq!(NormalizedPath::new("a/b.x").basename(), "b.x");
    /// assert_eq!(NormalizedPath::new("a/b/").basename(), "");
    /// assert_eq!(NormalizedPath::new("/").basename(), "");
    /// assert_eq!(NormalizedPath::new(".").basename(), ".");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        if self.trailing_separator {
            return "";
        }
        match self.segments.last() {
            Some(last) => last,
            None if self.is_absolute() => "",
            None => CURRENT,
        }
    }

    /// The directory containing this path.
    ///
    /// A path that already ends with a separator is returned unchanged.
    /// Otherwise the last named segment is dropped and the result ends with
    /// a separator. A path whose basename is `.` or `..` already names a
    /// directory and is only given a trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert_eq!(NormalizedPath::new("a/b/").dirname().to_unix(), "./a/b/");
    /// assert_eq!(NormalizedPath::new("a/b").dirname().to_unix(), "./a/");
    /// assert_eq!(NormalizedPath::new("/").dirname().to_unix(), "/");
    /// assert_eq!(NormalizedPath::new("..").dirname().to_unix(), "../");
    /// ```
    #[must_use]
    pub fn dirname(&self) -> Self {
        if self.basename().is_empty() {
            return self.clone();
        }
        let mut segments = self.segments.clone();
        if segments.last().is_some_and(|last| last != PARENT) {
            segments.pop();
        }
        Self::from_parts(self.volume.clone(), self.anchor, segments, true)
    }

    /// The extension of the basename, dot included, or an empty string.
    ///
    /// The extension is the last `.` followed by one or more ASCII word
    /// characters running to the end of the basename.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert_eq!(NormalizedPath::new("./file.js").extname(), ".js");
    /// assert_eq!(NormalizedPath::new("./file.js/").extname(), "");
    /// assert_eq!(NormalizedPath::new("archive.tar.gz").extname(), ".gz");
    /// assert_eq!(NormalizedPath::new("/").extname(), "");
    /// ```
    #[must_use]
    pub fn extname(&self) -> &str {
        let base = self.basename();
        match base.rfind('.') {
            Some(dot) => {
                let suffix = &base[dot + 1..];
                let is_word = !suffix.is_empty()
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || b == b'_');
                if is_word {
                    &base[dot..]
                } else {
                    ""
                }
            }
            None => "",
        }
    }

    /// The path in list form with positional sentinels.
    ///
    /// A leading empty string marks an absolute path, a trailing empty
    /// string marks a trailing separator, and relative paths that do not
    /// start with `..` carry an explicit `.` marker. Joining this list with
    /// a separator gives the formatted path (volume excluded).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// assert_eq!(NormalizedPath::new("/").sentinel_segments(), ["", ""]);
    /// assert_eq!(NormalizedPath::new("a/b/").sentinel_segments(), [".", "a", "b", ""]);
    /// assert_eq!(NormalizedPath::new("../x").sentinel_segments(), ["..", "x"]);
    /// ```
    #[must_use]
    pub fn sentinel_segments(&self) -> Vec<&str> {
        let mut parts = Vec::with_capacity(self.segments.len() + 2);
        match self.anchor {
            Anchor::Absolute => parts.push(""),
            Anchor::Relative => {
                if self.segments.first().map(String::as_str) != Some(PARENT) {
                    parts.push(CURRENT);
                }
            }
        }
        parts.extend(self.segments.iter().map(String::as_str));
        if self.trailing_separator {
            parts.push("");
        }
        parts
    }
}

impl std::str::FromStr for NormalizedPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for NormalizedPath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for NormalizedPath {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}
