//! Rendering normalized paths back to text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::environment::Environment;
use crate::path::types::NormalizedPath;

/// Separator convention used when formatting a path.
///
/// # Examples
///
/// ```
/// use pathogen::{NormalizedPath, Style};
///
/// let path = NormalizedPath::new("c:/windows/system32");
/// assert_eq!(path.format(Style::Unix), "c:/windows/system32");
/// assert_eq!(path.format(Style::Windows), "c:\\windows\\system32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Forward slashes.
    Unix,
    /// Backslashes.
    Windows,
}

impl Style {
    /// The separator for this style.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Unix => "/",
            Self::Windows => "\\",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl NormalizedPath {
    /// Render the path with the separators of `style`, volume first.
    #[must_use]
    pub fn format(&self, style: Style) -> String {
        let body = self.sentinel_segments().join(style.separator());
        match self.volume() {
            Some(volume) => format!("{volume}{body}"),
            None => body,
        }
    }

    /// Render with `/` separators.
    #[must_use]
    pub fn to_unix(&self) -> String {
        self.format(Style::Unix)
    }

    /// Render with `\` separators.
    #[must_use]
    pub fn to_windows(&self) -> String {
        self.format(Style::Windows)
    }

    /// Render with the native separators of the host reported by `env`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{EnvironmentConfig, NormalizedPath, Platform};
    ///
    /// let env = EnvironmentConfig::default().with_platform(Platform::Windows);
    /// assert_eq!(NormalizedPath::new("/a/b").to_system(&env), "\\a\\b");
    /// ```
    #[must_use]
    pub fn to_system<E: Environment + ?Sized>(&self, env: &E) -> String {
        self.format(env.platform().style())
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unix())
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_unix())
    }
}

impl<'de> Deserialize<'de> for NormalizedPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self::new(&text))
    }
}
