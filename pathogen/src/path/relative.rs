//! Relativization of one path against another.
//!
//! The origin is treated as a directory, basename included: walking from
//! `/a/b/c` to `/a/b/f` takes one step up out of `c` and then down into `f`.
//! Only named segments are compared, so trailing separators on either side
//! do not count as extra levels, and the result never ends with a
//! separator.

use crate::environment::Environment;
use crate::error::Result;
use crate::path::normalize::PARENT;
use crate::path::resolver::working_root;
use crate::path::types::{Anchor, NormalizedPath};

impl NormalizedPath {
    /// The relative path leading from this path to `to`.
    ///
    /// `to` is parsed as path text. See [`NormalizedPath::relative_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if either path is relative and `env` fails to
    /// provide the working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{EnvironmentConfig, NormalizedPath};
    ///
    /// let env = EnvironmentConfig::default().with_cwd("/work");
    ///
    /// let from = NormalizedPath::new("/a/b/c");
    /// assert_eq!(from.relative("/a/b/f", &env).unwrap().to_unix(), "../f");
    ///
    /// let from = NormalizedPath::new("a/b/c");
    /// assert_eq!(from.relative("a/b/c", &env).unwrap().to_unix(), ".");
    /// ```
    pub fn relative<E>(&self, to: &str, env: &E) -> Result<NormalizedPath>
    where
        E: Environment + ?Sized,
    {
        self.relative_to(&NormalizedPath::new(to), env)
    }

    /// The relative path leading from this path to an already-parsed `to`.
    ///
    /// Both paths are resolved first, reading the working directory at most
    /// once. When their volumes differ no relative path exists and the
    /// resolved `to` is returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is relative and `env` fails to
    /// provide the working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{EnvironmentConfig, NormalizedPath};
    ///
    /// let env = EnvironmentConfig::default();
    ///
    /// let from = NormalizedPath::new("c:\\windows\\system32");
    /// let to = NormalizedPath::new("e:\\windows\\");
    /// assert_eq!(from.relative_to(&to, &env).unwrap().to_windows(), "e:\\windows\\");
    /// ```
    pub fn relative_to<E>(&self, to: &NormalizedPath, env: &E) -> Result<NormalizedPath>
    where
        E: Environment + ?Sized,
    {
        let root = if self.is_absolute() && to.is_absolute() {
            None
        } else {
            Some(working_root(env)?)
        };
        let ground = |path: &NormalizedPath| match &root {
            Some(root) if !path.is_absolute() => root.join(path),
            _ => path.clone(),
        };
        let from = ground(self);
        let to = ground(to);

        if from.volume() != to.volume() {
            log::debug!("no relative path between volumes, keeping {to}");
            return Ok(to);
        }

        let from_segments = from.segments();
        let to_segments = to.segments();
        let common = from_segments
            .iter()
            .zip(to_segments)
            .take_while(|(a, b)| a == b)
            .count();

        let segments = std::iter::repeat(PARENT.to_string())
            .take(from_segments.len() - common)
            .chain(to_segments[common..].iter().cloned())
            .collect();

        Ok(NormalizedPath::from_parts(
            None,
            Anchor::Relative,
            segments,
            false,
        ))
    }
}
