//! Path composition: joining and resolving against an absolute root.
//!
//! Resolution scans its candidates right to left and stops at the first
//! absolute one, which becomes the root. Everything to its right is appended
//! in order. When no candidate is absolute, the working directory reported by
//! the [`Environment`] is the root.

use crate::environment::Environment;
use crate::error::Result;
use crate::path::normalize::collapse;
use crate::path::types::NormalizedPath;

impl NormalizedPath {
    /// Append `other` to this path.
    ///
    /// An absolute `other` replaces this path entirely. Otherwise the
    /// segments are concatenated and re-normalized; the result keeps this
    /// path's volume and anchor and takes `other`'s trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::NormalizedPath;
    ///
    /// let base = NormalizedPath::new("/abc/def");
    /// assert_eq!(base.join(&"../ghi/".into()).to_unix(), "/abc/ghi/");
    /// assert_eq!(base.join(&"/xyz".into()).to_unix(), "/xyz");
    /// assert_eq!(base.join(&"../../..".into()).to_unix(), "/");
    /// ```
    #[must_use]
    pub fn join(&self, other: &NormalizedPath) -> NormalizedPath {
        if other.is_absolute() {
            return other.clone();
        }
        let segments = collapse(
            self.anchor(),
            self.segments()
                .iter()
                .chain(other.segments())
                .map(String::as_str),
        );
        NormalizedPath::from_parts(
            self.volume().cloned(),
            self.anchor(),
            segments,
            other.has_trailing_separator(),
        )
    }

    /// Resolve this path followed by `others` to an absolute path.
    ///
    /// Each entry of `others` is parsed as path text. The working directory
    /// is only requested from `env` when none of the candidates is absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and `env` fails
    /// to provide it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{EnvironmentConfig, NormalizedPath};
    ///
    /// let env = EnvironmentConfig::default().with_cwd("/home/user");
    ///
    /// let path = NormalizedPath::new("abc/def/ghi");
    /// assert_eq!(path.resolve(&["/abc"], &env).unwrap().to_unix(), "/abc");
    /// assert_eq!(path.resolve(&["../x"], &env).unwrap().to_unix(), "/home/user/abc/def/x");
    ///
    /// let path = NormalizedPath::new("f:\\windows\\system32");
    /// assert_eq!(path.resolve(&["e:"], &env).unwrap().to_windows(), "e:\\");
    /// ```
    pub fn resolve<S, E>(&self, others: &[S], env: &E) -> Result<NormalizedPath>
    where
        S: AsRef<str>,
        E: Environment + ?Sized,
    {
        let others: Vec<NormalizedPath> = others
            .iter()
            .map(|other| NormalizedPath::new(other.as_ref()))
            .collect();
        self.resolve_paths(&others, env)
    }

    /// Resolve this path followed by already-parsed `others`.
    ///
    /// The volume of the chosen root wins; volumes of candidates to its left
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and `env` fails
    /// to provide it.
    pub fn resolve_paths<E>(&self, others: &[NormalizedPath], env: &E) -> Result<NormalizedPath>
    where
        E: Environment + ?Sized,
    {
        let candidates: Vec<&NormalizedPath> = std::iter::once(self).chain(others).collect();

        let (root, rest) = match candidates.iter().rposition(|path| path.is_absolute()) {
            Some(index) => (candidates[index].clone(), &candidates[index + 1..]),
            None => (working_root(env)?, &candidates[..]),
        };

        Ok(rest.iter().fold(root, |acc, path| acc.join(path)))
    }
}

/// Parse the working directory reported by `env` as an absolute root.
pub(crate) fn working_root<E>(env: &E) -> Result<NormalizedPath>
where
    E: Environment + ?Sized,
{
    let cwd = env.current_dir()?;
    log::trace!("grounding relative path on working directory {cwd}");
    Ok(NormalizedPath::new(&cwd).rooted())
}
