//! String-in, string-out shortcuts bound to a formatting flavor.
//!
//! Each [`Shortcuts`] value parses its inputs, runs one operation of the
//! path algebra and formats the result in its [`Flavor`]. The free functions
//! [`unix`], [`windows`] and [`system`] bind the running process as the
//! environment.
//!
//! # Examples
//!
//! ```
//! use pathogen::{EnvironmentConfig, Flavor, Shortcuts};
//!
//! let win = Shortcuts::with_environment(Flavor::Windows, EnvironmentConfig::default());
//! assert_eq!(win.join(&["c:/windows", "system32"]), "c:\\windows\\system32");
//! assert_eq!(
//!     win.relative("c:\\windows\\system32\\", "c:\\windows\\drivers\\").unwrap(),
//!     "..\\drivers"
//! );
//!
//! let nix = pathogen::unix();
//! assert_eq!(nix.dirname("a/b/"), "./a/b/");
//! assert_eq!(nix.basename("a/b"), "b");
//! assert_eq!(nix.extname("./file.js"), ".js");
//! ```

use crate::environment::{Environment, ProcessEnvironment};
use crate::error::Result;
use crate::path::NormalizedPath;

/// Which formatter the shortcuts apply to their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Always `/`.
    Unix,
    /// Always `\`.
    Windows,
    /// Whatever the environment reports as native.
    System,
}

/// A set of path functions producing text in one flavor.
#[derive(Debug, Clone)]
pub struct Shortcuts<E = ProcessEnvironment> {
    flavor: Flavor,
    env: E,
}

impl Shortcuts<ProcessEnvironment> {
    /// Shortcuts for `flavor` using the running process as environment.
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        Self::with_environment(flavor, ProcessEnvironment)
    }
}

impl<E: Environment> Shortcuts<E> {
    /// Shortcuts for `flavor` using an explicit environment.
    #[must_use]
    pub fn with_environment(flavor: Flavor, env: E) -> Self {
        Self { flavor, env }
    }

    /// The flavor of the produced text.
    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The environment consulted by `cwd`, `resolve`, `relative` and the
    /// system flavor.
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.env
    }

    fn render(&self, path: &NormalizedPath) -> String {
        match self.flavor {
            Flavor::Unix => path.to_unix(),
            Flavor::Windows => path.to_windows(),
            Flavor::System => path.to_system(&self.env),
        }
    }

    /// Normalize one or more path texts joined together.
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, paths: &[S]) -> String {
        self.render(&NormalizedPath::from_paths(paths))
    }

    /// The working directory, normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot provide it.
    pub fn cwd(&self) -> Result<String> {
        let cwd = self.env.current_dir()?;
        Ok(self.render(&NormalizedPath::new(&cwd)))
    }

    /// The directory part of `path`.
    #[must_use]
    pub fn dirname(&self, path: &str) -> String {
        self.render(&NormalizedPath::new(path).dirname())
    }

    /// The last component of `path`, verbatim in every flavor.
    #[must_use]
    pub fn basename(&self, path: &str) -> String {
        NormalizedPath::new(path).basename().to_string()
    }

    /// The extension of `path`, dot included, or an empty string.
    #[must_use]
    pub fn extname(&self, path: &str) -> String {
        NormalizedPath::new(path).extname().to_string()
    }

    /// Resolve `path` followed by `paths` to an absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and the
    /// environment cannot provide it.
    pub fn resolve<S: AsRef<str>>(&self, path: &str, paths: &[S]) -> Result<String> {
        let resolved = NormalizedPath::new(path).resolve(paths, &self.env)?;
        Ok(self.render(&resolved))
    }

    /// The relative path from `path` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and the
    /// environment cannot provide it.
    pub fn relative(&self, path: &str, to: &str) -> Result<String> {
        let relative = NormalizedPath::new(path).relative(to, &self.env)?;
        Ok(self.render(&relative))
    }
}

/// Shortcuts producing `/`-separated text.
#[must_use]
pub fn unix() -> Shortcuts {
    Shortcuts::new(Flavor::Unix)
}

/// Shortcuts producing `\`-separated text.
#[must_use]
pub fn windows() -> Shortcuts {
    Shortcuts::new(Flavor::Windows)
}

/// Shortcuts producing text in the host's native style.
#[must_use]
pub fn system() -> Shortcuts {
    Shortcuts::new(Flavor::System)
}
