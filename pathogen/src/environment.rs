//! The host environment consumed by the path algebra.
//!
//! Only two queries ever reach outside the library: the current working
//! directory (the default root of [`NormalizedPath::resolve`]) and the host
//! platform (the style chosen by [`NormalizedPath::to_system`]). Both are
//! supplied through the [`Environment`] trait so that callers can pin them.
//!
//! [`EnvironmentConfig`] is the configuration layer: it can be deserialized
//! from YAML and overridden by `PATHOGEN_*` environment variables, and falls
//! back to the running process for anything left unset.
//!
//! [`NormalizedPath::resolve`]: crate::NormalizedPath::resolve
//! [`NormalizedPath::to_system`]: crate::NormalizedPath::to_system

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::Style;

/// Environment variable pinning the working directory.
pub const CWD_VAR: &str = "PATHOGEN_CWD";

/// Environment variable pinning the host platform.
pub const PLATFORM_VAR: &str = "PATHOGEN_PLATFORM";

/// Separator convention of a host operating system.
///
/// # Examples
///
/// ```
/// use pathogen::{Platform, Style};
///
/// assert_eq!(Platform::Windows.style(), Style::Windows);
/// assert_eq!(Platform::Posix.style(), Style::Unix);
/// assert_eq!(Platform::parse("WIN32").unwrap(), Platform::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows hosts, using `\`.
    #[serde(alias = "win32")]
    Windows,
    /// Every other host, using `/`.
    #[serde(alias = "unix")]
    Posix,
}

impl Platform {
    /// The platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The formatting style native to this platform.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Windows => Style::Windows,
            Self::Posix => Style::Unix,
        }
    }

    /// Parses a platform name.
    ///
    /// Recognizes `windows`, `win32`, `win` and `posix`, `unix`, `nix`
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win32" | "win" => Ok(Self::Windows),
            "posix" | "unix" | "nix" => Ok(Self::Posix),
            _ => Err(Error::Validation {
                field: PLATFORM_VAR.into(),
                message: format!("Invalid platform: '{s}' (expected windows or posix)"),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

/// Read-only queries about the host.
pub trait Environment {
    /// The current working directory as raw path text.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or is not
    /// representable as UTF-8 text.
    fn current_dir(&self) -> Result<String>;

    /// The host platform.
    fn platform(&self) -> Platform;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn current_dir(&self) -> Result<String> {
        (**self).current_dir()
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}

#[cfg(test)]
pub(crate) use mock::MockEnvironment;


/// The environment of the running process.
///
/// # Examples
///
/// ```no_run
/// use pathogen::{Environment, ProcessEnvironment};
///
/// let cwd = ProcessEnvironment.current_dir().unwrap();
/// assert!(!cwd.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn current_dir(&self) -> Result<String> {
        let dir = env::current_dir()?;
        log::trace!("process working directory is {}", dir.display());
        dir.into_os_string()
            .into_string()
            .map_err(|raw| Error::InvalidPath {
                path: PathBuf::from(raw),
                reason: "working directory is not valid UTF-8".to_string(),
            })
    }

    fn platform(&self) -> Platform {
        Platform::host()
    }
}

/// Pinned environment values with a fallback to the running process.
///
/// # Examples
///
/// ```
/// use pathogen::{Environment, EnvironmentConfig, Platform};
///
/// let config = EnvironmentConfig::from_yaml_str("cwd: /srv/app\nplatform: windows\n").unwrap();
/// assert_eq!(config.current_dir().unwrap(), "/srv/app");
/// assert_eq!(config.platform(), Platform::Windows);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Working directory used instead of the process's.
    #[serde(default)]
    pub cwd: Option<String>,

    /// Platform used instead of the compile-time host.
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl EnvironmentConfig {
    /// Pin the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Pin the platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Load a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build a configuration from `PATHOGEN_*` environment variables only.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// `PATHOGEN_CWD` pins the working directory; an empty value is
    /// rejected. `PATHOGEN_PLATFORM` pins the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(&mut self) -> Result<()> {
        if let Ok(cwd) = env::var(CWD_VAR) {
            if cwd.is_empty() {
                return Err(Error::Validation {
                    field: CWD_VAR.into(),
                    message: "Must not be empty".into(),
                });
            }
            log::debug!("{CWD_VAR} pins working directory to {cwd}");
            self.cwd = Some(cwd);
        }

        if let Ok(platform) = env::var(PLATFORM_VAR) {
            self.platform = Some(Platform::parse(&platform)?);
        }

        Ok(())
    }
}

impl Environment for EnvironmentConfig {
    fn current_dir(&self) -> Result<String> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => ProcessEnvironment.current_dir(),
        }
    }

    fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::host)
    }
}
