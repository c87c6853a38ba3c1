//! Common test utilities for integration tests.
//!
//! This module provides environment fixtures and guards for testing the
//! pathogen library.

use std::env;
use std::path::{Path, PathBuf};

use pathogen::{EnvironmentConfig, Flavor, Platform, Shortcuts};

/// Working directory pinned by [`fixed_env`].
#[allow(dead_code)]
pub const FIXED_CWD: &str = "/users/kamicane/projects";

/// An environment with a pinned working directory and POSIX platform.
#[allow(dead_code)]
pub fn fixed_env() -> EnvironmentConfig {
    EnvironmentConfig::default()
        .with_cwd(FIXED_CWD)
        .with_platform(Platform::Posix)
}

/// Unix-flavored shortcuts over [`fixed_env`].
#[allow(dead_code)]
pub fn nix() -> Shortcuts<EnvironmentConfig> {
    Shortcuts::with_environment(Flavor::Unix, fixed_env())
}

/// Windows-flavored shortcuts over [`fixed_env`].
#[allow(dead_code)]
pub fn win() -> Shortcuts<EnvironmentConfig> {
    Shortcuts::with_environment(Flavor::Windows, fixed_env())
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use the `#[serial]` attribute.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var (useful for cleanup).
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// RAII guard that restores the process working directory.
#[allow(dead_code)]
pub struct CwdGuard {
    previous: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    pub fn enter(dir: &Path) -> std::io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { previous })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
