#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathogen
//!
//! A pure, platform-agnostic path algebra.
//!
//! This library parses textual paths into a normalized structural form and
//! supports composing (resolve/join), decomposing (dirname/basename/extname)
//! and relativizing them, then formatting them back with POSIX (`/`) or
//! Windows (`\`) separators and an optional volume prefix (`c:`).
//!
//! Nothing here touches the filesystem. The working directory and the host
//! platform are the only environmental inputs and are supplied through the
//! [`Environment`] trait.
//!
//! ## Core Types
//!
//! - [`NormalizedPath`]: the immutable path value, with [`Anchor`] and [`Volume`]
//! - [`Style`]: separator convention used when formatting
//! - [`Environment`], [`ProcessEnvironment`] and [`EnvironmentConfig`]: host queries
//! - [`Shortcuts`] and [`Flavor`]: string-in, string-out function sets
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathogen::{EnvironmentConfig, NormalizedPath};
//!
//! let path = NormalizedPath::new("../.././////////some/path");
//! assert_eq!(path.to_unix(), "../../some/path");
//!
//! let env = EnvironmentConfig::default().with_cwd("/home/user");
//! let resolved = NormalizedPath::new("abc/def/ghi").resolve(&["/abc"], &env).unwrap();
//! assert_eq!(resolved.to_unix(), "/abc");
//!
//! let windows = NormalizedPath::new("c:\\windows\\\\system32\\.\\\\\\drivers");
//! assert_eq!(windows.to_windows(), "c:\\windows\\system32\\drivers");
//! ```

pub mod environment;
pub mod error;
pub mod path;
pub mod shortcuts;

// Re-export key types at crate root for convenience
pub use environment::{Environment, EnvironmentConfig, Platform, ProcessEnvironment};
pub use error::{Error, Result};
pub use path::{Anchor, NormalizedPath, Style, Volume};
pub use shortcuts::{system, unix, windows, Flavor, Shortcuts};
