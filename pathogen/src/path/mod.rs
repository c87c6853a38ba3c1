//! Platform-agnostic path algebra.
//!
//! This module parses path text into a structural [`NormalizedPath`] and
//! provides composition, decomposition, relativization and formatting.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts path text to a canonical form by:
//! - Splitting off a volume label (`c:`), which also roots the path
//! - Accepting both `/` and `\` as separators and collapsing runs of them
//! - Resolving `.` and `..` components; `..` above the root is discarded,
//!   `..` above the start of a relative path is kept
//! - Preserving a trailing separator
//!
//! Relative paths always render with an explicit leading `.` unless they
//! start with `..`.
//!
//! ## Resolution
//!
//! [`NormalizedPath::resolve`] grounds a list of paths on the rightmost
//! absolute one, or on the working directory supplied by an
//! [`Environment`](crate::Environment) when none is absolute.
//!
//! ## Relativization
//!
//! [`NormalizedPath::relative`] walks from the origin, taken as a directory,
//! to the destination. Paths on different volumes have no relative form; the
//! absolute destination is returned instead.
//!
//! # Examples
//!
//! ```
//! use pathogen::{EnvironmentConfig, NormalizedPath};
//!
//! let env = EnvironmentConfig::default().with_cwd("/home/user");
//!
//! let path = NormalizedPath::new("projects/./app/../lib/");
//! assert_eq!(path.to_unix(), "./projects/lib/");
//! assert_eq!(path.resolve::<&str, _>(&[], &env).unwrap().to_unix(), "/home/user/projects/lib/");
//!
//! let from = NormalizedPath::new("/home/user/projects");
//! assert_eq!(from.relative("/home/user/docs", &env).unwrap().to_unix(), "../docs");
//! ```

mod format;
pub mod normalize;
mod relative;
pub(crate) mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use format::Style;
pub use types::{Anchor, NormalizedPath, Volume};
