//! Version source abstraction layer
//!
//! The picker never defines where the existing version list comes from; it
//! consumes a snapshot produced by a [VersionSource]. Concrete
//! implementations:
//!
//! - [git::GitVersionSource]: tags of a git repository via the `git2` crate
//! - [file::FileVersionSource]: a newline-separated list file, for lists
//!   exported from a changelog backend
//! - [mock::MockVersionSource]: an in-memory implementation for testing
//!
//! Most code should depend on the trait rather than a concrete source. A
//! fetch failure at the application boundary degrades to an empty list with
//! a warning, never a hard error.

pub mod file;
pub mod git;
pub mod mock;

pub use file::FileVersionSource;
pub use git::GitVersionSource;
pub use mock::MockVersionSource;

use crate::error::Result;

/// Supplier of the versions a project already uses.
///
/// The picker is single-threaded; implementations only need to be movable
/// across threads, not shared.
pub trait VersionSource: Send {
    /// Short human-readable description used in warnings (e.g., "git tags").
    fn describe(&self) -> String;

    /// Fetch the existing version list, newest first.
    ///
    /// The first element is treated as the latest version. The returned list
    /// becomes an immutable snapshot; refresh replaces it wholesale.
    fn fetch_versions(&self) -> Result<Vec<String>>;
}
