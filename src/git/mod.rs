//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations the release gate needs, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Gate logic should depend on the [Repository] trait rather than concrete
//! implementations so the precondition checks stay testable without a real
//! repository on disk.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// All methods are read-only with respect to the repository; the gate's only
/// side effect (tag creation) goes through the external helper, never through
/// this trait.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ReleaseGateError] variants.
pub trait Repository: Send + Sync {
    /// Get the name of the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - Short branch name (e.g., "master")
    /// * `Err` - If HEAD is detached or unreadable
    fn current_branch(&self) -> Result<String>;

    /// List tracked files with uncommitted modifications
    ///
    /// Covers both staged and unstaged changes to tracked files. Untracked
    /// and ignored files are not reported.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Repo-relative paths of modified files; empty
    ///   when the working tree is clean
    fn modified_files(&self) -> Result<Vec<String>>;

    /// Find a tag by name and get its OID
    ///
    /// Handles both lightweight and annotated tags.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag (e.g., "v1.0.0")
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Object ID of the tag if it exists
    /// * `Ok(None)` - If the tag doesn't exist
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Get all tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;
}
