use crate::error::{ReleaseGateError, Result};
use git2::{Oid, Repository as Git2Repo, StatusOptions};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if !head.is_branch() {
            return Err(ReleaseGateError::config(
                "HEAD is detached; checkout a branch before generating a release",
            ));
        }

        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| ReleaseGateError::config("Branch name is not valid UTF-8"))
    }

    fn modified_files(&self) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(false)
            .include_ignored(false)
            .include_unmodified(false);

        let statuses = self.repo.statuses(Some(&mut options))?;

        let uncommitted = git2::Status::WT_MODIFIED
            | git2::Status::WT_DELETED
            | git2::Status::WT_TYPECHANGE
            | git2::Status::WT_RENAMED
            | git2::Status::INDEX_NEW
            | git2::Status::INDEX_MODIFIED
            | git2::Status::INDEX_DELETED
            | git2::Status::INDEX_TYPECHANGE
            | git2::Status::INDEX_RENAMED;

        let mut files: Vec<String> = statuses
            .iter()
            .filter(|entry| entry.status().intersects(uncommitted))
            .filter_map(|entry| entry.path().map(|p| p.to_string()))
            .collect();

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        match self.repo.refname_to_id(&format!("refs/tags/{}", tag_name)) {
            Ok(oid) => Ok(Some(oid)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ReleaseGateError::tag(format!(
                "Cannot look up tag '{}': {}",
                tag_name, e
            ))),
        }
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
