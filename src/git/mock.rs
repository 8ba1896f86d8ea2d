use crate::error::{ReleaseGateError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: String,
    modified: Vec<String>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a clean mock repository checked out on the given branch
    pub fn new(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: branch.into(),
            modified: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Mark a tracked file as having uncommitted modifications
    pub fn add_modified_file(&mut self, path: impl Into<String>) {
        self.modified.push(path.into());
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        if self.branch.is_empty() {
            return Err(ReleaseGateError::config("HEAD is detached"));
        }
        Ok(self.branch.clone())
    }

    fn modified_files(&self) -> Result<Vec<String>> {
        Ok(self.modified.clone())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_branch() {
        let repo = MockRepository::new("master");
        assert_eq!(repo.current_branch().unwrap(), "master");
    }

    #[test]
    fn test_mock_repository_detached_head() {
        let repo = MockRepository::new("");
        assert!(repo.current_branch().is_err());
    }

    #[test]
    fn test_mock_repository_clean_by_default() {
        let repo = MockRepository::new("master");
        assert!(repo.modified_files().unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_modified_files() {
        let mut repo = MockRepository::new("master");
        repo.add_modified_file("foo.txt");

        assert_eq!(repo.modified_files().unwrap(), vec!["foo.txt".to_string()]);
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new("master");
        let oid = Oid::from_bytes(&[2; 20]).unwrap();

        repo.add_tag("v1.0.0", oid);

        assert_eq!(repo.find_tag_oid("v1.0.0").unwrap(), Some(oid));
        assert_eq!(repo.find_tag_oid("v2.0.0").unwrap(), None);
    }

    #[test]
    fn test_mock_repository_list_tags_sorted() {
        let mut repo = MockRepository::new("master");
        let oid = Oid::from_bytes(&[1; 20]).unwrap();

        repo.add_tag("v2.0.0", oid);
        repo.add_tag("v1.0.0", oid);

        assert_eq!(
            repo.list_tags().unwrap(),
            vec!["v1.0.0".to_string(), "v2.0.0".to_string()]
        );
    }
}
