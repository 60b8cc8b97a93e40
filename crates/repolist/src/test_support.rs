use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{RepoError, RepoRef, TreeEntry, TreeListing, TreeSource};

/// In-memory tree source for testing. Holds one listing per branch.
pub struct InMemoryTreeSource {
    default_branch: Option<String>,
    branches: HashMap<String, TreeListing>,
    default_branch_calls: AtomicUsize,
}

impl InMemoryTreeSource {
    pub fn new(default_branch: impl Into<String>) -> Self {
        Self {
            default_branch: Some(default_branch.into()),
            branches: HashMap::new(),
            default_branch_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose repository does not exist.
    pub fn missing() -> Self {
        Self {
            default_branch: None,
            branches: HashMap::new(),
            default_branch_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>, entries: Vec<TreeEntry>) -> Self {
        self.branches.insert(
            branch.into(),
            TreeListing {
                entries,
                truncated: false,
            },
        );
        self
    }

    pub fn with_listing(mut self, branch: impl Into<String>, listing: TreeListing) -> Self {
        self.branches.insert(branch.into(), listing);
        self
    }

    /// How many times the default branch was asked for.
    pub fn default_branch_calls(&self) -> usize {
        self.default_branch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TreeSource for InMemoryTreeSource {
    async fn default_branch(&self, _repo: &RepoRef) -> Result<String, RepoError> {
        self.default_branch_calls.fetch_add(1, Ordering::SeqCst);
        self.default_branch.clone().ok_or(RepoError::NotFound)
    }

    async fn tree(&self, _repo: &RepoRef, branch: &str) -> Result<TreeListing, RepoError> {
        if self.default_branch.is_none() {
            return Err(RepoError::NotFound);
        }
        self.branches
            .get(branch)
            .cloned()
            .ok_or_else(|| RepoError::from_status(404, format!("no branch {branch}")))
    }
}
