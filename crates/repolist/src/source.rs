use std::sync::Arc;

use crate::entry::TreeListing;
use crate::error::RepoError;
use crate::url::RepoRef;

/// A provider that can describe a repository's file tree.
///
/// The GitHub client is the production implementation; tests use the
/// in-memory one from `test_support`.
#[async_trait::async_trait]
pub trait TreeSource: Send + Sync {
    /// Name of the repository's default branch.
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, RepoError>;

    /// Full recursive listing of `branch`, in provider order.
    async fn tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, RepoError>;
}

#[async_trait::async_trait]
impl<T: TreeSource + ?Sized> TreeSource for Arc<T> {
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, RepoError> {
        (**self).default_branch(repo).await
    }

    async fn tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, RepoError> {
        (**self).tree(repo, branch).await
    }
}

/// Use `explicit` when given, otherwise ask the source for the default branch.
///
/// An explicit branch is not checked against the provider.
pub async fn resolve_branch(
    source: &dyn TreeSource,
    repo: &RepoRef,
    explicit: Option<&str>,
) -> Result<String, RepoError> {
    match explicit {
        Some(branch) => Ok(branch.to_owned()),
        None => source.default_branch(repo).await,
    }
}
