use std::fmt;

use crate::error::RepoError;

/// Every accepted repository URL starts with this.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Owner and name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extract owner and repository name from `https://github.com/<owner>/<repo>`.
///
/// The path must hold exactly two non-empty segments made of GitHub name
/// characters; trailing slashes, deeper paths (`/tree/main`), query strings and
/// fragments do not count as repository URLs.
pub fn parse_repo_url(url: &str) -> Result<RepoRef, RepoError> {
    let invalid = || RepoError::InvalidUrl(url.to_owned());

    let path = url.strip_prefix(GITHUB_URL_PREFIX).ok_or_else(invalid)?;

    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if is_name(owner) && is_name(repo) => {
            Ok(RepoRef::new(owner, repo))
        }
        _ => Err(invalid()),
    }
}

/// Owner and repository names only use ASCII alphanumerics, `-`, `_` and `.`.
fn is_name(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
