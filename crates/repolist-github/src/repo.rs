use serde::Deserialize;

/// Response from GitHub's repository metadata API.
/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub default_branch: String,
}
