use repolist::{RepoError, RepoRef, TreeListing, TreeSource};
use serde::de::DeserializeOwned;

use crate::repo::RepoResponse;
use crate::tree::TreeResponse;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "repolist";

/// Configuration for a GitHub API client.
#[derive(Debug, Clone, Default)]
pub struct GitHubClientConfig {
    pub token: Option<String>,
    /// Proxy URL applied to both HTTP and HTTPS requests.
    pub proxy: Option<String>,
    pub api_base_url: Option<String>,
}

/// Reads repository metadata and trees from the GitHub REST API.
pub struct GitHubClient {
    config: GitHubClientConfig,
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, RepoError> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| RepoError::InvalidProxy(format!("{proxy}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| RepoError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn api_base(&self) -> &str {
        self.config
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
    }

    pub fn repo_url(&self, repo: &RepoRef) -> String {
        format!("{}/repos/{}/{}", self.api_base(), repo.owner, repo.repo)
    }

    pub fn tree_url(&self, repo: &RepoRef, branch: &str) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base(),
            repo.owner,
            repo.repo,
            branch,
        )
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    /// GET `url` and decode a JSON body, classifying any non-success status.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RepoError> {
        let response = self
            .build_request(url)
            .send()
            .await
            .map_err(|e| RepoError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".into());
            return Err(RepoError::from_status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| RepoError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl TreeSource for GitHubClient {
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, RepoError> {
        let response: RepoResponse = self.get_json(&self.repo_url(repo)).await?;
        Ok(response.default_branch)
    }

    async fn tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, RepoError> {
        let response: TreeResponse = self.get_json(&self.tree_url(repo, branch)).await?;
        TreeListing::try_from(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base_url: Option<&str>) -> GitHubClient {
        GitHubClient::new(GitHubClientConfig {
            api_base_url: api_base_url.map(str::to_owned),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_use_public_api_by_default() {
        let client = client(None);
        let repo = RepoRef::new("WordPress", "WordPress");

        assert_eq!(
            client.repo_url(&repo),
            "https://api.github.com/repos/WordPress/WordPress"
        );
        assert_eq!(
            client.tree_url(&repo, "master"),
            "https://api.github.com/repos/WordPress/WordPress/git/trees/master?recursive=1"
        );
    }

    #[test]
    fn api_base_trailing_slash_is_ignored() {
        let client = client(Some("http://localhost:9000/"));
        let repo = RepoRef::new("o", "r");
        assert_eq!(client.repo_url(&repo), "http://localhost:9000/repos/o/r");
    }

    #[test]
    fn proxy_is_accepted() {
        let result = GitHubClient::new(GitHubClientConfig {
            proxy: Some("http://127.0.0.1:8080".into()),
            ..Default::default()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_proxy_is_rejected() {
        let result = GitHubClient::new(GitHubClientConfig {
            proxy: Some("not a url".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(RepoError::InvalidProxy(_))));
    }
}
