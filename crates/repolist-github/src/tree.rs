use repolist::{EntryKind, RepoError, TreeEntry, TreeListing};
use serde::Deserialize;

/// Response from GitHub's Git Trees API.
/// `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<RawTreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// A single entry in the tree, before its type is checked.
#[derive(Debug, Deserialize)]
pub struct RawTreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl TryFrom<RawTreeEntry> for TreeEntry {
    type Error = RepoError;

    fn try_from(raw: RawTreeEntry) -> Result<Self, Self::Error> {
        let kind = EntryKind::from_git_type(&raw.entry_type)?;
        Ok(TreeEntry::new(raw.path, kind))
    }
}

impl TryFrom<TreeResponse> for TreeListing {
    type Error = RepoError;

    fn try_from(response: TreeResponse) -> Result<Self, Self::Error> {
        let entries = response
            .tree
            .into_iter()
            .map(TreeEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TreeListing {
            entries,
            truncated: response.truncated,
        })
    }
}
