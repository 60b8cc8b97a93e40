pub mod entry;
pub mod error;
pub mod feedback;
pub mod source;
pub mod url;
pub mod wordlist;

pub use entry::{EntryCounts, EntryKind, TreeEntry, TreeListing};
pub use error::RepoError;
pub use feedback::Feedback;
pub use source::{TreeSource, resolve_branch};
pub use url::{GITHUB_URL_PREFIX, RepoRef, parse_repo_url};
pub use wordlist::{Decoration, OutputMode};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
