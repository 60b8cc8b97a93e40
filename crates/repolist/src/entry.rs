use crate::error::RepoError;

/// Whether a tree entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Map a git object type (`blob` / `tree`) onto an entry kind.
    ///
    /// Anything else, submodule `commit` entries included, is rejected.
    pub fn from_git_type(s: &str) -> Result<Self, RepoError> {
        match s {
            "blob" => Ok(Self::File),
            "tree" => Ok(Self::Directory),
            other => Err(RepoError::UnknownEntryType(other.to_owned())),
        }
    }
}

/// One file or directory from a recursive tree listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the repository root.
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::Directory)
    }
}

/// The entries of one tree, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub entries: Vec<TreeEntry>,
    /// Set when the provider cut the listing short.
    pub truncated: bool,
}

impl TreeListing {
    pub fn counts(&self) -> EntryCounts {
        EntryCounts::of(&self.entries)
    }
}

/// Tally of entries by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub total: usize,
    pub files: usize,
    pub directories: usize,
}

impl EntryCounts {
    pub fn of(entries: &[TreeEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            acc.total += 1;
            match entry.kind {
                EntryKind::File => acc.files += 1,
                EntryKind::Directory => acc.directories += 1,
            }
            acc
        })
    }
}
