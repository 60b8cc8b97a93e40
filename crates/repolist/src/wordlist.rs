use std::io::{self, Write};

use crate::entry::{EntryKind, TreeEntry};

/// Which entries end up in the wordlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    All,
    Files,
    Directories,
}

impl OutputMode {
    /// Files is checked before directories, so it wins when both are set.
    pub fn from_flags(files: bool, directories: bool) -> Self {
        if files {
            Self::Files
        } else if directories {
            Self::Directories
        } else {
            Self::All
        }
    }

    pub fn keeps(self, kind: EntryKind) -> bool {
        match self {
            Self::All => true,
            Self::Files => kind == EntryKind::File,
            Self::Directories => kind == EntryKind::Directory,
        }
    }
}

/// Text wrapped around every path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Decoration {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    /// `prefix + path + suffix`, with a missing side rendered as nothing.
    pub fn apply(&self, path: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        format!("{prefix}{path}{suffix}")
    }
}

/// Entries kept by `mode`, in their original order.
pub fn filter_entries(entries: &[TreeEntry], mode: OutputMode) -> impl Iterator<Item = &TreeEntry> {
    entries.iter().filter(move |entry| mode.keeps(entry.kind))
}

/// Filter and decorate, producing one line per kept entry.
pub fn render(entries: &[TreeEntry], mode: OutputMode, decoration: &Decoration) -> Vec<String> {
    filter_entries(entries, mode)
        .map(|entry| decoration.apply(&entry.path))
        .collect()
}

/// Write each line followed by `\n`.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
