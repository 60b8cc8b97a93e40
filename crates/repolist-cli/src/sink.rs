use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use repolist::wordlist::write_lines;

use crate::config::Destination;

/// Write the wordlist to its destination. The file, if any, is created or
/// truncated and closed before this returns.
pub fn emit(destination: &Destination, lines: &[String]) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_lines(&mut out, lines).context("failed to write to stdout")
        }
        Destination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_lines(&mut out, lines)
                .with_context(|| format!("failed to write output file: {}", path.display()))
        }
    }
}
