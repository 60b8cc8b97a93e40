use anyhow::Result;
use repolist::wordlist::render;
use repolist::{RepoError, TreeSource, resolve_branch};

use crate::config::{Destination, RunConfig};
use crate::console::Console;
use crate::sink;

/// Resolve the branch, fetch the tree and turn it into decorated lines.
pub async fn build_wordlist(
    config: &RunConfig,
    source: &dyn TreeSource,
    console: &Console,
) -> Result<Vec<String>, RepoError> {
    console.info("Starting repolist...");
    console.info(format!("Repository URL: {}", config.url));
    console.info(format!("Output file: {}", config.destination));
    console.info(format!("Username: {}", config.repo.owner));
    console.info(format!("Repository: {}", config.repo.repo));

    let branch = resolve_branch(source, &config.repo, config.branch.as_deref()).await?;
    console.info(format!("Branch: {branch}"));

    let listing = source.tree(&config.repo, &branch).await?;
    if listing.truncated {
        console.report(&repolist::Feedback::warning(format!(
            "tree for {}@{branch} was truncated by the API; the wordlist may be incomplete",
            config.repo
        )));
    }

    let counts = listing.counts();
    console.info(format!("Number of lines: {}", counts.total));
    console.info(format!("Number of files: {}", counts.files));
    console.info(format!("Number of directories: {}", counts.directories));

    Ok(render(&listing.entries, config.mode, &config.decoration))
}

/// Run the whole pipeline and write the result.
pub async fn run(config: &RunConfig, source: &dyn TreeSource, console: &Console) -> Result<()> {
    let lines = build_wordlist(config, source, console).await?;

    sink::emit(&config.destination, &lines)?;

    if let Destination::File(path) = &config.destination {
        console.info(format!("Output saved to {}", path.display()));
    }

    Ok(())
}
