mod cli;
mod config;
mod console;
mod run;
mod sink;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use repolist_github::GitHubClient;

use crate::cli::Cli;
use crate::config::{Environment, RunConfig};
use crate::console::Console;

async fn run_cli(url: String, cli: Cli, console: &Console) -> Result<()> {
    let (file_config, warning) = config::load_config();
    if let Some(warning) = warning {
        console.report(&warning);
    }

    let config = RunConfig::resolve(url, cli, file_config, Environment::from_process())?;
    let client = GitHubClient::new(config.client_config())?;

    run::run(&config, &client, &Console::new(config.verbose)).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(url) = cli.url.clone() else {
        println!("{}", Cli::command().render_help());
        return ExitCode::from(1);
    };

    let console = Console::new(cli.verbose);

    match run_cli(url, cli, &console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(format!("{e:#}"));
            ExitCode::from(1)
        }
    }
}
