use std::path::PathBuf;

use clap::Parser;

const BANNER: &str = concat!(
    r"    ____                   __    _      __
   / __ \___  ____  ____  / /   (_)____/ /_
  / /_/ / _ \/ __ \/ __ \/ /   / / ___/ __/
 / _, _/  __/ /_/ / /_/ / /___/ (__  ) /_
/_/ |_|\___/ .___/\____/_____/_/____/\__/
          /_/ v",
    env!("CARGO_PKG_VERSION"),
);

const EXAMPLES: &str = "\
Examples:
  repolist -u \"https://github.com/PrestaShop/PrestaShop\"
  repolist -u \"https://github.com/WordPress/WordPress\" -o \"wp_wordlist.txt\"
  repolist -u \"https://github.com/laravel/laravel\" --files
  repolist -u \"https://github.com/username/private_repo\" --token \"your_token_here\"";

#[derive(Parser, Debug, Default)]
#[command(name = "repolist", version)]
#[command(about = "Generate wordlists from Github repositories")]
#[command(before_help = BANNER, after_help = EXAMPLES)]
pub struct Cli {
    /// Github repository URL (required)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use a specific branch instead of the repository default
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Github token (falls back to $GITHUB_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Text prepended to every path
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Text appended to every path
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Only list files
    #[arg(short, long)]
    pub files: bool,

    /// Only list directories (ignored together with --files)
    #[arg(short, long)]
    pub directories: bool,

    /// Print progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// HTTP/HTTPS proxy for all requests
    #[arg(long)]
    pub proxy: Option<String>,
}
