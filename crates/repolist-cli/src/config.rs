use std::path::PathBuf;

use repolist::{Decoration, Feedback, OutputMode, RepoError, RepoRef, parse_repo_url};
use repolist_github::GitHubClientConfig;
use serde::Deserialize;

use crate::cli::Cli;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "REPOLIST_API_URL";
pub const CONFIG_ENV: &str = "REPOLIST_CONFIG";

/// Optional settings file. Every key can also come from flags or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub token: Option<String>,
    pub proxy: Option<String>,
    pub api_base_url: Option<String>,
}

/// Config file path: `$REPOLIST_CONFIG` if set, else `~/.config/repolist/config.toml`
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env_var(CONFIG_ENV))
}

fn config_path_from(explicit: Option<String>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|d| d.join("repolist").join("config.toml")),
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the config file, falling back to defaults if it is missing.
/// A file that exists but does not parse yields a warning alongside the defaults.
pub fn load_config() -> (AppConfig, Option<Feedback>) {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        return match parse_config(&contents) {
            Ok(config) => (config, None),
            Err(e) => (
                AppConfig::default(),
                Some(Feedback::warning(format!(
                    "failed to parse config at {}, using defaults: {e}",
                    path.display()
                ))),
            ),
        };
    }

    (AppConfig::default(), None)
}

/// Environment variables that feed into the run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub github_token: Option<String>,
    pub api_base_url: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            github_token: env_var(TOKEN_ENV),
            api_base_url: env_var(API_URL_ENV),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Where the wordlist goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything a run needs, resolved once before any request is made.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub repo: RepoRef,
    pub branch: Option<String>,
    pub token: Option<String>,
    pub proxy: Option<String>,
    pub api_base_url: Option<String>,
    pub decoration: Decoration,
    pub mode: OutputMode,
    pub destination: Destination,
    pub verbose: bool,
}

impl RunConfig {
    /// Merge flags over environment over config file, and parse the URL.
    pub fn resolve(
        url: String,
        cli: Cli,
        file: AppConfig,
        env: Environment,
    ) -> Result<Self, RepoError> {
        let repo = parse_repo_url(&url)?;

        Ok(Self {
            url,
            repo,
            branch: cli.branch,
            token: cli.token.or(env.github_token).or(file.token),
            proxy: cli.proxy.or(file.proxy),
            api_base_url: env.api_base_url.or(file.api_base_url),
            decoration: Decoration::new(cli.prefix, cli.suffix),
            mode: OutputMode::from_flags(cli.files, cli.directories),
            destination: cli
                .output
                .map(Destination::File)
                .unwrap_or(Destination::Stdout),
            verbose: cli.verbose,
        })
    }

    pub fn client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            token: self.token.clone(),
            proxy: self.proxy.clone(),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://github.com/WordPress/WordPress";

    fn resolve(cli: Cli, file: AppConfig, env: Environment) -> RunConfig {
        RunConfig::resolve(URL.into(), cli, file, env).unwrap()
    }

    #[test]
    fn parse_full_config_from_toml() {
        let toml_str = r#"
token = "file-token"
proxy = "http://proxy:3128"
api_base_url = "https://github.example.com/api/v3"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy:3128"));
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
    }

    #[test]
    fn explicit_config_path_wins() {
        assert_eq!(
            config_path_from(Some("/tmp/repolist.toml".into())),
            Some(PathBuf::from("/tmp/repolist.toml"))
        );
    }

    #[test]
    fn default_config_path_is_under_config_dir() {
        if let Some(path) = config_path_from(None) {
            assert!(path.ends_with("repolist/config.toml"));
        }
    }

    #[test]
    fn verbose_flag_is_carried() {
        let cli = Cli {
            verbose: true,
            ..Default::default()
        };
        let config = resolve(cli, AppConfig::default(), Environment::default());
        assert!(config.verbose);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("tokn = \"typo\"").is_err());
    }

    #[test]
    fn url_is_parsed_into_owner_and_repo() {
        let config = resolve(Cli::default(), AppConfig::default(), Environment::default());
        assert_eq!(config.repo, RepoRef::new("WordPress", "WordPress"));
        assert_eq!(config.url, URL);
    }

    #[test]
    fn invalid_url_fails_resolution() {
        let err = RunConfig::resolve(
            "https://example.com".into(),
            Cli::default(),
            AppConfig::default(),
            Environment::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RepoError::InvalidUrl(_)));
    }

    #[test]
    fn token_flag_beats_env_beats_file() {
        let file = AppConfig {
            token: Some("file".into()),
            ..Default::default()
        };
        let env = Environment {
            github_token: Some("env".into()),
            api_base_url: None,
        };

        let flagged = Cli {
            token: Some("flag".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(flagged, file.clone(), env.clone()).token.as_deref(),
            Some("flag")
        );
        assert_eq!(
            resolve(Cli::default(), file.clone(), env).token.as_deref(),
            Some("env")
        );
        assert_eq!(
            resolve(Cli::default(), file, Environment::default())
                .token
                .as_deref(),
            Some("file")
        );
    }

    #[test]
    fn proxy_flag_beats_file() {
        let file = AppConfig {
            proxy: Some("http://file:1".into()),
            ..Default::default()
        };
        let cli = Cli {
            proxy: Some("http://flag:2".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(cli, file.clone(), Environment::default()).proxy.as_deref(),
            Some("http://flag:2")
        );
        assert_eq!(
            resolve(Cli::default(), file, Environment::default())
                .proxy
                .as_deref(),
            Some("http://file:1")
        );
    }

    #[test]
    fn api_base_env_beats_file() {
        let file = AppConfig {
            api_base_url: Some("http://file".into()),
            ..Default::default()
        };
        let env = Environment {
            github_token: None,
            api_base_url: Some("http://env".into()),
        };
        let config = resolve(Cli::default(), file, env);
        assert_eq!(config.client_config().api_base_url.as_deref(), Some("http://env"));
    }

    #[test]
    fn output_flag_selects_file_destination() {
        let cli = Cli {
            output: Some(PathBuf::from("words.txt")),
            ..Default::default()
        };
        let config = resolve(cli, AppConfig::default(), Environment::default());
        assert_eq!(config.destination, Destination::File(PathBuf::from("words.txt")));
        assert_eq!(config.destination.to_string(), "words.txt");
    }

    #[test]
    fn defaults_are_stdout_and_all_entries() {
        let config = resolve(Cli::default(), AppConfig::default(), Environment::default());
        assert_eq!(config.destination, Destination::Stdout);
        assert_eq!(config.mode, OutputMode::All);
        assert_eq!(config.decoration, Decoration::default());
        assert!(config.branch.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn both_filters_resolve_to_files() {
        let cli = Cli {
            files: true,
            directories: true,
            ..Default::default()
        };
        let config = resolve(cli, AppConfig::default(), Environment::default());
        assert_eq!(config.mode, OutputMode::Files);
    }
}
