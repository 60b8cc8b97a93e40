/// Errors that can occur while turning a repository into a wordlist.
///
/// Every variant is terminal for a run. The `Display` text is what the
/// user sees after the `[ERROR]` tag.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(
        "Invalid URL. Please use a valid Github repository URL. Example: https://github.com/user/repo"
    )]
    InvalidUrl(String),

    #[error(
        "Repository not found, check the URL and try again, or check if the repository is private to use the --token option."
    )]
    NotFound,

    #[error("{}", rate_limit_message(.0))]
    RateLimited(u16),

    #[error("{status}: {body}")]
    Http { status: u16, body: String },

    #[error("Error: {0}")]
    Transport(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unrecognized tree entry type: {0}")]
    UnknownEntryType(String),

    #[error("invalid proxy: {0}")]
    InvalidProxy(String),
}

impl RepoError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            404 => Self::NotFound,
            403 | 422 => Self::RateLimited(status),
            _ => Self::Http {
                status,
                body: body.into(),
            },
        }
    }
}

fn rate_limit_message(status: &u16) -> &'static str {
    match status {
        422 => "Too many requests, try again later",
        _ => "API rate limit exceeded, try again later or use a proxy with the --proxy option",
    }
}
