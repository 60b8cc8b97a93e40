pub mod client;
pub mod repo;
pub mod tree;

pub use client::{DEFAULT_API_BASE, GitHubClient, GitHubClientConfig};
