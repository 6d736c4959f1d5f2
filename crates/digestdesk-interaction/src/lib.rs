//! Network adapters for digestdesk.
//!
//! - [`GitHubClient`]: the remote store (contents API + workflow dispatch)
//! - [`HttpDigestSource`]: static digest files of the deployed site

pub mod github_client;
pub mod http_digest_source;

pub use github_client::{GITHUB_TOKEN_ENV, GitHubClient};
pub use http_digest_source::HttpDigestSource;
