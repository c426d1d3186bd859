//! Gitea API module.
pub(crate) mod client;
pub(crate) mod org;
pub(crate) mod platform;
pub(crate) mod repo;

/// Prefix of every Gitea API path
const GITEA_API_PREFIX: &str = "/api/v1";
