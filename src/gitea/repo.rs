//! Gitea repository payloads
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{errors::GiteaMigrateError, utils::path_to_string};

/// Repository as reported by Gitea
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepoResponse {
    /// Repository ID
    pub id: i64,

    /// Repository name
    pub name: String,

    /// `owner/name`
    pub full_name: String,

    /// Repository description
    pub description: String,

    /// Owner summary
    pub owner: RepoOwner,

    /// Permissions of the authenticated user
    pub permissions: RepoPermissions,

    /// HTTP clone URL
    pub clone_url: String,

    /// SSH clone URL
    pub ssh_url: String,

    /// Web URL
    pub html_url: String,

    /// Website
    pub website: String,

    /// Default branch
    pub default_branch: String,

    /// Archived repository
    pub archived: bool,

    /// Repository without any commit
    pub empty: bool,

    /// Forked repository
    pub fork: bool,

    /// Mirror repository
    pub mirror: bool,

    /// Private repository
    pub private: bool,

    /// Size in KiB
    pub size: i64,

    /// Number of forks
    pub forks_count: i64,

    /// Number of open issues
    pub open_issues_count: i64,

    /// Number of stars
    pub stars_count: i64,

    /// Number of watchers
    pub watchers_count: i64,

    /// Creation timestamp
    pub created_at: String,

    /// Last update timestamp
    pub updated_at: String,
}

/// Owner of a repository
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepoOwner {
    /// User or organization ID
    pub id: i64,

    /// Login name
    pub login: String,

    /// Display name
    pub full_name: String,

    /// Email address
    pub email: String,

    /// Avatar URL
    pub avatar_url: String,

    /// Interface language
    pub language: String,
}

/// Permissions on a repository
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepoPermissions {
    /// Administration rights
    pub admin: bool,

    /// Push rights
    pub push: bool,

    /// Pull rights
    pub pull: bool,
}

/// Body of `POST /repos/migrate`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MigrateRequest {
    /// Address the server clones from
    pub clone_addr: String,

    /// Name of the new repository
    pub repo_name: String,

    /// ID of the owning organization
    #[serde(rename = "UID")]
    pub uid: i64,
}

impl MigrateRequest {
    /// Migration of the local repository at `local_path` into the owner `uid`
    /// # Errors
    /// Error if the path is not valid UTF-8
    pub fn new(local_path: &Path, repo_name: &str, uid: i64) -> Result<Self, GiteaMigrateError> {
        Ok(Self {
            clone_addr: path_to_string(local_path)?,
            repo_name: repo_name.to_string(),
            uid,
        })
    }
}
