//! Gitea organization payloads
use serde::{Deserialize, Serialize};

/// Organization as reported by Gitea
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationResponse {
    /// Organization ID, used as owner of migrated repositories
    pub id: i64,

    /// Organization name
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Organization description
    pub description: String,

    /// Location
    pub location: String,

    /// Website
    pub website: String,

    /// Avatar URL
    pub avatar_url: String,
}

/// Body of `POST /orgs`
///
/// Every key is always sent, empty when not set.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRequest {
    /// Organization name
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Organization description
    pub description: String,

    /// Location
    pub location: String,

    /// Website
    pub website: String,
}

impl OrganizationRequest {
    /// Request creating the organization `name` with nothing else filled in
    pub fn named(name: &str) -> Self {
        Self {
            username: name.to_string(),
            ..Default::default()
        }
    }
}
