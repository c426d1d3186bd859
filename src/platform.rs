//! Forge abstraction used by the migration logic
use std::{future::Future, pin::Pin};

use crate::{
    errors::GiteaMigrateError,
    gitea::{
        org::{OrganizationRequest, OrganizationResponse},
        repo::{MigrateRequest, RepoResponse},
    },
};

/// Future returned by every forge call
pub(crate) type ForgeFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, GiteaMigrateError>> + Send + 'a>>;

/// The forge calls needed to migrate repositories
pub(crate) trait Forge: Sync + Send {
    /// Look up a repository, `None` when the forge does not know it
    fn get_repo(&self, owner: &str, name: &str) -> ForgeFuture<'_, Option<RepoResponse>>;

    /// Look up an organization, `None` when the forge does not know it
    fn get_org(&self, name: &str) -> ForgeFuture<'_, Option<OrganizationResponse>>;

    /// Create an organization
    fn create_org(&self, request: OrganizationRequest) -> ForgeFuture<'_, OrganizationResponse>;

    /// Ask the forge to import a repository
    fn migrate_repo(&self, request: MigrateRequest) -> ForgeFuture<'_, RepoResponse>;

    /// URL of the forge, for display
    fn get_remote_url(&self) -> &str;
}
