//! Gitea platform implementation
use urlencoding::encode;

use super::{
    client::GiteaClient,
    org::{OrganizationRequest, OrganizationResponse},
    repo::{MigrateRequest, RepoResponse},
    GITEA_API_PREFIX,
};
use crate::{
    config::Settings,
    errors::GiteaMigrateError,
    platform::{Forge, ForgeFuture},
};

/// Gitea platform
#[derive(Debug, Clone)]
pub struct GiteaPlatform {
    /// HTTP client
    client: GiteaClient,
}

impl GiteaPlatform {
    /// Create a new Gitea platform from the run settings
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            client: GiteaClient::new(
                &settings.base_url,
                settings.username.clone(),
                settings.password.clone(),
                settings.debug,
            ),
        }
    }
}

/// Map `404 Not Found` to `None`
fn found<T>(result: Result<T, GiteaMigrateError>) -> Result<Option<T>, GiteaMigrateError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl Forge for GiteaPlatform {
    fn get_repo(&self, owner: &str, name: &str) -> ForgeFuture<'_, Option<RepoResponse>> {
        let path = format!(
            "{GITEA_API_PREFIX}/repos/{}/{}",
            encode(owner),
            encode(name)
        );
        Box::pin(async move { found(self.client.get(&path).await) })
    }

    fn get_org(&self, name: &str) -> ForgeFuture<'_, Option<OrganizationResponse>> {
        let path = format!("{GITEA_API_PREFIX}/orgs/{}", encode(name));
        Box::pin(async move { found(self.client.get(&path).await) })
    }

    fn create_org(&self, request: OrganizationRequest) -> ForgeFuture<'_, OrganizationResponse> {
        Box::pin(async move {
            self.client
                .post(&format!("{GITEA_API_PREFIX}/orgs"), &request)
                .await
        })
    }

    fn migrate_repo(&self, request: MigrateRequest) -> ForgeFuture<'_, RepoResponse> {
        Box::pin(async move {
            self.client
                .post(&format!("{GITEA_API_PREFIX}/repos/migrate"), &request)
                .await
        })
    }

    fn get_remote_url(&self) -> &str {
        self.client.base_url()
    }
}
