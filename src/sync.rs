//! Migrate repositories into the forge
use std::{fmt, path::Path};

use log::info;

use crate::{
    errors::GiteaMigrateError,
    gitea::{
        org::{OrganizationRequest, OrganizationResponse},
        repo::MigrateRequest,
    },
    platform::Forge,
};

/// What happened to one repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MigrationOutcome {
    /// The forge already has the repository
    AlreadyExists,

    /// A migration was started
    Migrated,

    /// Dry run: a migration would have been started
    Planned,
}

/// Counters for a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MigrationReport {
    /// Repositories migrated
    pub migrated: usize,

    /// Repositories already present
    pub skipped: usize,

    /// Repositories that would be migrated
    pub planned: usize,
}

impl MigrationReport {
    /// Count one outcome
    pub(crate) fn record(&mut self, outcome: MigrationOutcome) {
        match outcome {
            MigrationOutcome::AlreadyExists => self.skipped += 1,
            MigrationOutcome::Migrated => self.migrated += 1,
            MigrationOutcome::Planned => self.planned += 1,
        }
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Migrated: {}, already present: {}",
            self.migrated, self.skipped
        )?;
        if self.planned > 0 {
            write!(f, ", to migrate: {}", self.planned)?;
        }
        Ok(())
    }
}

/// Get an organization, creating it when the forge does not know it
pub(crate) async fn resolve_organization(
    forge: &dyn Forge,
    name: &str,
) -> Result<OrganizationResponse, GiteaMigrateError> {
    if let Some(org) = forge.get_org(name).await? {
        return Ok(org);
    }
    let org = forge.create_org(OrganizationRequest::named(name)).await?;
    info!("Created organization {name} (id {})", org.id);
    Ok(org)
}

/// Migrate the local repository at `local_path` as `org/name`, unless it already exists
pub(crate) async fn migrate_repository(
    forge: &dyn Forge,
    local_path: &Path,
    org: &str,
    name: &str,
    dry_run: bool,
) -> Result<MigrationOutcome, GiteaMigrateError> {
    info!("GIT repo: {}", local_path.display());
    if forge.get_repo(org, name).await?.is_some() {
        info!("Repo already exists. Owner={org} Repo={name}");
        return Ok(MigrationOutcome::AlreadyExists);
    }
    if dry_run {
        info!("Would migrate {} to {org}/{name}", local_path.display());
        return Ok(MigrationOutcome::Planned);
    }
    let owner = resolve_organization(forge, org).await?;
    let request = MigrateRequest::new(local_path, name, owner.id)?;
    let repo = forge.migrate_repo(request).await?;
    info!("Migrated {org}/{name} (id {})", repo.id);
    Ok(MigrationOutcome::Migrated)
}
