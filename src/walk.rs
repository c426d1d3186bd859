//! Walk the `<root>/<org>/<repo>.git` tree
use std::{fs::read_dir, path::Path};

use log::info;

use crate::{
    errors::{GiteaMigrateError, GiteaMigrateErrorKind},
    platform::Forge,
    sync::{migrate_repository, MigrationReport},
    utils::name_to_string,
};

/// Suffix every repository directory must carry
const GIT_SUFFIX: &str = ".git";

/// Repository name of a `<name>.git` directory
pub(crate) fn repo_name_from_dir(dir_name: &str) -> Option<&str> {
    dir_name
        .strip_suffix(GIT_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Migrate every repository found under `root`, one organization at a time
///
/// Stops at the first error; what was done before stays done.
pub(crate) async fn walk_root(
    forge: &dyn Forge,
    root: &Path,
    dry_run: bool,
) -> Result<MigrationReport, GiteaMigrateError> {
    let mut report = MigrationReport::default();
    for entry in read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let org = name_to_string(&entry.file_name())?;
        walk_org(forge, &entry.path(), &org, dry_run, &mut report).await?;
    }
    Ok(report)
}

/// Migrate every repository directory of one organization
async fn walk_org(
    forge: &dyn Forge,
    org_path: &Path,
    org: &str,
    dry_run: bool,
    report: &mut MigrationReport,
) -> Result<(), GiteaMigrateError> {
    info!("ORG: {}", org_path.display());
    for entry in read_dir(org_path)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let repo_path = entry.path();
        let dir_name = name_to_string(&entry.file_name())?;
        let Some(name) = repo_name_from_dir(&dir_name) else {
            return Err(GiteaMigrateError::new(GiteaMigrateErrorKind::NotAGitRepo)
                .with_text(&format!("Not a git repo: {}", repo_path.display())));
        };
        let outcome = migrate_repository(forge, &repo_path, org, name, dry_run).await?;
        report.record(outcome);
    }
    Ok(())
}
