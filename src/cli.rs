//! Command line options for the gitea-migrate tool
use crate::{
    config::GiteaMigrateConfig, errors::GiteaMigrateError, gitea::platform::GiteaPlatform,
    platform::Forge, walk::walk_root,
};
use clap::{builder::BoolishValueParser, Parser};
use log::info;
use std::path::PathBuf;

/// gitea-migrate - Migrate local bare git repositories into Gitea
#[derive(Parser, Default, Clone, Debug)]
#[command(version, about)]
pub struct GiteaMigrateCli {
    /// Dump every HTTP request and response
    #[arg(long, env = "GITEA_DEBUG", value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Root directory holding one directory per organization
    #[arg(long, env = "GITEA_SOURCE_PATH")]
    pub path: Option<PathBuf>,

    /// Base URL of the Gitea instance, ex: https://git.server.com
    #[arg(long, env = "GITEA_URL")]
    pub url: Option<String>,

    /// Gitea username
    #[arg(long, env = "GITEA_USERNAME")]
    pub username: Option<String>,

    /// Gitea password
    #[arg(long, env = "GITEA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Prompt for the password when it is not set
    #[arg(long)]
    pub ask_password: bool,

    /// Only report what would be migrated
    #[arg(long)]
    pub dry_run: bool,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,
}

/// Run the gitea-migrate tool with the provided command line options
/// # Errors
/// Error if the configuration is invalid or any migration step fails
pub async fn gitea_migrate_main(args: GiteaMigrateCli) -> Result<(), GiteaMigrateError> {
    let config = GiteaMigrateConfig::try_new(args)?;
    if config.cli_args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    let settings = config.settings()?;
    let platform = GiteaPlatform::new(&settings);
    info!(
        "Migrating repositories from {} to {}",
        settings.source_path.display(),
        platform.get_remote_url()
    );
    if settings.dry_run {
        info!("Dry run: nothing will be created");
    }
    let report = walk_root(&platform, &settings.source_path, settings.dry_run).await?;
    info!("{report}");
    Ok(())
}
