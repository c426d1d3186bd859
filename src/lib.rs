//! # gitea-migrate
//!
//! Migrate local bare git repositories into a Gitea instance
//!
//! The source directory is laid out as `<path>/<organization>/<repository>.git`.
//! Every repository missing from Gitea is imported with the migration API,
//! creating its organization first when needed.
//!
//! ## Usage
//!
//! ```txt
//! Usage: gitea-migrate [OPTIONS]
//!
//! Options:
//!       --debug                Dump every HTTP request and response [env: GITEA_DEBUG=]
//!       --path <PATH>          Root directory holding one directory per organization [env: GITEA_SOURCE_PATH=]
//!       --url <URL>            Base URL of the Gitea instance, ex: https://git.server.com [env: GITEA_URL=]
//!       --username <USERNAME>  Gitea username [env: GITEA_USERNAME=]
//!       --password <PASSWORD>  Gitea password [env: GITEA_PASSWORD]
//!       --ask-password         Prompt for the password when it is not set
//!       --dry-run              Only report what would be migrated
//!   -c, --config <CONFIG>      Custom configuration file path
//!       --show-config-path     Show the current config path
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod gitea;
pub(crate) mod macros;
pub(crate) mod platform;
pub(crate) mod sync;
pub(crate) mod utils;
pub(crate) mod walk;
pub(crate) use macros::required_value;

#[cfg(test)]
mod test_utils;

pub use cli::{gitea_migrate_main, GiteaMigrateCli};
pub use config::{ConfigData, GiteaMigrateConfig, Settings};
pub use errors::GiteaMigrateError;
