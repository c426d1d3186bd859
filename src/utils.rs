//! Utility functions
use std::{ffi::OsStr, path::Path};

use crate::errors::GiteaMigrateError;

/// Convert a path to a string, refusing non UTF-8 paths
pub(crate) fn path_to_string(path: &Path) -> Result<String, GiteaMigrateError> {
    match path.to_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(format!("Path is not valid UTF-8: {}", path.display()).into()),
    }
}

/// Convert a file name to a string, refusing non UTF-8 names
pub(crate) fn name_to_string(name: &OsStr) -> Result<String, GiteaMigrateError> {
    match name.to_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(format!("Name is not valid UTF-8: {}", name.to_string_lossy()).into()),
    }
}

/// Get password from the user
pub(crate) fn get_password() -> Result<String, GiteaMigrateError> {
    rpassword::read_password()
        .map_err(|e| GiteaMigrateError::new_with_source("Error reading password", e))
}
