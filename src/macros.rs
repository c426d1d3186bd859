//! This module contains the macros used in the project.

/// Take a required setting from the CLI arguments, falling back to the config file
macro_rules! required_value {
    ($config:expr, $key_name:ident, $string:expr) => {
        match $crate::config::present(&$config.cli_args.$key_name)
            .or_else(|| $crate::config::present(&$config.config_data.$key_name))
        {
            Some(value) => Ok(value.clone()),
            None => Err($crate::errors::GiteaMigrateError::from(concat!(
                "Missing ", $string
            ))),
        }
    };
}

pub(crate) use required_value;
