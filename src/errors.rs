//! Error handling for the gitea-migrate crate.
use std::{error::Error as StdError, fmt};

use reqwest::StatusCode;

/// Error type for the gitea-migrate crate.
#[derive(Debug)]
pub struct GiteaMigrateError {
    /// Inner error.
    inner: Box<Inner>,
}

impl GiteaMigrateError {
    /// Create a new error.
    pub(crate) fn new(kind: GiteaMigrateErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Create a new error with a text source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Create a configuration error wrapping a source error.
    pub(crate) fn new_with_source<E>(text: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        let source: BoxError = source.into();
        Self::new(GiteaMigrateErrorKind::Config).with_text(&format!("{text}: {source}"))
    }

    /// Create an error from an unexpected HTTP status.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self::new(GiteaMigrateErrorKind::Status(status))
    }

    /// Kind of the error.
    pub(crate) fn kind(&self) -> &GiteaMigrateErrorKind {
        &self.inner.kind
    }

    /// Whether the forge answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            GiteaMigrateErrorKind::Status(StatusCode::NOT_FOUND)
        )
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gitea-migrate crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GiteaMigrateErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GiteaMigrateErrorKind {
    /// Missing or invalid configuration.
    Config,

    /// Filesystem error.
    Io,

    /// Transport error from the reqwest crate.
    Reqwest,

    /// JSON (de)serialization error.
    Serde,

    /// Configuration file parsing error.
    Toml,

    /// Invalid forge URL.
    Url,

    /// The forge answered with an unexpected status.
    Status(StatusCode),

    /// A directory under an organization does not end with `.git`.
    NotAGitRepo,
}

impl fmt::Display for GiteaMigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inner.kind, &self.inner.source) {
            (GiteaMigrateErrorKind::Status(status), _) => write!(f, "{status}"),
            (kind, Some(source)) => write!(f, "{kind:?}: {source}"),
            (kind, None) => write!(f, "{kind:?}"),
        }
    }
}

impl StdError for GiteaMigrateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for GiteaMigrateError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GiteaMigrateErrorKind::Reqwest,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<serde_json::Error> for GiteaMigrateError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GiteaMigrateErrorKind::Serde,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<std::io::Error> for GiteaMigrateError {
    fn from(e: std::io::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GiteaMigrateErrorKind::Io,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<toml::de::Error> for GiteaMigrateError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GiteaMigrateErrorKind::Toml,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<url::ParseError> for GiteaMigrateError {
    fn from(e: url::ParseError) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GiteaMigrateErrorKind::Url,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<&str> for GiteaMigrateError {
    fn from(text: &str) -> Self {
        Self::new(GiteaMigrateErrorKind::Config).with_text(text)
    }
}

impl From<String> for GiteaMigrateError {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_error_displays_status_line() {
        let err = GiteaMigrateError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
        assert!(err.is_not_found());

        let err = GiteaMigrateError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert!(!err.is_not_found());
    }

    #[test]
    fn text_error_keeps_message() {
        let err: GiteaMigrateError = "Missing url".into();
        assert_eq!(err.kind(), &GiteaMigrateErrorKind::Config);
        assert_eq!(err.to_string(), "Config: Missing url");
    }
}
