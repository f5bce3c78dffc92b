//! Error types for the site runtime.
//!
//! Only booting can fail. Event handlers degrade to no-ops instead of
//! returning errors.

use simpli_i18n::I18nError;

/// Errors from booting the site or talking to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// The host DOM rejected an operation (element creation, insertion).
    Dom(String),
    /// The preference store could not be written.
    Storage(String),
    /// The translation table is malformed.
    Catalog(I18nError),
}

impl std::fmt::Display for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
            Self::Storage(msg) => write!(f, "storage error: {msg}"),
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<I18nError> for SiteError {
    fn from(err: I18nError) -> Self {
        Self::Catalog(err)
    }
}
