#![forbid(unsafe_code)]

//! Internationalization catalog for the Simpli site.
//!
//! Provides key-based lookup of shared UI strings (`nav.home`,
//! `footer.tagline`, ...) per locale, plus a coverage report used to
//! check that every key exists in every supported locale.

pub mod catalog;
pub mod locale;

pub use catalog::{CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog};
pub use locale::{DEFAULT_LOCALE, EN, ES, Locale, SUPPORTED_LOCALES};
