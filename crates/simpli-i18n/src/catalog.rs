//! String catalog keyed by dotted paths.
//!
//! # Invariants
//!
//! 1. **No fallback**: a lookup consults exactly the requested locale. An
//!    unknown locale or key yields `None`, never another locale's text.
//!
//! 2. **Keys are dotted paths**: every key has the shape `namespace.key`
//!    with non-empty segments. Namespace-only paths (`"nav"`) never resolve.
//!
//! 3. **Immutable after construction**: the site builds its catalog once at
//!    boot; `StringCatalog` is `Send + Sync`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in the locale | Returns `None` |
//! | Missing locale | Locale not loaded | Returns `None` |
//! | Malformed key | Not `namespace.key` | `insert` returns `InvalidKey` |
//! | Duplicate key | Same key twice in one locale | `insert` returns `DuplicateKey` |

use std::collections::HashMap;

use crate::locale::Locale;

/// Errors from catalog construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale string was empty or not lowercase ASCII letters/dashes.
    InvalidLocale(String),
    /// A key was not a dotted `namespace.key` path.
    InvalidKey(String),
    /// Duplicate key in the same locale.
    DuplicateKey { locale: String, key: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l:?}"),
            Self::InvalidKey(k) => write!(f, "invalid key: {k:?} (expected namespace.key)"),
            Self::DuplicateKey { locale, key } => {
                write!(f, "duplicate key '{key}' in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Shared UI strings for every locale the site ships.
///
/// # Example
///
/// ```
/// use simpli_i18n::StringCatalog;
///
/// let mut catalog = StringCatalog::new();
/// catalog.insert("es", "nav.home", "Inicio").unwrap();
/// catalog.insert("en", "nav.home", "Home").unwrap();
///
/// assert_eq!(catalog.get("en", "nav.home"), Some("Home"));
/// assert_eq!(catalog.get("fr", "nav.home"), None);
/// assert_eq!(catalog.get("en", "nav"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from rows of `(key, [(locale, text), ...])`.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = (&'a str, &'a [(&'a str, &'a str)])>,
    {
        let mut catalog = Self::new();
        for (key, texts) in rows {
            for &(locale, text) in texts {
                catalog.insert(locale, key, text)?;
            }
        }
        Ok(catalog)
    }

    /// Insert one string, validating the locale tag and key shape.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        let key = key.into();
        if !is_valid_locale(&locale) {
            return Err(I18nError::InvalidLocale(locale));
        }
        if !is_dotted_key(&key) {
            return Err(I18nError::InvalidKey(key));
        }
        let strings = self.locales.entry(locale.clone()).or_default();
        if strings.strings.contains_key(&key) {
            return Err(I18nError::DuplicateKey { locale, key });
        }
        strings.strings.insert(key, value.into());
        Ok(())
    }

    /// Look up `key` in exactly `locale`.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales.get(locale).and_then(|ls| ls.get(key))
    }

    /// Strings registered for `locale`, if any.
    #[must_use]
    pub fn locale(&self, locale: &str) -> Option<&LocaleStrings> {
        self.locales.get(locale)
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    // -----------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------

    /// Collect all unique keys across every registered locale, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` that `locale` does not provide, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(locale, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Coverage of each locale in `locales` against the union of all keys.
    ///
    /// Pass the supported locale set so that a locale with no strings at
    /// all still shows up as 0% covered.
    #[must_use]
    pub fn coverage_report(&self, locales: &[&str]) -> CoverageReport {
        let all = self.all_keys();
        let ref_keys: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = ref_keys.len();

        let locales = locales
            .iter()
            .map(|&tag| {
                let missing = self.missing_keys(tag, &ref_keys);
                let present = total.saturating_sub(missing.len());
                LocaleCoverage {
                    locale: tag.to_string(),
                    present,
                    missing,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage report for a string catalog.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Total number of unique keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage data, in the order requested.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Whether every requested locale provides every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// Locale tag.
    pub locale: String,
    /// Number of reference keys present.
    pub present: usize,
    /// Reference keys the locale lacks.
    pub missing: Vec<String>,
}

fn is_valid_locale(tag: &str) -> bool {
    !tag.is_empty()
        && !tag.starts_with('-')
        && tag.chars().all(|c| c.is_ascii_lowercase() || c == '-')
}

fn is_dotted_key(key: &str) -> bool {
    key.contains('.') && key.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav_catalog() -> StringCatalog {
        StringCatalog::from_rows([
            ("nav.home", &[("es", "Inicio"), ("en", "Home")][..]),
            ("nav.contact", &[("es", "Contacto"), ("en", "Contact")][..]),
        ])
        .unwrap()
    }

    #[test]
    fn simple_lookup() {
        let catalog = nav_catalog();
        assert_eq!(catalog.get("es", "nav.home"), Some("Inicio"));
        assert_eq!(catalog.get("en", "nav.contact"), Some("Contact"));
    }

    #[test]
    fn missing_key_returns_none() {
        let catalog = nav_catalog();
        assert_eq!(catalog.get("en", "nav.nonexistent"), None);
        assert_eq!(catalog.get("en", "footer.tagline"), None);
    }

    #[test]
    fn unknown_locale_does_not_fall_back() {
        let catalog = nav_catalog();
        assert_eq!(catalog.get("fr", "nav.home"), None);
        assert_eq!(catalog.get("", "nav.home"), None);
    }

    #[test]
    fn namespace_path_is_not_a_leaf() {
        let catalog = nav_catalog();
        assert_eq!(catalog.get("en", "nav"), None);
        assert_eq!(catalog.get("en", "nav."), None);
    }

    #[test]
    fn rejects_undotted_key() {
        let mut catalog = StringCatalog::new();
        assert_eq!(
            catalog.insert("en", "home", "Home"),
            Err(I18nError::InvalidKey("home".into()))
        );
        assert_eq!(
            catalog.insert("en", "nav..home", "Home"),
            Err(I18nError::InvalidKey("nav..home".into()))
        );
    }

    #[test]
    fn rejects_bad_locale() {
        let mut catalog = StringCatalog::new();
        assert_eq!(
            catalog.insert("", "nav.home", "Home"),
            Err(I18nError::InvalidLocale(String::new()))
        );
        assert_eq!(
            catalog.insert("EN", "nav.home", "Home"),
            Err(I18nError::InvalidLocale("EN".into()))
        );
    }

    #[test]
    fn duplicate_key_is_an_error() {
        let mut catalog = nav_catalog();
        let err = catalog.insert("es", "nav.home", "Casa").unwrap_err();
        assert_eq!(
            err,
            I18nError::DuplicateKey {
                locale: "es".into(),
                key: "nav.home".into()
            }
        );
        assert_eq!(err.to_string(), "duplicate key 'nav.home' in locale 'es'");
        assert_eq!(catalog.get("es", "nav.home"), Some("Inicio"));
    }

    #[test]
    fn locale_listing_is_sorted() {
        let catalog = nav_catalog();
        assert_eq!(catalog.locales(), vec!["en", "es"]);
        assert_eq!(catalog.locale("es").map(LocaleStrings::len), Some(2));
        assert!(catalog.locale("fr").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.get("en", "nav.home"), None);
        assert!(catalog.locales().is_empty());
        assert!(catalog.all_keys().is_empty());
    }

    #[test]
    fn all_keys_is_sorted_and_deduped() {
        let catalog = nav_catalog();
        assert_eq!(catalog.all_keys(), vec!["nav.contact", "nav.home"]);
    }

    #[test]
    fn coverage_report_complete() {
        let catalog = nav_catalog();
        let report = catalog.coverage_report(&["es", "en"]);
        assert_eq!(report.total_keys, 2);
        assert!(report.is_complete());
        let tags: Vec<&str> = report.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(tags, vec!["es", "en"]);
    }

    #[test]
    fn coverage_report_flags_missing_keys() {
        let mut catalog = nav_catalog();
        catalog.insert("es", "footer.legal", "Legal").unwrap();

        let report = catalog.coverage_report(&["es", "en", "fr"]);
        assert!(!report.is_complete());

        let en = report.locales.iter().find(|l| l.locale == "en").unwrap();
        assert_eq!(en.present, 2);
        assert_eq!(en.missing, vec!["footer.legal"]);

        let fr = report.locales.iter().find(|l| l.locale == "fr").unwrap();
        assert_eq!(fr.present, 0);
        assert_eq!(fr.missing.len(), 3);
    }
}
