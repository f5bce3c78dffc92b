//! Site configuration.
//!
//! [`SiteConfig::default`] carries the production values. Hosts may
//! override individual fields with the `with_*` builders.

use simpli_i18n::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

/// Storage key for the persisted locale preference.
pub const STORAGE_KEY: &str = "simpli-lang";

/// Vertical scroll offset above which the nav gets its shadow.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Viewport margin for reveal observation (bottom edge pulled in by 50px).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2026;

/// Runtime configuration for the site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Key under which the locale preference is persisted.
    pub storage_key: String,
    /// Locale applied when nothing has been persisted.
    pub default_locale: String,
    /// Locales offered by the nav toggle, in button order.
    pub supported_locales: Vec<String>,
    /// Nav is marked `scrolled` when the offset is strictly above this.
    pub scroll_threshold: f64,
    /// Intersection ratio that triggers a reveal.
    pub reveal_threshold: f64,
    /// CSS margin applied to the reveal observer's root.
    pub reveal_root_margin: String,
    /// Footer copyright year.
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            supported_locales: SUPPORTED_LOCALES.iter().map(|s| (*s).to_string()).collect(),
            scroll_threshold: SCROLL_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            copyright_year: COPYRIGHT_YEAR,
        }
    }
}

impl SiteConfig {
    /// Production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Override the default locale. Empty codes are ignored.
    #[must_use]
    pub fn with_default_locale(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        if !code.is_empty() {
            self.default_locale = code;
        }
        self
    }

    /// Override the scroll threshold. Negative or non-finite values are ignored.
    #[must_use]
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold >= 0.0 {
            self.scroll_threshold = threshold;
        }
        self
    }

    /// Override the reveal ratio, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_reveal_threshold(mut self, ratio: f64) -> Self {
        if ratio.is_finite() {
            self.reveal_threshold = ratio.clamp(0.0, 1.0);
        }
        self
    }

    /// Override the footer copyright year.
    #[must_use]
    pub fn with_copyright_year(mut self, year: u16) -> Self {
        self.copyright_year = year;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "simpli-lang");
        assert_eq!(config.default_locale, "es");
        assert_eq!(config.supported_locales, vec!["es", "en"]);
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.copyright_year, 2026);
    }

    #[test]
    fn builders_reject_nonsense() {
        let config = SiteConfig::new()
            .with_default_locale("")
            .with_scroll_threshold(-1.0)
            .with_scroll_threshold(f64::NAN)
            .with_reveal_threshold(3.0);
        assert_eq!(config.default_locale, "es");
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.reveal_threshold, 1.0);
    }

    #[test]
    fn builders_apply() {
        let config = SiteConfig::new()
            .with_storage_key("lang")
            .with_default_locale("en")
            .with_scroll_threshold(10.0)
            .with_copyright_year(2030);
        assert_eq!(config.storage_key, "lang");
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.scroll_threshold, 10.0);
        assert_eq!(config.copyright_year, 2030);
    }
}
