//! Host-supplied configuration overrides.
//!
//! Pages may define `window.SIMPLI_CONFIG = { storageKey, defaultLocale,
//! scrollThreshold }` before the module loads. The wasm layer reads the
//! object into [`ConfigOverrides`]; this module only merges.

use simpli_site::SiteConfig;

/// Global the start hook reads overrides from.
pub const CONFIG_GLOBAL: &str = "SIMPLI_CONFIG";

/// Optional overrides; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub storage_key: Option<String>,
    pub default_locale: Option<String>,
    pub scroll_threshold: Option<f64>,
}

impl ConfigOverrides {
    /// Whether nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage_key.is_none() && self.default_locale.is_none() && self.scroll_threshold.is_none()
    }

    /// Merge onto `base`. Invalid values are dropped by the config builders.
    #[must_use]
    pub fn apply(self, base: SiteConfig) -> SiteConfig {
        let mut config = base;
        if let Some(key) = self.storage_key.filter(|k| !k.is_empty()) {
            config = config.with_storage_key(key);
        }
        if let Some(code) = self.default_locale {
            config = config.with_default_locale(code);
        }
        if let Some(threshold) = self.scroll_threshold {
            config = config.with_scroll_threshold(threshold);
        }
        config
    }
}
