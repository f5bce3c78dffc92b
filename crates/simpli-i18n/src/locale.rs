//! Locale codes understood by the site.
//!
//! Codes are plain strings so that an unrecognized code can still be
//! stored and applied; it simply resolves no translations.

/// Locale identifier (`"es"`, `"en"`).
pub type Locale = String;

/// Spanish.
pub const ES: &str = "es";

/// English.
pub const EN: &str = "en";

/// Locale used when no preference has been persisted.
pub const DEFAULT_LOCALE: &str = ES;

/// Locales that ship a full dictionary, in toggle order.
pub const SUPPORTED_LOCALES: [&str; 2] = [ES, EN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_supported() {
        assert_eq!(SUPPORTED_LOCALES[0], DEFAULT_LOCALE);
    }
}
