//! Shared nav and footer strings.
//!
//! Every key must carry a string for every supported locale; the boot
//! path warns if that ever stops being true.

use simpli_i18n::{EN, ES, I18nError, StringCatalog};

/// `(key, [(locale, text), ...])` rows for the shared dictionary.
pub const TABLE: &[(&str, &[(&str, &str)])] = &[
    ("nav.home", &[(ES, "Inicio"), (EN, "Home")]),
    ("nav.apps", &[(ES, "Apps"), (EN, "Apps")]),
    ("nav.manifesto", &[(ES, "Manifiesto"), (EN, "Manifesto")]),
    ("nav.contact", &[(ES, "Contacto"), (EN, "Contact")]),
    (
        "footer.tagline",
        &[
            (ES, "Simpli Apps for a Simpli Life"),
            (EN, "Simpli Apps for a Simpli Life"),
        ],
    ),
    ("footer.pages", &[(ES, "Paginas"), (EN, "Pages")]),
    ("footer.legal", &[(ES, "Legal"), (EN, "Legal")]),
    ("footer.privacy", &[(ES, "Privacidad"), (EN, "Privacy")]),
    ("footer.terms", &[(ES, "Terminos"), (EN, "Terms")]),
    (
        "footer.copyright",
        &[
            (ES, "Todos los derechos reservados."),
            (EN, "All rights reserved."),
        ],
    ),
    (
        "footer.madeWith",
        &[
            (ES, "Hecho con \u{2665} para simplificar tu vida"),
            (EN, "Made with \u{2665} to simplify your life"),
        ],
    ),
];

/// Build the shared dictionary.
pub fn catalog() -> Result<StringCatalog, I18nError> {
    StringCatalog::from_rows(TABLE.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simpli_i18n::SUPPORTED_LOCALES;

    #[test]
    fn table_builds() {
        let catalog = catalog().expect("table is well formed");
        assert_eq!(catalog.all_keys().len(), TABLE.len());
    }

    #[test]
    fn every_key_in_every_locale() {
        let catalog = catalog().unwrap();
        let report = catalog.coverage_report(&SUPPORTED_LOCALES);
        assert!(report.is_complete(), "{report:?}");
    }

    #[test]
    fn spot_checks() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.get(ES, "nav.home"), Some("Inicio"));
        assert_eq!(catalog.get(EN, "nav.manifesto"), Some("Manifesto"));
        assert_eq!(catalog.get(ES, "footer.terms"), Some("Terminos"));
        assert_eq!(
            catalog.get(EN, "footer.madeWith"),
            Some("Made with \u{2665} to simplify your life")
        );
    }
}
