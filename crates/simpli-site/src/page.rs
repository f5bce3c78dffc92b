//! Classifies the current location into one of the site's pages.

/// A page of the site that has a nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Apps,
    Manifesto,
    Contact,
}

impl Page {
    /// Pages in nav order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Apps, Page::Manifesto, Page::Contact];

    /// Path fragments checked in priority order. The first hit wins, so a
    /// path containing both `apps` and `contacto` is `Apps`.
    const FRAGMENTS: [(&'static str, Page); 3] = [
        ("apps", Page::Apps),
        ("manifiesto", Page::Manifesto),
        ("contacto", Page::Contact),
    ];

    /// Classify a location path. Anything unrecognized is `Home`.
    #[must_use]
    pub fn detect(path: &str) -> Self {
        Self::FRAGMENTS
            .iter()
            .find(|(fragment, _)| path.contains(fragment))
            .map_or(Page::Home, |&(_, page)| page)
    }

    /// File the page is served from.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Apps => "apps.html",
            Page::Manifesto => "manifiesto.html",
            Page::Contact => "contacto.html",
        }
    }

    /// Dictionary key of the page's link label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::Apps => "nav.apps",
            Page::Manifesto => "nav.manifesto",
            Page::Contact => "nav.contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_fragments() {
        assert_eq!(Page::detect("/apps.html"), Page::Apps);
        assert_eq!(Page::detect("/manifiesto.html"), Page::Manifesto);
        assert_eq!(Page::detect("/contacto.html"), Page::Contact);
        assert_eq!(Page::detect("/index.html"), Page::Home);
    }

    #[test]
    fn unknown_paths_are_home() {
        assert_eq!(Page::detect("/"), Page::Home);
        assert_eq!(Page::detect(""), Page::Home);
        assert_eq!(Page::detect("/blog/post.html"), Page::Home);
        // English spellings are not the file names.
        assert_eq!(Page::detect("/manifesto.html"), Page::Home);
        assert_eq!(Page::detect("/contact.html"), Page::Home);
    }

    #[test]
    fn first_fragment_in_priority_order_wins() {
        assert_eq!(Page::detect("/contacto/apps.html"), Page::Apps);
        assert_eq!(Page::detect("/contacto/manifiesto.html"), Page::Manifesto);
    }

    #[test]
    fn hrefs_round_trip_through_detect() {
        for page in Page::ALL {
            assert_eq!(Page::detect(&format!("/site/{}", page.href())), page);
        }
    }

    proptest! {
        #[test]
        fn paths_without_fragments_are_home(path in "[b-z/._-]{0,40}") {
            prop_assume!(!path.contains("apps"));
            prop_assume!(!path.contains("manifiesto"));
            prop_assume!(!path.contains("contacto"));
            prop_assert_eq!(Page::detect(&path), Page::Home);
        }

        #[test]
        fn apps_anywhere_wins(prefix in "[a-z/]{0,12}", suffix in "[a-z/.]{0,12}") {
            let path = format!("{prefix}apps{suffix}");
            prop_assert_eq!(Page::detect(&path), Page::Apps);
        }
    }
}
