//! Navigation bar renderer.

use tracing::debug;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::error::SiteError;
use crate::fragment::Fragment;
use crate::page::Page;

pub const NAV_ID: &str = "navbar";
pub const LINKS_ID: &str = "navLinks";
pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";

pub const DARK_CLASS: &str = "nav-dark";
pub const ACTIVE_CLASS: &str = "active";
pub const LINKS_CLASS: &str = "nav-links";
pub const LANG_TOGGLE_CLASS: &str = "lang-toggle";
pub const LANG_BUTTON_CLASS: &str = "lang-btn";

/// Body attribute that requests the dark variant when set to `"true"`.
pub const DARK_FLAG: &str = "data-nav-dark";

/// Attribute on each locale button naming its locale.
pub const LANG_ATTR: &str = "data-lang";

/// Dictionary-key attribute for shared text.
pub const I18N_ATTR: &str = "data-i18n";

/// `Simpli` wordmark with the trailing dot, linking home.
pub(crate) fn logo() -> Fragment {
    Fragment::new("a")
        .attr("href", Page::Home.href())
        .class("nav-logo")
        .text("Simpli")
        .child(Fragment::new("span").class("dot"))
}

/// Build the nav for `page`. Link labels are left empty for the locale
/// switcher to fill.
#[must_use]
pub fn fragment(page: Page, dark: bool, config: &SiteConfig) -> Fragment {
    let links = Page::ALL.into_iter().map(|target| {
        Fragment::new("li").child(
            Fragment::new("a")
                .attr("href", target.href())
                .attr(I18N_ATTR, target.label_key())
                .class_if(target == page, ACTIVE_CLASS),
        )
    });

    let buttons = config.supported_locales.iter().map(|code| {
        Fragment::new("button")
            .class(LANG_BUTTON_CLASS)
            .class_if(*code == config.default_locale, ACTIVE_CLASS)
            .attr(LANG_ATTR, code.as_str())
            .text(code.to_ascii_uppercase())
    });

    let toggle = Fragment::new("li").child(
        Fragment::new("div")
            .class(LANG_TOGGLE_CLASS)
            .children(buttons),
    );

    let menu_button = Fragment::new("button")
        .class("mobile-menu-btn")
        .id(MENU_BUTTON_ID)
        .children((0..3).map(|_| Fragment::new("span")));

    Fragment::new("nav")
        .id(NAV_ID)
        .class_if(dark, DARK_CLASS)
        .child(logo())
        .child(
            Fragment::new("ul")
                .class(LINKS_CLASS)
                .id(LINKS_ID)
                .children(links)
                .child(toggle),
        )
        .child(menu_button)
}

/// Detect the page, build the nav, and insert it as the first child of
/// `<body>`. Returns the detected page.
pub fn render<D: Dom>(dom: &mut D, config: &SiteConfig) -> Result<Page, SiteError> {
    let page = Page::detect(&dom.location_path());
    let dark = dom.body_attribute(DARK_FLAG).as_deref() == Some("true");
    let _span = tracing::debug_span!("nav_render", ?page, dark).entered();

    dom.prepend_to_body(&fragment(page, dark, config))?;
    debug!("nav inserted");
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, Selector};
    use pretty_assertions::assert_eq;

    fn active_hrefs(nav: &Fragment) -> Vec<String> {
        let mut out = Vec::new();
        collect_active(nav, &mut out);
        out
    }

    fn collect_active(el: &Fragment, out: &mut Vec<String>) {
        if el.tag() == "a" && el.classes().iter().any(|c| c == ACTIVE_CLASS) {
            out.push(el.get_attr("href").unwrap_or_default().to_string());
        }
        for child in el.child_nodes() {
            if let crate::fragment::Child::Element(c) = child {
                collect_active(c, out);
            }
        }
    }

    #[test]
    fn exactly_one_active_link_per_page() {
        let config = SiteConfig::default();
        for page in Page::ALL {
            let nav = fragment(page, false, &config);
            assert_eq!(active_hrefs(&nav), vec![page.href().to_string()]);
        }
    }

    #[test]
    fn markup_shape() {
        let nav = fragment(Page::Apps, false, &SiteConfig::default());
        assert_eq!(
            nav.to_html(),
            concat!(
                r#"<nav id="navbar">"#,
                r#"<a href="index.html" class="nav-logo">Simpli<span class="dot"></span></a>"#,
                r#"<ul id="navLinks" class="nav-links">"#,
                r#"<li><a href="index.html" data-i18n="nav.home"></a></li>"#,
                r#"<li><a href="apps.html" data-i18n="nav.apps" class="active"></a></li>"#,
                r#"<li><a href="manifiesto.html" data-i18n="nav.manifesto"></a></li>"#,
                r#"<li><a href="contacto.html" data-i18n="nav.contact"></a></li>"#,
                r#"<li><div class="lang-toggle">"#,
                r#"<button data-lang="es" class="lang-btn active">ES</button>"#,
                r#"<button data-lang="en" class="lang-btn">EN</button>"#,
                r#"</div></li></ul>"#,
                r#"<button id="mobileMenuBtn" class="mobile-menu-btn"><span></span><span></span><span></span></button>"#,
                r#"</nav>"#,
            )
        );
    }

    #[test]
    fn dark_flag_must_be_exactly_true() {
        let config = SiteConfig::default();
        for (value, dark) in [("true", true), ("false", false), ("1", false), ("TRUE", false)] {
            let mut dom = MemoryDom::new().with_body_attribute(DARK_FLAG, value);
            render(&mut dom, &config).unwrap();
            let nav = dom.element_by_id(NAV_ID).unwrap();
            assert_eq!(dom.has_class(&nav, DARK_CLASS), dark, "flag {value:?}");
        }
    }

    #[test]
    fn render_prepends_and_detects_page() {
        let mut dom = MemoryDom::new().with_path("/site/contacto.html");
        dom.push_content(&Fragment::new("main"));
        let page = render(&mut dom, &SiteConfig::default()).unwrap();
        assert_eq!(page, Page::Contact);

        let first = dom.body_children()[0];
        assert_eq!(dom.tag(first), "nav");
        let active = dom.first(&Selector::class(ACTIVE_CLASS)).unwrap();
        assert_eq!(dom.attribute(&active, "href").as_deref(), Some("contacto.html"));
    }
}
