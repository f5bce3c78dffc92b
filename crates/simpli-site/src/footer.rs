//! Footer renderer.

use tracing::debug;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::error::SiteError;
use crate::fragment::Fragment;
use crate::nav::{I18N_ATTR, logo};
use crate::page::Page;

/// Product names listed in the apps column. Not translated.
pub const APP_NAMES: [&str; 4] = ["mySupli", "myBloom", "myDose", "myProject"];

fn link(href: &str, key: &str) -> Fragment {
    Fragment::new("a").attr("href", href).attr(I18N_ATTR, key)
}

fn column(heading: Fragment, links: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::new("div")
        .class("footer-col")
        .child(heading)
        .children(links)
}

/// Build the footer. Translated text is left empty for the locale switcher.
#[must_use]
pub fn fragment(config: &SiteConfig) -> Fragment {
    let brand = Fragment::new("div")
        .class("footer-brand")
        .child(logo())
        .child(Fragment::new("p").attr(I18N_ATTR, "footer.tagline"));

    let apps = column(
        Fragment::new("h5").text("Apps"),
        APP_NAMES
            .iter()
            .map(|name| Fragment::new("a").attr("href", Page::Apps.href()).text(*name)),
    );
    let pages = column(
        Fragment::new("h5").attr(I18N_ATTR, "footer.pages"),
        [Page::Home, Page::Manifesto, Page::Contact]
            .into_iter()
            .map(|page| link(page.href(), page.label_key())),
    );
    let legal = column(
        Fragment::new("h5").attr(I18N_ATTR, "footer.legal"),
        [link("#", "footer.privacy"), link("#", "footer.terms")],
    );

    let bottom = Fragment::new("div")
        .class("footer-bottom")
        .child(
            Fragment::new("span")
                .text(format!("\u{a9} {} Simpli. ", config.copyright_year))
                .child(Fragment::new("span").attr(I18N_ATTR, "footer.copyright")),
        )
        .child(Fragment::new("span").attr(I18N_ATTR, "footer.madeWith"));

    Fragment::new("footer")
        .child(
            Fragment::new("div")
                .class("footer-content")
                .child(brand)
                .child(
                    Fragment::new("div")
                        .class("footer-links")
                        .children([apps, pages, legal]),
                ),
        )
        .child(bottom)
}

/// Build the footer and append it as the last child of `<body>`.
pub fn render<D: Dom>(dom: &mut D, config: &SiteConfig) -> Result<D::Node, SiteError> {
    let node = dom.append_to_body(&fragment(config))?;
    debug!("footer inserted");
    Ok(node)
}
