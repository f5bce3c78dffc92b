//! Page bootstrap and event dispatch.
//!
//! [`Site::boot`] runs once when the document is parsed. Order matters:
//! nav and footer must be in the document before the first locale is
//! applied, or their labels would stay empty.

use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::error::SiteError;
use crate::interact::{AnchorAction, RevealOptions, RevealTracker, anchor, mobile_menu, nav_scroll};
use crate::locale::{ApplyReport, LocaleSwitcher};
use crate::page::Page;
use crate::store::PreferenceStore;
use crate::{footer, nav, translations};

/// What the host found around a click target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// `href` of the closest enclosing `a[href^="#"]`, if any.
    pub anchor_href: Option<String>,
    /// Inside a link in the nav list.
    pub in_nav_link: bool,
    /// Inside the locale toggle.
    pub in_lang_toggle: bool,
}

/// What the host should do after dispatching a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub prevent_default: bool,
    pub menu_closed: bool,
}

/// A booted page.
#[derive(Debug)]
pub struct Site<S> {
    config: SiteConfig,
    page: Page,
    switcher: LocaleSwitcher<S>,
    reveal: RevealTracker,
}

impl<S: PreferenceStore> Site<S> {
    /// Render shared chrome, restore the persisted locale, and return a
    /// handle for later events.
    pub fn boot<D: Dom>(dom: &mut D, store: S, config: SiteConfig) -> Result<Self, SiteError> {
        let _span = tracing::info_span!("site_boot").entered();

        let catalog = translations::catalog()?;
        let supported: Vec<&str> = config.supported_locales.iter().map(String::as_str).collect();
        let coverage = catalog.coverage_report(&supported);
        for locale in coverage.locales.iter().filter(|l| !l.missing.is_empty()) {
            warn!(locale = %locale.locale, missing = ?locale.missing, "incomplete translations");
        }

        let page = nav::render(dom, &config)?;
        footer::render(dom, &config)?;

        let mut switcher = LocaleSwitcher::new(catalog, store, &config);
        let locale = switcher.persisted_or_default();
        switcher.set_locale(dom, &locale);

        info!(?page, %locale, "site booted");
        Ok(Self {
            config,
            page,
            switcher,
            reveal: RevealTracker::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Page detected at boot.
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        self.switcher.current()
    }

    #[must_use]
    pub fn switcher(&self) -> &LocaleSwitcher<S> {
        &self.switcher
    }

    /// Observer settings for `.reveal` elements.
    #[must_use]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions::from_config(&self.config)
    }

    /// Elements to hand to the intersection observer.
    pub fn reveal_targets<D: Dom>(&self, dom: &D) -> Vec<D::Node> {
        RevealTracker::targets(dom)
    }

    pub fn set_locale<D: Dom>(&mut self, dom: &mut D, code: &str) -> ApplyReport {
        self.switcher.set_locale(dom, code)
    }

    /// Locale button click: switch to the button's `data-lang`.
    pub fn on_locale_button<D: Dom>(&mut self, dom: &mut D, button: &D::Node) {
        match dom.attribute(button, nav::LANG_ATTR) {
            Some(code) => {
                self.switcher.set_locale(dom, &code);
            }
            None => debug!("locale button without data-lang"),
        }
    }

    pub fn toggle_menu<D: Dom>(&mut self, dom: &mut D) -> bool {
        mobile_menu::toggle(dom)
    }

    pub fn on_scroll<D: Dom>(&mut self, dom: &mut D, scroll_y: f64) {
        nav_scroll::apply(dom, scroll_y, self.config.scroll_threshold);
    }

    /// Document click: close the mobile menu after navigation and route
    /// same-page anchors to a smooth scroll.
    pub fn on_click<D: Dom>(&mut self, dom: &mut D, target: &ClickTarget) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();
        if mobile_menu::should_close(target.in_nav_link, target.in_lang_toggle) {
            mobile_menu::close(dom);
            outcome.menu_closed = true;
        }
        if let Some(href) = &target.anchor_href {
            let action = anchor::follow(dom, href);
            outcome.prevent_default = action.prevents_default();
            if action == AnchorAction::NotAnchor {
                debug!(%href, "click on non-fragment link");
            }
        }
        outcome
    }

    /// Intersection observer callback.
    pub fn on_intersections<D, I>(&mut self, dom: &mut D, entries: I) -> usize
    where
        D: Dom,
        I: IntoIterator<Item = (D::Node, bool)>,
    {
        self.reveal.on_entries(dom, entries)
    }
}
