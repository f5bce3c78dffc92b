//! Locale switching.
//!
//! A locale change recomputes a list of [`Binding`]s from the document and
//! applies each one. Dictionary bindings set plain text from the shared
//! catalog; literal bindings copy the page-supplied `data-<code>` value in
//! as markup. Anything that does not resolve leaves the element as it was.

use simpli_i18n::StringCatalog;
use tracing::{debug, trace, warn};

use crate::config::SiteConfig;
use crate::dom::{Dom, Selector};
use crate::nav::{ACTIVE_CLASS, I18N_ATTR, LANG_ATTR, LANG_BUTTON_CLASS};
use crate::store::PreferenceStore;

/// The page's current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleState {
    current: String,
}

impl LocaleState {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            current: code.into(),
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, code: impl Into<String>) {
        self.current = code.into();
    }
}

/// How an element's text is found for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    /// Shared string looked up by dotted key; applied as plain text.
    Dictionary(String),
    /// Page-supplied literal read from this attribute; applied as markup.
    Literal(String),
}

/// An element paired with its resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<N> {
    pub node: N,
    pub resolver: Resolver,
}

/// Counts from one locale application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements updated from the dictionary.
    pub dictionary: usize,
    /// Elements updated from literal attributes.
    pub literal: usize,
    /// Bindings that resolved to nothing and were left alone.
    pub unresolved: usize,
}

/// Literal-translation attribute for a locale code.
#[must_use]
pub fn literal_attribute(code: &str) -> String {
    format!("data-{code}")
}

/// Owns the locale state and applies locale changes to a document.
#[derive(Debug)]
pub struct LocaleSwitcher<S> {
    catalog: StringCatalog,
    state: LocaleState,
    store: S,
    storage_key: String,
    default_locale: String,
    literal_locales: Vec<String>,
}

impl<S: PreferenceStore> LocaleSwitcher<S> {
    /// New switcher whose state starts at the configured default.
    pub fn new(catalog: StringCatalog, store: S, config: &SiteConfig) -> Self {
        Self {
            catalog,
            state: LocaleState::new(config.default_locale.clone()),
            store,
            storage_key: config.storage_key.clone(),
            default_locale: config.default_locale.clone(),
            literal_locales: config.supported_locales.clone(),
        }
    }

    /// Current locale code.
    #[must_use]
    pub fn current(&self) -> &str {
        self.state.get()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persisted locale, or the default when nothing (or an empty string)
    /// was persisted.
    #[must_use]
    pub fn persisted_or_default(&self) -> String {
        self.store
            .load(&self.storage_key)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.default_locale.clone())
    }

    /// Elements to update for `code`, in document order per kind.
    ///
    /// Literal bindings cover every element carrying a `data-<code>`
    /// attribute for any supported locale or for `code` itself; the
    /// attribute for `code` is read when the binding is applied.
    pub fn bindings<D: Dom>(&self, dom: &D, code: &str) -> Vec<Binding<D::Node>> {
        let mut bindings: Vec<Binding<D::Node>> = dom
            .query_all(&Selector::attribute(I18N_ATTR))
            .into_iter()
            .filter_map(|node| {
                let key = dom.attribute(&node, I18N_ATTR)?;
                Some(Binding {
                    node,
                    resolver: Resolver::Dictionary(key),
                })
            })
            .collect();

        let mut literal_attrs: Vec<String> = self
            .literal_locales
            .iter()
            .map(|c| literal_attribute(c))
            .collect();
        let own = literal_attribute(code);
        if !literal_attrs.contains(&own) {
            literal_attrs.push(own.clone());
        }
        bindings.extend(
            dom.query_all(&Selector::AnyAttribute(literal_attrs))
                .into_iter()
                .map(|node| Binding {
                    node,
                    resolver: Resolver::Literal(own.clone()),
                }),
        );
        bindings
    }

    /// Apply bindings for `code` without touching state, buttons, or storage.
    pub fn apply<D: Dom>(&self, dom: &mut D, code: &str) -> ApplyReport {
        let mut report = ApplyReport::default();
        for binding in self.bindings(dom, code) {
            match &binding.resolver {
                Resolver::Dictionary(key) => match self.catalog.get(code, key) {
                    Some(text) if !text.is_empty() => {
                        dom.set_text(&binding.node, text);
                        report.dictionary += 1;
                    }
                    _ => {
                        trace!(key = %key, code, "no dictionary entry");
                        report.unresolved += 1;
                    }
                },
                Resolver::Literal(attr) => match dom.attribute(&binding.node, attr) {
                    Some(html) if !html.is_empty() => {
                        dom.set_inner_html(&binding.node, &html);
                        report.literal += 1;
                    }
                    _ => report.unresolved += 1,
                },
            }
        }
        report
    }

    /// Switch the page to `code`.
    ///
    /// Sets the document language, rewrites every tagged element that
    /// resolves, marks the matching locale button active, and persists the
    /// choice. Unknown codes are accepted; they just resolve nothing.
    pub fn set_locale<D: Dom>(&mut self, dom: &mut D, code: &str) -> ApplyReport {
        let _span = tracing::debug_span!("set_locale", code).entered();

        if !self.literal_locales.iter().any(|c| c == code) {
            debug!("unsupported locale; only page literals for it can apply");
        }
        self.state.set(code);
        dom.set_document_lang(code);
        let report = self.apply(dom, code);

        for button in dom.query_all(&Selector::class(LANG_BUTTON_CLASS)) {
            let on = dom.attribute(&button, LANG_ATTR).as_deref() == Some(code);
            dom.set_class(&button, ACTIVE_CLASS, on);
        }

        if let Err(err) = self.store.store(&self.storage_key, code) {
            warn!(%err, "locale preference not persisted");
        }
        debug!(
            dictionary = report.dictionary,
            literal = report.literal,
            unresolved = report.unresolved,
            "locale applied"
        );
        report
    }
}
