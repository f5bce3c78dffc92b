#![forbid(unsafe_code)]

//! Host-independent runtime for the Simpli marketing site.
//!
//! Renders the shared navigation bar and footer, switches UI text between
//! Spanish and English, and implements the small interaction behaviors
//! (scroll shadow, mobile menu, scroll reveal, in-page anchor scrolling).
//!
//! Nothing here touches JS types. Every DOM access goes through the
//! [`Dom`] trait and every persisted value through [`PreferenceStore`], so
//! the same code drives the browser (see `simpli-site-wasm`) and the
//! in-memory [`MemoryDom`] used by tests.

pub mod config;
pub mod dom;
pub mod error;
pub mod footer;
pub mod fragment;
pub mod interact;
pub mod locale;
pub mod nav;
pub mod page;
pub mod site;
pub mod store;
pub mod translations;

pub use config::SiteConfig;
pub use dom::{Dom, MemoryDom, NodeId, Selector};
pub use error::SiteError;
pub use fragment::{Child, Fragment};
pub use locale::{ApplyReport, Binding, LocaleState, LocaleSwitcher, Resolver};
pub use page::Page;
pub use site::{ClickOutcome, ClickTarget, Site};
pub use store::{MemoryStore, PreferenceStore};
