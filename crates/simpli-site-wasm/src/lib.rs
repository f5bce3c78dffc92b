#![forbid(unsafe_code)]

//! Browser entry point for the Simpli site.
//!
//! On load, the `wasm-bindgen` start hook boots [`simpli_site::Site`] over
//! a `web_sys` document once the markup is parsed, then registers the
//! scroll, click, and intersection listeners. No inline `onclick`
//! handlers are needed; `setLocale` and `toggleMobileMenu` are still
//! exported for pages that call them from markup.
//!
//! Only [`overrides`] is compiled natively; everything touching JS is
//! gated on `wasm32`.

pub mod overrides;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod web_dom;
#[cfg(target_arch = "wasm32")]
mod web_store;

#[cfg(target_arch = "wasm32")]
pub use wasm::{current_locale, set_locale, toggle_mobile_menu};
#[cfg(target_arch = "wasm32")]
pub use web_dom::WebDom;
#[cfg(target_arch = "wasm32")]
pub use web_store::WebStore;
