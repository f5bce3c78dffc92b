#![forbid(unsafe_code)]

//! `wasm-bindgen` start hook, event wiring, and exports.
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use simpli_site::interact::reveal::RevealOptions;
use simpli_site::nav::{LANG_BUTTON_CLASS, LANG_TOGGLE_CLASS, LINKS_CLASS, MENU_BUTTON_ID};
use simpli_site::{ClickTarget, Dom, Selector, Site, SiteConfig, SiteError};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::overrides::{CONFIG_GLOBAL, ConfigOverrides};
use crate::web_dom::{WebDom, js_message};
use crate::web_store::WebStore;

/// Same-page links that get smooth scrolling.
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

struct Runtime {
    dom: WebDom,
    site: Site<WebStore>,
}

type Shared = Rc<RefCell<Runtime>>;

thread_local! {
    static RUNTIME: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

fn console(level: &str, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(method) = Reflect::get(&console, &level.into()) else {
        return;
    };
    let Ok(method) = method.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = method.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console("error", &msg);
        }));
    });
}

/// Run `f` against the runtime unless a handler is already using it.
fn with_runtime<R>(shared: &Shared, f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    let Ok(mut runtime) = shared.try_borrow_mut() else {
        debug!("runtime busy; event dropped");
        return None;
    };
    Some(f(&mut *runtime))
}

fn global_runtime() -> Option<Shared> {
    RUNTIME.with(|slot| slot.borrow().clone())
}

fn read_overrides(window: &Window) -> ConfigOverrides {
    let Ok(obj) = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return ConfigOverrides::default();
    };
    if !obj.is_object() {
        return ConfigOverrides::default();
    }
    let get = |key: &str| Reflect::get(&obj, &JsValue::from_str(key)).ok();
    ConfigOverrides {
        storage_key: get("storageKey").and_then(|v| v.as_string()),
        default_locale: get("defaultLocale").and_then(|v| v.as_string()),
        scroll_threshold: get("scrollThreshold").and_then(|v| v.as_f64()),
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

fn observe_reveals(
    shared: &Shared,
    targets: &[Element],
    options: &RevealOptions,
) -> Result<(), JsValue> {
    let rt = shared.clone();
    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let reports: Vec<(Element, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect();
            with_runtime(&rt, |r| r.site.on_intersections(&mut r.dom, reports));
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    on_entries.forget();
    Ok(())
}

fn wire(shared: &Shared) -> Result<(), JsValue> {
    let (window, document, buttons, menu_button, targets, options) = {
        let rt = shared.borrow();
        (
            rt.dom.window().clone(),
            rt.dom.document().clone(),
            rt.dom.query_all(&Selector::class(LANG_BUTTON_CLASS)),
            rt.dom.element_by_id(MENU_BUTTON_ID),
            rt.site.reveal_targets(&rt.dom),
            rt.site.reveal_options(),
        )
    };

    let rt = shared.clone();
    let win = window.clone();
    listen(&window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        with_runtime(&rt, |r| r.site.on_scroll(&mut r.dom, y));
    })?;

    for button in buttons {
        let rt = shared.clone();
        let target = button.clone();
        listen(&button, "click", move |_| {
            with_runtime(&rt, |r| r.site.on_locale_button(&mut r.dom, &target));
        })?;
    }

    if let Some(menu_button) = menu_button {
        let rt = shared.clone();
        listen(&menu_button, "click", move |_| {
            with_runtime(&rt, |r| r.site.toggle_menu(&mut r.dom));
        })?;
    }

    let rt = shared.clone();
    let nav_link_selector = format!(".{LINKS_CLASS} a");
    let toggle_selector = format!(".{LANG_TOGGLE_CLASS}");
    listen(&document, "click", move |event: Event| {
        let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let target = ClickTarget {
            anchor_href: closest(&el, ANCHOR_SELECTOR).and_then(|a| a.get_attribute("href")),
            in_nav_link: closest(&el, &nav_link_selector).is_some(),
            in_lang_toggle: closest(&el, &toggle_selector).is_some(),
        };
        let outcome = with_runtime(&rt, |r| r.site.on_click(&mut r.dom, &target));
        if outcome.is_some_and(|o| o.prevent_default) {
            event.prevent_default();
        }
    })?;

    if let Err(err) = observe_reveals(shared, &targets, &options) {
        console(
            "warn",
            &format!("simpli: reveal observer unavailable ({}); showing all", js_message(&err)),
        );
        let all = targets.into_iter().map(|t| (t, true));
        with_runtime(shared, |r| r.site.on_intersections(&mut r.dom, all));
    }
    Ok(())
}

fn boot() -> Result<(), SiteError> {
    let mut dom =
        WebDom::from_window().ok_or_else(|| SiteError::Dom("no window or document".into()))?;
    let config = read_overrides(dom.window()).apply(SiteConfig::default());
    let site = Site::boot(&mut dom, WebStore::local(), config)?;
    let shared = Rc::new(RefCell::new(Runtime { dom, site }));
    wire(&shared).map_err(|err| SiteError::Dom(js_message(&err)))?;
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(shared));
    Ok(())
}

fn boot_and_report() {
    if let Err(err) = boot() {
        console("error", &format!("simpli: boot failed: {err}"));
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot_and_report);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .is_err()
        {
            console("error", "simpli: cannot listen for DOMContentLoaded");
        }
    } else {
        boot_and_report();
    }
}

/// Switch the page locale. Returns `false` before boot or while another
/// handler holds the runtime.
#[wasm_bindgen(js_name = setLocale)]
pub fn set_locale(code: &str) -> bool {
    global_runtime()
        .and_then(|rt| {
            with_runtime(&rt, |r| {
                r.site.set_locale(&mut r.dom, code);
            })
        })
        .is_some()
}

/// Open or close the mobile menu. Returns the new open state.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> bool {
    global_runtime()
        .and_then(|rt| with_runtime(&rt, |r| r.site.toggle_menu(&mut r.dom)))
        .unwrap_or(false)
}

/// Current locale code, or `undefined` before boot.
#[wasm_bindgen(js_name = currentLocale)]
pub fn current_locale() -> Option<String> {
    global_runtime().and_then(|rt| with_runtime(&rt, |r| r.site.locale().to_string()))
}
