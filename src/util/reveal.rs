//! Scroll-triggered reveal wiring over `IntersectionObserver`.
//!
//! Every `.animate-on-scroll` element present at mount is observed with a 10%
//! threshold. The first intersection adds `is-visible` and unobserves the
//! element; nothing ever removes the class.

#[cfg(feature = "csr")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
#[cfg(feature = "csr")]
use crate::state::reveal::RevealState;

/// Start observing reveal targets. No-op when none are on the page.
pub fn observe_reveals() {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        let elements: Vec<web_sys::Element> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect();
        if elements.is_empty() {
            return;
        }

        let state = Rc::new(RefCell::new(RevealState::default()));
        let targets = Rc::new(elements);
        let targets_for_cb = Rc::clone(&targets);
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = targets_for_cb.iter().position(|el| *el == target) else {
                    continue;
                };
                if state.borrow_mut().observe(key, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) else {
            log::warn!("IntersectionObserver unavailable; reveal animations disabled");
            return;
        };
        cb.forget();

        for el in targets.iter() {
            observer.observe(el);
        }
        log::debug!("observing {} reveal targets", targets.len());
    }
}
