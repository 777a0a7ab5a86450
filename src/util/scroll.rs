//! Window scroll helpers: offsets, section geometry, smooth scrolling.
//!
//! Requires a browser environment; every helper silently no-ops (or returns an
//! empty/zero value) when the window, document, or target element is missing.

use crate::state::nav::SectionBounds;
use crate::state::section::Section;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Current vertical scroll offset of the window.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Bounds of every `<section>` with a known id, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all("section") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .filter_map(|el| {
                let section = Section::from_id(&el.id())?;
                Some(SectionBounds {
                    section,
                    top: f64::from(el.offset_top()),
                    height: f64::from(el.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

#[cfg(feature = "csr")]
fn smooth_scroll_into_view(el: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smoothly scroll the content block for `section` to the top of the viewport.
pub fn scroll_to_section(section: Section) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        {
            smooth_scroll_into_view(&el);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section;
    }
}

/// Run `handler` on every window scroll for the lifetime of the page.
pub fn on_window_scroll(handler: impl FnMut() + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut handler = handler;
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        if window
            .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = handler;
    }
}

/// Make every in-page `a[href^="#"]` link scroll smoothly to its target.
///
/// Links whose target does not exist still have their default jump
/// suppressed, matching a bare `#` placeholder link doing nothing.
pub fn install_anchor_smooth_scroll() {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(anchors) = document.query_selector_all("a[href^=\"#\"]") else {
            return;
        };
        for anchor in (0..anchors.length()).filter_map(|i| anchors.get(i)) {
            let Ok(anchor) = anchor.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let Some(href) = anchor.get_attribute("href") else {
                continue;
            };
            let document = document.clone();
            let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                ev.prevent_default();
                if let Some(target) = anchor_target(&href).and_then(|sel| document.query_selector(&sel).ok().flatten()) {
                    smooth_scroll_into_view(&target);
                }
            }) as Box<dyn FnMut(_)>);
            if anchor
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .is_ok()
            {
                cb.forget();
            }
        }
    }
}

/// Selector for an in-page link target, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<String> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(format!("#{id}"))
}
