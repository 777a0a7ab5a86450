//! Circular clock navigation: a rotating hand plus the section menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `NavState` context. The scroll tracker moves the
//! hand from outside; this component takes over while the pointer is on the
//! dial and hands control back on leave. The menu sits inside the dial, so
//! hovering an entry happens under the interaction lock.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::section::Section;
use crate::util::scroll::scroll_to_section;

/// Dial angle of the mouse relative to the clock's center.
#[cfg(feature = "csr")]
fn clock_angle_from_pointer(ev: &leptos::ev::MouseEvent, element: &web_sys::HtmlDivElement) -> Option<f64> {
    let rect = element.get_bounding_client_rect();
    let center = (rect.left() + (rect.width() * 0.5), rect.top() + (rect.height() * 0.5));
    let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
    crate::util::dial_math::pointer_angle_deg(center, pointer)
}

#[component]
pub fn ClockNav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let clock_ref = NodeRef::<leptos::html::Div>::new();

    let on_pointer_enter = move |_: leptos::ev::MouseEvent| nav.update(NavState::pointer_enter);
    let on_pointer_leave = move |_: leptos::ev::MouseEvent| nav.update(NavState::pointer_leave);
    let on_pointer_move = move |ev: leptos::ev::MouseEvent| {
        if !nav.with_untracked(|n| n.pointer_over_clock) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(clock) = clock_ref.get() else {
                return;
            };
            let Some(angle) = clock_angle_from_pointer(&ev, &clock) else {
                return;
            };
            nav.update(|n| {
                n.pointer_at_angle(angle);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let menu = Section::ALL
        .into_iter()
        .map(|section| {
            let is_active = move || nav.with(|n| n.is_active(section));
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.update(|n| n.set_active_section(section));
                scroll_to_section(section);
            };
            let on_hover = move |_: leptos::ev::MouseEvent| {
                if nav.with_untracked(|n| n.pointer_over_clock) {
                    nav.update(|n| n.preview(section));
                }
            };
            view! {
                <li
                    class="menu-section"
                    class:active=is_active
                    data-section=section.id()
                    on:click=on_click
                    on:mouseenter=on_hover
                >
                    <span class="menu-section__label">{section.label()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="clock-nav">
            <div
                class="interactive-clock"
                node_ref=clock_ref
                on:mouseenter=on_pointer_enter
                on:mouseleave=on_pointer_leave
                on:mousemove=on_pointer_move
            >
                <div class="clock-face">
                    <div id="clockHand" class="clock-hand" style=move || nav.with(NavState::hand_style)></div>
                    <div class="clock-center"></div>
                </div>
                <ul class="clock-menu">{menu}</ul>
            </div>
        </div>
    }
}
