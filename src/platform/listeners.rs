//! Event listeners: pointer, cards, resize, theme toggles, sidebar, nav, ripple

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, TouchEvent,
};

use super::boot::{Layers, Shared};
use super::dom;
use crate::error::FxError;
use crate::input::{InputEvent, PointerTracker};
use crate::theme::{DARK_CLASS, ThemeState};
use crate::ui::nav::{ANCHOR_LINK_SELECTOR, RIPPLE_SELECTOR, SIDEBAR_LINK_SELECTOR};
use crate::ui::sidebar::{ACTIVE_CLASS, MENU_GLYPH};
use crate::ui::{Sidebar, anchor_target, ripple_offset};

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MOBILE_THEME_TOGGLE_ID: &str = "mobileThemeToggle";
pub const MOBILE_TOGGLE_COLOR: &str = "#f7c948";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const SIDEBAR_ID: &str = "sidebar";
pub const OVERLAY_ID: &str = "overlay";
pub const CARD_SELECTOR: &str = ".box-card, .card-compact, .accent-card";

/// Attach `handler` for `name` events for the lifetime of the page
pub fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not listen for {}", name);
    }
    closure.forget();
}

fn client_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

fn first_touch(event: &TouchEvent) -> Option<Vec2> {
    event
        .touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Feed one input event through the tracker into the layers
fn dispatch(tracker: &Shared<PointerTracker>, layers: &Layers, event: InputEvent) {
    let effect = tracker.borrow_mut().handle(event);
    if effect.is_empty() {
        return;
    }
    let mut bubbles = layers.bubbles.as_ref().map(|l| l.borrow_mut());
    let mut sparkles = layers.sparkles.as_ref().map(|l| l.borrow_mut());
    effect.apply(
        bubbles.as_deref_mut().map(|l| &mut l.field),
        sparkles.as_deref_mut().map(|l| &mut l.field),
    );
}

/// Window-level pointer, touch and scroll input
pub fn attach_pointer(tracker: &Shared<PointerTracker>, layers: &Layers) {
    let Ok(window) = dom::window() else {
        return;
    };

    // Mouse move: show bubbles and pull them toward the cursor
    {
        let (tracker, layers) = (tracker.clone(), layers.clone());
        listen(&window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                dispatch(&tracker, &layers, InputEvent::MouseMove(client_point(e)));
            }
        });
    }

    // Touch move
    {
        let (tracker, layers) = (tracker.clone(), layers.clone());
        listen(&window, "touchmove", move |event| {
            if let Some(e) = event.dyn_ref::<TouchEvent>() {
                dispatch(&tracker, &layers, InputEvent::TouchMove(first_touch(e)));
            }
        });
    }

    // Pointer leaving the window hides bubbles. `mouseout` also fires between
    // elements, which carry a related target.
    {
        let (tracker, layers) = (tracker.clone(), layers.clone());
        listen(&window, "mouseout", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                if e.related_target().is_none() {
                    dispatch(&tracker, &layers, InputEvent::PointerOut);
                }
            }
        });
    }

    // Pointer move: sparkle burst
    {
        let (tracker, layers) = (tracker.clone(), layers.clone());
        listen(&window, "pointermove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                dispatch(&tracker, &layers, InputEvent::PointerMove(client_point(e)));
            }
        });
    }

    // Scroll: jostle bubbles
    {
        let (tracker, layers) = (tracker.clone(), layers.clone());
        listen(&window, "scroll", move |_| {
            dispatch(&tracker, &layers, InputEvent::Scroll(dom::scroll_y() as f32));
        });
    }
}

/// Hovering or touching a card gathers bubbles at its center
pub fn attach_cards(document: &Document, tracker: &Shared<PointerTracker>, layers: &Layers) {
    if layers.bubbles.is_none() {
        return;
    }
    let cards = dom::query_all(document, CARD_SELECTOR);
    for card in &cards {
        for name in ["mouseenter", "touchstart"] {
            let (tracker, layers, el) = (tracker.clone(), layers.clone(), card.clone());
            listen(card, name, move |_| {
                dispatch(&tracker, &layers, InputEvent::CardEnter(dom::rect_of(&el)));
            });
        }
        for name in ["mouseleave", "touchend"] {
            let (tracker, layers) = (tracker.clone(), layers.clone());
            listen(card, name, move |_| {
                dispatch(&tracker, &layers, InputEvent::CardLeave);
            });
        }
    }
    log::debug!("{} cards attract bubbles", cards.len());
}

/// Canvases follow the viewport size
pub fn attach_resize(layers: &Layers) {
    let Ok(window) = dom::window() else {
        return;
    };
    let layers = layers.clone();
    listen(&window, "resize", move |_| {
        let (w, h) = dom::viewport_size();
        layers.resize(w as u32, h as u32);
    });
}

/// Root class, button labels and click handlers for the theme toggles
pub fn attach_theme(document: &Document, theme: &Shared<ThemeState>) {
    let root = document.document_element();
    let desktop = document.get_element_by_id(THEME_TOGGLE_ID);
    let mobile = dom::html_by_id(document, MOBILE_THEME_TOGGLE_ID).ok();

    {
        let (desktop, mobile) = (desktop.clone(), mobile.clone());
        theme.borrow_mut().on_change(move |t| {
            if let Some(root) = &root {
                dom::set_class(root, DARK_CLASS, t.is_dark());
            }
            if let Some(btn) = &desktop {
                btn.set_text_content(Some(t.toggle_label()));
            }
            if let Some(btn) = &mobile {
                btn.set_text_content(Some(t.toggle_icon()));
                let _ = btn.style().set_property("color", MOBILE_TOGGLE_COLOR);
            }
        });
    }

    let buttons: Vec<Element> = desktop
        .into_iter()
        .chain(mobile.map(Element::from))
        .collect();
    if buttons.is_empty() {
        log::info!("No theme toggle on this page");
    }
    for btn in &buttons {
        let theme = theme.clone();
        listen(btn, "click", move |_| {
            theme.borrow_mut().toggle();
        });
    }
}

fn apply_sidebar(state: Sidebar, sidebar: &Element, overlay: &Element) {
    for el in [sidebar, overlay] {
        dom::set_class(el, ACTIVE_CLASS, state.is_open());
        let _ = el.set_attribute("aria-hidden", state.aria_hidden());
    }
}

/// Hamburger menu, overlay dismissal and closing on nav clicks (mobile)
pub fn attach_sidebar(document: &Document) -> Result<(), FxError> {
    let sidebar = dom::by_id(document, SIDEBAR_ID)?;
    let overlay = dom::by_id(document, OVERLAY_ID)?;
    let state = Rc::new(RefCell::new(Sidebar::default()));

    if let Ok(menu) = dom::by_id(document, MENU_TOGGLE_ID) {
        menu.set_inner_html(MENU_GLYPH);
        let (state, sidebar, overlay) = (state.clone(), sidebar.clone(), overlay.clone());
        listen(&menu, "click", move |_| {
            let mut s = state.borrow_mut();
            s.toggle();
            apply_sidebar(*s, &sidebar, &overlay);
        });
    }

    {
        let (state, sidebar, el) = (state.clone(), sidebar.clone(), overlay.clone());
        listen(&overlay, "click", move |_| {
            let mut s = state.borrow_mut();
            s.close();
            apply_sidebar(*s, &sidebar, &el);
        });
    }

    for link in dom::query_all(document, SIDEBAR_LINK_SELECTOR) {
        let (state, sidebar, overlay) = (state.clone(), sidebar.clone(), overlay.clone());
        listen(&link, "click", move |_| {
            let (width, _) = dom::viewport_size();
            let mut s = state.borrow_mut();
            if s.nav_clicked(width) {
                apply_sidebar(*s, &sidebar, &overlay);
            }
        });
    }
    Ok(())
}

/// Smooth scrolling for in-page nav links
pub fn attach_nav(document: &Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let (document, el) = (document.clone(), link.clone());
        listen(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = document.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// `--x`/`--y` custom properties follow the pointer over fancy buttons
pub fn attach_ripple(document: &Document) {
    for btn in dom::query_all(document, RIPPLE_SELECTOR) {
        let Ok(el) = btn.clone().dyn_into::<HtmlElement>() else {
            continue;
        };
        listen(&btn, "pointermove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = ripple_offset(client_point(e), dom::rect_of(&el));
                let style = el.style();
                let _ = style.set_property("--x", &x);
                let _ = style.set_property("--y", &y);
            }
        });
    }
}
