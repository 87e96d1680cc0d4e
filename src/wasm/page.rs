//! Page-wide components: background layer, fade transitions and the
//! footer/home touches.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, MouseEvent};

use super::dom;
use crate::background::{background_style, needs_background, BackgroundSources};
use crate::config::SiteConfig;
use crate::transition::{LinkClick, FADE_CLASS};

/// Fill `.bg` from the `data-bg*` attributes of `<body>` and keep it in
/// sync with the viewport, debounced.
pub(super) fn install_background(config: &SiteConfig) {
    let (Some(bg), Some(body), Some(window)) = (dom::query_html(".bg"), dom::body(), web_sys::window())
    else {
        return;
    };

    let media_query = config.mobile_media_query();
    let update = Rc::new(move || apply_background(&bg, &body, &media_query));
    update();

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let delay = config.resize_debounce_ms;
    EventListener::new(&window, "resize", move |_| {
        let update = update.clone();
        // Replacing the pending timeout drops (cancels) the previous one.
        *pending.borrow_mut() = Some(Timeout::new(delay, move || update()));
    })
    .forget();
}

fn apply_background(bg: &HtmlElement, body: &HtmlElement, media_query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    // A stylesheet background wins; one we set inline ourselves may be updated.
    let inline = bg.style().get_property_value("background-image").unwrap_or_default();
    if inline.is_empty() {
        if let Ok(Some(computed)) = window.get_computed_style(bg) {
            let current = computed.get_property_value("background-image").unwrap_or_default();
            if !needs_background(&current) {
                return;
            }
        }
    }

    let is_mobile = window
        .match_media(media_query)
        .ok()
        .flatten()
        .is_some_and(|m| m.matches());
    let sources = BackgroundSources::new(
        body.get_attribute("data-bg-desktop"),
        body.get_attribute("data-bg-mobile"),
        body.get_attribute("data-bg"),
    );
    let Some(src) = sources.pick(is_mobile) else {
        return;
    };

    let style = bg.style();
    for (property, value) in background_style(src) {
        let _ = style.set_property(property, &value);
    }
}

/// Fade the page out before following `a[data-transition]` links.
pub(super) fn install_transitions(config: &SiteConfig) {
    let delay = config.fade_delay_ms;
    for element in dom::query_all("a[data-transition]") {
        let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let click = LinkClick {
                    new_tab_target: link.target() == "_blank",
                    meta_key: mouse.meta_key(),
                    ctrl_key: mouse.ctrl_key(),
                };
                if !click.should_fade() {
                    return;
                }
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                event.prevent_default();
                if let Some(body) = dom::body() {
                    let _ = body.class_list().add_1(FADE_CLASS);
                }
                Timeout::new(delay, move || dom::navigate(&href)).forget();
            },
        )
        .forget();
    }
}

/// Current year into `#year`.
pub(super) fn install_footer_year() {
    let Some(year) = dom::document().and_then(|d| d.get_element_by_id("year")) else {
        return;
    };
    let now = js_sys::Date::new_0();
    year.set_text_content(Some(&now.get_full_year().to_string()));
}

/// Home page triangles stay visible even if their entrance animation
/// never ran.
pub(super) fn reveal_triangles() {
    if let Some(wrap) = dom::query_html(".tri-wrap") {
        let style = wrap.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("visibility", "visible");
    }
}
