//! Film page: list rendering and click-to-play players.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, KeyboardEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::film::{player_iframe, render_film_section};
use crate::model::FilmCatalog;

/// Fill `.film-list` if this document has one.
pub(super) fn install(config: Rc<SiteConfig>) {
    let Some(list) = dom::query(".film-list") else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let fetched = dom::fetch_text(&config.films_url)
            .await
            .and_then(|source| FilmCatalog::from_json(&source));
        if let Err(e) = &fetched {
            gloo::console::error!("[films.json] load error:", e.to_string());
        }
        list.set_inner_html(&render_film_section(fetched, &config));
        activate(&list);
    });
}

fn activate(list: &Element) {
    for img in dom::query_all_in(list, "img[data-fallback]") {
        let Ok(img) = img.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let thumb = img.clone();
        EventListener::once(&img, "error", move |_| {
            if let Some(fallback) = thumb.get_attribute("data-fallback") {
                let _ = thumb.remove_attribute("data-fallback");
                thumb.set_src(&fallback);
            }
        })
        .forget();
    }

    for player in dom::query_all_in(list, ".yt-lite[data-yt]") {
        let on_click = player.clone();
        EventListener::once(&player, "click", move |_| start_player(&on_click)).forget();

        let on_key = player.clone();
        EventListener::new_with_options(
            &player,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let activates = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|e| matches!(e.key().as_str(), "Enter" | " "));
                if activates && on_key.has_attribute("data-yt") {
                    // Space would otherwise scroll the page.
                    event.prevent_default();
                    start_player(&on_key);
                }
            },
        )
        .forget();
    }
}

/// Swap the thumbnail for the live embed. Runs at most once per card.
fn start_player(player: &Element) {
    let Some(id) = player.get_attribute("data-yt") else {
        return;
    };
    let title = player
        .closest(".film")
        .ok()
        .flatten()
        .and_then(|card| card.query_selector(".film-title").ok().flatten())
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    player.set_inner_html(&player_iframe(&id, &title));
    for attr in ["data-yt", "role", "tabindex", "aria-label"] {
        let _ = player.remove_attribute(attr);
    }
    let _ = player.class_list().add_1("is-playing");
}
