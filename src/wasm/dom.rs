//! Small DOM helpers shared by the page components.

use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, RequestCache};

use crate::error::{FolioError, Result};

pub(super) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(super) fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub(super) fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub(super) fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into().ok()
}

/// All matches of `selector` under `root`, in document order.
pub(super) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `location.search`, or empty when unavailable.
pub(super) fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub(super) fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(href);
    }
}

/// Fetch a same-site text document, bypassing the HTTP cache.
pub(super) async fn fetch_text(url: &str) -> Result<String> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| FolioError::network(e).in_document(url))?;
    if !response.ok() {
        return Err(FolioError::status(response.status()).in_document(url));
    }
    response
        .text()
        .await
        .map_err(|e| FolioError::network(e).in_document(url))
}
