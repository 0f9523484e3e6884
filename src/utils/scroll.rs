use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::NodeRef;

use crate::config;

/// Id an in-page link points at. Bare `#` and external links have none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window offset that puts `offset_top` just below the sticky header.
pub fn scroll_target_top(offset_top: f64, header_height: f64) -> f64 {
    offset_top - header_height - config::SCROLL_MARGIN_PX
}

pub fn scroll_window_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn header_height(document: &web_sys::Document) -> f64 {
    document
        .query_selector(".main-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| f64::from(header.offset_height()))
}

/// Smoothly scrolls to the element with `id`. Missing targets are ignored.
pub fn scroll_to_anchor(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("anchor #{} has no target", id);
        return;
    };
    let top = scroll_target_top(f64::from(target.offset_top()), header_height(&document));
    scroll_window_to(top);
}

/// Centers the referenced control in the viewport and focuses it.
pub fn reveal_and_focus(node: &NodeRef) {
    let Some(element) = node.cast::<HtmlElement>() else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    if let Err(err) = element.focus() {
        log::warn!("could not focus field: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_target_skips_bare_hash_and_external_links() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://closerflow.com.br"), None);
        assert_eq!(anchor_target("/privacidade"), None);
    }

    #[test]
    fn target_sits_below_header_with_margin() {
        assert_eq!(scroll_target_top(1200.0, 80.0), 1100.0);
        assert_eq!(scroll_target_top(50.0, 80.0), -50.0);
    }
}
