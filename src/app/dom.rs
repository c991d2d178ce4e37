use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::scroll::{scroll_to_section, SectionHost};

/// The live browser document.
struct Document;

impl SectionHost for Document {
    type Element = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn scroll_to_top(&self, el: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

pub fn scroll_to(id: &str) {
    scroll_to_section(&Document, id);
}

/// Opens `url` in a new tab. Fire-and-forget; failures are only logged.
pub fn open_external(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("couldn't open {}: {:?}", url, e);
    }
}
