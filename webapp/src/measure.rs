use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use common::{Command, nav::SectionBounds};

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn header_height() -> f64 {
    document()
        .and_then(|doc| doc.query_selector(".header").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn section_top(id: &str) -> Option<f64> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
}

pub fn sections() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

pub fn scrolled() -> Command {
    let scroll_y = web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);

    Command::Scrolled {
        scroll_y,
        header_height: header_height(),
        sections: sections(),
    }
}
