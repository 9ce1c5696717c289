use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

use crate::markup::MarkupSink;

/// Get the browser document
pub fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

/// Look up a mounted element by id. `None` outside a browser or once the
/// element has left the DOM.
pub fn find_element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

impl MarkupSink for Element {
    fn write_markup(&mut self, html: &str) {
        dioxus_logger::tracing::debug!(
            "writing {} bytes of trusted markup into #{}",
            html.len(),
            self.id()
        );
        self.set_inner_html(html);
    }
}
