//! Verbatim markup injection for trusted content.
//!
//! [`TrustedMarkup`] writes its `html` prop straight into a container's
//! `innerHTML`, skipping the escaping that `rsx!` text nodes get. Only hand it
//! markup that was sanitized or moderated before reaching the UI, such as
//! content loaded from the portal's own database. Nothing in this module
//! checks that: the producer of the string owns its safety.

use dioxus::prelude::*;

use crate::interop::find_element_by_id;

/// Classes every container carries, ahead of the caller's `class`.
pub const BASE_CLASSES: &str = "trusted-markup prose max-w-none";

/// Output handle that accepts raw markup.
pub trait MarkupSink {
    /// Replace the sink's content with `html`, verbatim. No escaping.
    fn write_markup(&mut self, html: &str);
}

impl MarkupSink for String {
    fn write_markup(&mut self, html: &str) {
        self.clear();
        self.push_str(html);
    }
}

/// Tracks what was last written so each distinct non-empty value is written once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MarkupSync {
    #[default]
    Empty,
    Populated(String),
}

impl MarkupSync {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Push `html` into `sink` if it is non-empty and differs from the last
    /// write. Returns whether a write happened.
    pub fn observe<S: MarkupSink + ?Sized>(&mut self, html: &str, sink: &mut S) -> bool {
        if html.is_empty() {
            return false;
        }
        if self.last_written() == Some(html) {
            return false;
        }

        sink.write_markup(html);
        *self = Self::Populated(html.to_string());
        true
    }

    pub fn last_written(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Populated(html) => Some(html.as_str()),
        }
    }
}

pub fn container_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        BASE_CLASSES.to_string()
    } else {
        format!("{BASE_CLASSES} {extra}")
    }
}

/// Renders trusted, pre-sanitized HTML into a container.
///
/// The write happens in an effect after the render commits, once per change of
/// `html`. An empty or omitted `html` leaves the container as it was.
#[component]
pub fn TrustedMarkup(#[props(default)] html: String, #[props(default)] class: String) -> Element {
    let container_id = use_signal(|| format!("trusted-markup-{}", uuid::Uuid::new_v4()));
    let mut sync = use_signal(MarkupSync::new);
    let cid = container_id();
    let class_list = container_class(&class);

    let container_id_for_sync = container_id();

    use_effect(use_reactive((&html,), move |(html,)| {
        if html.is_empty() {
            return;
        }

        let Some(mut container) = find_element_by_id(&container_id_for_sync) else {
            dioxus_logger::tracing::warn!(
                "trusted markup container #{} not mounted",
                container_id_for_sync
            );
            return;
        };
        sync.write().observe(&html, &mut container);
    }));

    rsx! {
        div {
            id: "{cid}",
            class: "{class_list}",
        }
    }
}
