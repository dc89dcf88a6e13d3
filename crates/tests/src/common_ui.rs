use dioxus::prelude::*;
use fundamental_ui::{RenderNode, UiConfig};

/// Render a root component to HTML the way a server would.
pub fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Run `check` inside a live component scope, where handlers can be created.
pub fn in_scope<T>(check: impl FnOnce() -> T) -> T {
    fn empty() -> Element {
        rsx! {}
    }
    let mut dom = VirtualDom::new(empty);
    dom.rebuild_in_place();
    dom.in_scope(ScopeId::ROOT, check)
}

pub fn config() -> UiConfig {
    UiConfig::default()
}

/// Class string of a node as it lands in the `class` attribute.
pub fn class_of(node: &RenderNode) -> String {
    node.class_names().to_string()
}

/// Attribute passed to every component to check passthrough.
pub fn tracking_attr() -> Attribute {
    Attribute::new("data-tracking-id", "cta-42", None, false)
}

pub fn caller_class(class: &'static str) -> Attribute {
    Attribute::new("class", class, None, false)
}
