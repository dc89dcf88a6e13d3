pub mod action_bar;
pub mod menu;
pub mod panel;

pub use action_bar::*;
pub use menu::*;
pub use panel::*;

use dioxus::prelude::*;

use crate::config::{use_ui_config, UiConfig};
use crate::view::{AttributeSet, Children, ClassNames, Listeners, Render, RenderNode, Tag};

/// Pure mapping from a component's props to its element descriptors.
///
/// Composing twice with equal props yields equal output; nothing outside the
/// props and the config is read.
pub trait Compose {
    /// Name used in diagnostics and documentation.
    const DISPLAY_NAME: &'static str;

    /// `(prop, description)` pairs for documentation tooling.
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[];

    type Output: Render;

    fn compose(&self, config: &UiConfig) -> Self::Output;
}

/// Handlers a component forwards onto its root element.
pub(crate) trait RootListeners {
    fn listeners(&self) -> Listeners;
}

/// Implement [`RootListeners`] for props carrying `onclick`, `onmouseenter`
/// and `onmouseleave`.
macro_rules! root_listeners {
    ($($props:ty),* $(,)?) => {$(
        impl $crate::components::RootListeners for $props {
            fn listeners(&self) -> $crate::view::Listeners {
                $crate::view::Listeners::new(self.onclick, self.onmouseenter, self.onmouseleave)
            }
        }
    )*};
}
pub(crate) use root_listeners;

/// Compose `props` against the ambient config and render the result.
pub(crate) fn render_component<P: Compose>(props: &P) -> Element {
    let config = use_ui_config();
    tracing::trace!(component = P::DISPLAY_NAME, "render");
    props.compose(&config).render()
}

/// Split caller attributes into the caller's class string and the rest.
pub(crate) fn forwarded(attributes: &[Attribute]) -> (Option<String>, AttributeSet) {
    let mut rest = AttributeSet::from(attributes.to_vec());
    let class = rest.take_class();
    (class, rest)
}

/// One element: `classes` then the caller's class, remaining attributes and
/// the caller's handlers forwarded, children inside.
pub(crate) fn container(
    tag: Tag,
    classes: ClassNames,
    attributes: &[Attribute],
    listeners: Listeners,
    children: &Children,
) -> RenderNode {
    let (class, rest) = forwarded(attributes);
    RenderNode::new(tag)
        .attributes(&rest)
        .class(classes.with_opt(class.as_deref()))
        .listeners(listeners)
        .children(children.clone())
}

/// A slot's prop bag without `class`; slot elements keep their fixed classes.
pub(crate) fn slot_props(props: &AttributeSet) -> AttributeSet {
    let mut props = props.clone();
    props.take_class();
    props
}
