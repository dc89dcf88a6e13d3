use dioxus::prelude::*;

use super::{Listeners, Node, RenderNode, Tag};

/// Turn composed descriptors into host markup.
pub trait Render {
    fn render(&self) -> Element;

    /// Render to an HTML string without a browser.
    fn to_html(&self) -> String;
}

#[component]
fn HtmlRoot(nodes: Vec<RenderNode>) -> Element {
    nodes.render()
}

fn html_of(nodes: Vec<RenderNode>) -> String {
    let mut dom = VirtualDom::new_with_props(HtmlRoot, HtmlRootProps { nodes });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

impl RenderNode {
    /// Everything spread onto the element: the class first, then the
    /// forwarded attributes, then a listener for each handler that is set.
    pub(crate) fn dom_attributes(&self) -> Vec<Attribute> {
        let mut attributes = Vec::with_capacity(self.attributes.len() + 1);
        if !self.class.is_empty() {
            attributes.push(Attribute::new("class", self.class.to_string(), None, false));
        }
        attributes.extend(self.attributes.iter().cloned());

        let Listeners {
            onclick,
            onmouseenter,
            onmouseleave,
        } = self.listeners;
        if let Some(handler) = onclick {
            attributes.push(dioxus_elements::events::onclick(move |evt: MouseEvent| {
                handler.call(evt)
            }));
        }
        if let Some(handler) = onmouseenter {
            attributes.push(dioxus_elements::events::onmouseenter(
                move |evt: MouseEvent| handler.call(evt),
            ));
        }
        if let Some(handler) = onmouseleave {
            attributes.push(dioxus_elements::events::onmouseleave(
                move |evt: MouseEvent| handler.call(evt),
            ));
        }
        attributes
    }
}

impl Render for RenderNode {
    fn render(&self) -> Element {
        let attributes = self.dom_attributes();
        let children = self.children.iter().map(|child| child.render());

        match self.tag {
            Tag::Div => rsx! {
                div { ..attributes, {children} }
            },
            Tag::Nav => rsx! {
                nav { ..attributes, {children} }
            },
            Tag::Ul => rsx! {
                ul { ..attributes, {children} }
            },
            Tag::Li => rsx! {
                li { ..attributes, {children} }
            },
            Tag::A => rsx! {
                a { ..attributes, {children} }
            },
            Tag::H1 => rsx! {
                h1 { ..attributes, {children} }
            },
            Tag::P => rsx! {
                p { ..attributes, {children} }
            },
            Tag::Button => rsx! {
                button { ..attributes, {children} }
            },
            Tag::Span => rsx! {
                span { ..attributes, {children} }
            },
            Tag::Hr => rsx! {
                hr { ..attributes }
            },
        }
    }

    fn to_html(&self) -> String {
        html_of(vec![self.clone()])
    }
}

impl Render for Vec<RenderNode> {
    fn render(&self) -> Element {
        rsx! {
            for node in self.iter() {
                {node.render()}
            }
        }
    }

    fn to_html(&self) -> String {
        html_of(self.clone())
    }
}

impl Node {
    pub fn render(&self) -> Element {
        match self {
            Node::Element(node) => node.render(),
            Node::Text(text) => rsx! { "{text}" },
            Node::Markup(element) => element.clone(),
        }
    }
}
