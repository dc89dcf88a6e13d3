//! Element descriptors produced by the components.
//!
//! A [`RenderNode`] is plain data: a tag, its computed classes, forwarded
//! attributes and children. Components build descriptors and hand them to
//! [`Render`] for the host renderer; nothing is mutated once built.

mod attributes;
mod class_names;
mod render;

use std::fmt;

use dioxus::prelude::*;

pub use attributes::AttributeSet;
pub use class_names::ClassNames;
pub use render::Render;

/// Element kinds the components emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Nav,
    Ul,
    Li,
    A,
    H1,
    P,
    Button,
    Span,
    Hr,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Nav => "nav",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::A => "a",
            Tag::H1 => "h1",
            Tag::P => "p",
            Tag::Button => "button",
            Tag::Span => "span",
            Tag::Hr => "hr",
        }
    }
}

/// Event handlers registered on a node's element. Only handlers that are set
/// become listeners.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Listeners {
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
}

impl Listeners {
    pub fn new(
        onclick: Option<EventHandler<MouseEvent>>,
        onmouseenter: Option<EventHandler<MouseEvent>>,
        onmouseleave: Option<EventHandler<MouseEvent>>,
    ) -> Self {
        Self {
            onclick,
            onmouseenter,
            onmouseleave,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.onclick.is_none() && self.onmouseenter.is_none() && self.onmouseleave.is_none()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("onclick", &self.onclick.is_some())
            .field("onmouseenter", &self.onmouseenter.is_some())
            .field("onmouseleave", &self.onmouseleave.is_some())
            .finish()
    }
}

/// One child of a [`RenderNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(RenderNode),
    Text(String),
    /// Host markup passed through untouched, e.g. a component's `children`.
    Markup(Element),
}

impl From<RenderNode> for Node {
    fn from(node: RenderNode) -> Self {
        Node::Element(node)
    }
}

/// What a caller placed inside a component.
///
/// The variant decides how link-bearing components treat the content: only
/// a [`Children::Single`] element can take on the component's classes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    #[default]
    Empty,
    Text(String),
    Single(RenderNode),
    List(Vec<Node>),
}

impl Children {
    pub fn text(text: impl Into<String>) -> Self {
        Children::Text(text.into())
    }

    /// Opaque host markup, e.g. the `children` of a Dioxus component.
    pub fn markup(element: Element) -> Self {
        Children::List(vec![Node::Markup(element)])
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Children::Empty => true,
            Children::Text(text) => text.is_empty(),
            Children::Single(_) => false,
            Children::List(nodes) => nodes.is_empty(),
        }
    }

    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Children::Empty => Vec::new(),
            Children::Text(text) if text.is_empty() => Vec::new(),
            Children::Text(text) => vec![Node::Text(text)],
            Children::Single(node) => vec![Node::Element(node)],
            Children::List(nodes) => nodes,
        }
    }
}

impl From<RenderNode> for Children {
    fn from(node: RenderNode) -> Self {
        Children::Single(node)
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::text(text)
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Children::markup(element)
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children::List(nodes)
    }
}

/// An immutable element descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    tag: Tag,
    class: ClassNames,
    attributes: AttributeSet,
    listeners: Listeners,
    children: Vec<Node>,
}

impl RenderNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class: ClassNames::new(),
            attributes: AttributeSet::new(),
            listeners: Listeners::default(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: ClassNames) -> Self {
        self.class = class;
        self
    }

    /// Overlay `attributes` onto the node's own; the overlay wins.
    pub fn attributes(mut self, attributes: &AttributeSet) -> Self {
        self.attributes = self.attributes.merge(attributes);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes = self.attributes.with(name, value);
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.attributes = self.attributes.with_style(property, value);
        self
    }

    pub fn on_click(mut self, handler: Option<EventHandler<MouseEvent>>) -> Self {
        self.listeners.onclick = handler;
        self
    }

    /// Replace every listener of the node.
    pub fn listeners(mut self, listeners: Listeners) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn children(mut self, children: Children) -> Self {
        self.children.extend(children.into_nodes());
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.class
    }

    pub fn attribute_set(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn event_listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and markup.
    pub fn elements(&self) -> impl Iterator<Item = &RenderNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(node) => Some(node),
            _ => None,
        })
    }

    /// Concatenated text of the direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Depth-first search for the first element carrying `token`.
    pub fn find_by_class(&self, token: &str) -> Option<&RenderNode> {
        if self.class.contains(token) {
            return Some(self);
        }
        self.elements().find_map(|node| node.find_by_class(token))
    }
}
