use dioxus::prelude::*;
use validator::Validate;

use crate::components::{
    container, forwarded, render_component, root_listeners, slot_props, Compose, RootListeners,
};
use crate::config::UiConfig;
use crate::validate::report_violations;
use crate::view::{AttributeSet, Children, ClassNames, Listeners, Node, RenderNode, Tag};

root_listeners!(MenuProps, MenuListProps, MenuGroupProps);

/// Navigation menu root.
#[derive(Props, Clone, PartialEq, Default)]
pub struct MenuProps {
    #[props(default)]
    pub addon_before: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    #[props(default, into)]
    pub children: Children,
}

impl Compose for MenuProps {
    const DISPLAY_NAME: &'static str = "Menu";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[(
        "addon_before",
        "Set to **true** enables menu items with add-on before.",
    )];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        container(
            Tag::Nav,
            ClassNames::base(config.class("menu"))
                .with_if(self.addon_before, config.class("menu--addon-before")),
            &self.attributes,
            self.listeners(),
            &self.children,
        )
    }
}

#[component]
pub fn Menu(props: MenuProps) -> Element {
    render_component(&props)
}

#[derive(Props, Clone, PartialEq, Default)]
pub struct MenuListProps {
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    #[props(default, into)]
    pub children: Children,
}

impl Compose for MenuListProps {
    const DISPLAY_NAME: &'static str = "MenuList";
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        container(
            Tag::Ul,
            ClassNames::base(config.class("menu__list")),
            &self.attributes,
            self.listeners(),
            &self.children,
        )
    }
}

#[component]
pub fn MenuList(props: MenuListProps) -> Element {
    render_component(&props)
}

/// Classes and attributes handed to a caller-rendered link element.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSlot {
    /// The item classes, plus the link modifier when `is_link` is set.
    pub class: ClassNames,
    /// The item's `url_props`.
    pub attributes: AttributeSet,
}

impl LinkSlot {
    /// Attributes to spread onto the link element: the slot's classes
    /// followed by `own`, then the slot's attributes.
    pub fn spread(&self, own: &str) -> Vec<Attribute> {
        let class = ClassNames::merge(&self.class, &ClassNames::base(own));
        let mut attributes = vec![Attribute::new("class", class.to_string(), None, false)];
        attributes.extend(self.attributes.iter().cloned());
        attributes
    }
}

/// One entry of a menu list.
///
/// The link slot is chosen in order: an anchor for `url`; otherwise the
/// caller's own link element, either rendered by `link` or given as a single
/// [`RenderNode`] child, which takes on the item classes itself; otherwise
/// any other content wrapped in a plain anchor; otherwise nothing. A
/// `separator` is emitted after the list item, not inside it.
#[derive(Props, Clone, PartialEq, Default)]
pub struct MenuItemProps {
    #[props(into)]
    pub url: Option<String>,
    #[props(default)]
    pub is_link: bool,
    #[props(default)]
    pub separator: bool,
    /// Icon name shown before the link.
    #[props(into)]
    pub addon: Option<String>,
    /// Handler for the link element.
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Renders a router link or similar element from the computed
    /// [`LinkSlot`]. Ignored when `url` is set.
    #[props(default)]
    pub link: Option<Callback<LinkSlot, Element>>,
    #[props(default)]
    pub addon_props: AttributeSet,
    /// Extra attributes for the link element.
    #[props(default)]
    pub url_props: AttributeSet,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    #[props(default, into)]
    pub children: Children,
}

impl MenuItemProps {
    fn link(&self, config: &UiConfig) -> Option<Node> {
        let item = ClassNames::base(config.class("menu__item"));
        let link_classes = item.clone().with_if(self.is_link, config.class("menu__link"));
        let url_props = slot_props(&self.url_props);

        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(
                RenderNode::new(Tag::A)
                    .attributes(&url_props)
                    .class(link_classes)
                    .attr("href", url)
                    .on_click(self.onclick)
                    .children(self.children.clone())
                    .into(),
            );
        }

        if let Some(render_link) = self.link {
            let slot = LinkSlot {
                class: link_classes,
                attributes: url_props,
            };
            return Some(Node::Markup(render_link.call(slot)));
        }

        match &self.children {
            Children::Single(child) => {
                let classes = ClassNames::merge(&link_classes, child.class_names());
                Some(child.clone().class(classes).attributes(&url_props).into())
            }
            // The fallback anchor never carries the link modifier.
            children if !children.is_empty() => Some(
                RenderNode::new(Tag::A)
                    .attributes(&url_props)
                    .class(item)
                    .on_click(self.onclick)
                    .children(children.clone())
                    .into(),
            ),
            _ => None,
        }
    }
}

impl Compose for MenuItemProps {
    const DISPLAY_NAME: &'static str = "MenuItem";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[
        ("addon", "Name of the icon to be applied as an add-on before."),
        ("addon_props", "Additional props to be spread to the add-on section."),
        (
            "children",
            "A router link or any other element which emits an `<a>`.",
        ),
        ("is_link", "Set to **true** to style as a link."),
        (
            "link",
            "Renders a router link from the item classes and `url_props`.",
        ),
        ("separator", "Set to **true** to add a horizontal line (separator)."),
        (
            "url",
            "Value of the anchor's `href`. Should use either a link child or `url`, but not both.",
        ),
        ("url_props", "Additional props to be spread to the Menu Item links."),
    ];
    type Output = Vec<RenderNode>;

    fn compose(&self, config: &UiConfig) -> Vec<RenderNode> {
        let (class, rest) = forwarded(&self.attributes);
        let mut item = RenderNode::new(Tag::Li)
            .attributes(&rest)
            .class(ClassNames::new().with_opt(class.as_deref()))
            .listeners(Listeners::new(None, self.onmouseenter, self.onmouseleave));

        if let Some(addon) = self.addon.as_deref().filter(|a| !a.is_empty()) {
            item = item.child(
                RenderNode::new(Tag::Div)
                    .attributes(&slot_props(&self.addon_props))
                    .class(ClassNames::base(config.class("menu__addon-before")))
                    .child(RenderNode::new(Tag::Span).class(ClassNames::base(config.icon(addon)))),
            );
        }
        if let Some(link) = self.link(config) {
            item = item.child(link);
        }

        let mut nodes = vec![item];
        if self.separator {
            nodes.push(RenderNode::new(Tag::Hr));
        }
        nodes
    }
}

#[component]
pub fn MenuItem(props: MenuItemProps) -> Element {
    render_component(&props)
}

/// Titled group of menu entries.
#[derive(Props, Clone, PartialEq, Default, Validate)]
pub struct MenuGroupProps {
    #[props(into)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[props(default)]
    pub title_props: AttributeSet,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    #[props(default, into)]
    pub children: Children,
}

impl Compose for MenuGroupProps {
    const DISPLAY_NAME: &'static str = "MenuGroup";
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        report_violations(Self::DISPLAY_NAME, self);

        let (class, rest) = forwarded(&self.attributes);
        RenderNode::new(Tag::Div)
            .attributes(&rest)
            .class(ClassNames::base(config.class("menu__group")).with_opt(class.as_deref()))
            .listeners(self.listeners())
            .child(
                RenderNode::new(Tag::H1)
                    .attributes(&slot_props(&self.title_props))
                    .class(ClassNames::base(config.class("menu__title")))
                    .children(Children::text(self.title.as_str())),
            )
            .children(self.children.clone())
    }
}

#[component]
pub fn MenuGroup(props: MenuGroupProps) -> Element {
    render_component(&props)
}
