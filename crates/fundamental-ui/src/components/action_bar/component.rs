use dioxus::prelude::*;
use validator::Validate;

use crate::components::{
    container, forwarded, render_component, root_listeners, slot_props, Compose, RootListeners,
};
use crate::config::UiConfig;
use crate::validate::report_violations;
use crate::view::{AttributeSet, Children, ClassNames, Listeners, RenderNode, Tag};

root_listeners!(ActionBarProps, ActionBarHeaderProps, ActionBarActionsProps);

/// Page-level bar holding a back button, a header and actions.
#[derive(Props, Clone, PartialEq, Default)]
pub struct ActionBarProps {
    #[props(default)]
    pub mobile: bool,
    /// Wrapper width in mobile view; the config default when unset.
    #[props(into)]
    pub width: Option<String>,
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

impl Compose for ActionBarProps {
    const DISPLAY_NAME: &'static str = "ActionBar";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[
        ("mobile", "Set to **true** for mobile view of the Action Bar."),
        ("width", "The width of the Action Bar in mobile view."),
    ];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        let bar = container(
            Tag::Div,
            ClassNames::base(config.class("action-bar")),
            &self.attributes,
            self.listeners(),
            &self.children,
        );
        if !self.mobile {
            return bar;
        }

        let width = self
            .width
            .clone()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| config.action_bar_width.clone());
        RenderNode::new(Tag::Div).style("width", width).child(bar)
    }
}

#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    render_component(&props)
}

/// Back navigation button of an action bar.
#[derive(Props, Clone, PartialEq, Default)]
pub struct ActionBarBackProps {
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Extra attributes for the inner button.
    #[props(default)]
    pub button_props: AttributeSet,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
}

impl Compose for ActionBarBackProps {
    const DISPLAY_NAME: &'static str = "ActionBarBack";
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        let button = RenderNode::new(Tag::Button)
            .attributes(&slot_props(&self.button_props))
            .class(
                ClassNames::base(config.class("button--light"))
                    .with(config.class("button--compact"))
                    .with(config.icon("nav-back")),
            )
            .on_click(self.onclick);

        let (class, rest) = forwarded(&self.attributes);
        RenderNode::new(Tag::Div)
            .attributes(&rest)
            .class(ClassNames::base(config.class("action-bar__back")).with_opt(class.as_deref()))
            .listeners(Listeners::new(None, self.onmouseenter, self.onmouseleave))
            .child(button)
    }
}

#[component]
pub fn ActionBarBack(props: ActionBarBackProps) -> Element {
    render_component(&props)
}

/// Title and optional description of an action bar.
#[derive(Props, Clone, PartialEq, Default, Validate)]
pub struct ActionBarHeaderProps {
    #[props(into)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[props(into)]
    pub description: Option<String>,
    #[props(default)]
    pub title_props: AttributeSet,
    /// Extra attributes for the description paragraph.
    #[props(default)]
    pub description_props: AttributeSet,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
}

impl Compose for ActionBarHeaderProps {
    const DISPLAY_NAME: &'static str = "ActionBarHeader";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[
        ("description", "Localized text for the description."),
        (
            "description_props",
            "Additional props to be spread to the description's `<p>` element.",
        ),
    ];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        report_violations(Self::DISPLAY_NAME, self);

        // A missing title still renders an empty heading.
        let title = RenderNode::new(Tag::H1)
            .attributes(&slot_props(&self.title_props))
            .class(ClassNames::base(config.class("action-bar__title")))
            .children(Children::text(self.title.as_str()));

        let (class, rest) = forwarded(&self.attributes);
        let mut header = RenderNode::new(Tag::Div)
            .attributes(&rest)
            .class(ClassNames::base(config.class("action-bar__header")).with_opt(class.as_deref()))
            .listeners(self.listeners())
            .child(title);

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            header = header.child(
                RenderNode::new(Tag::P)
                    .attributes(&slot_props(&self.description_props))
                    .class(ClassNames::base(config.class("action-bar__description")))
                    .text(description),
            );
        }
        header
    }
}

#[component]
pub fn ActionBarHeader(props: ActionBarHeaderProps) -> Element {
    render_component(&props)
}

#[derive(Props, Clone, PartialEq, Default)]
pub struct ActionBarActionsProps {
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

impl Compose for ActionBarActionsProps {
    const DISPLAY_NAME: &'static str = "ActionBarActions";
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        container(
            Tag::Div,
            ClassNames::base(config.class("action-bar__actions")),
            &self.attributes,
            self.listeners(),
            &self.children,
        )
    }
}

/// Container for the action bar's buttons.
#[component]
pub fn ActionBarActions(props: ActionBarActionsProps) -> Element {
    render_component(&props)
}
