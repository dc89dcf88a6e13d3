use dioxus::prelude::*;
use validator::Validate;

use crate::components::{
    container, forwarded, render_component, root_listeners, Compose, RootListeners,
};
use crate::config::UiConfig;
use crate::validate::report_violations;
use crate::view::{Children, ClassNames, RenderNode, Tag};

root_listeners!(PanelProps, PanelGridProps, PanelSlotProps, PanelHeadProps);

/// Column spans and grid widths accepted by the stylesheet.
const GRID_COLUMNS: std::ops::RangeInclusive<u8> = 1..=6;

fn in_grid(value: Option<u8>) -> Option<u8> {
    value.filter(|n| GRID_COLUMNS.contains(n))
}

#[derive(Props, Clone, PartialEq, Default, Validate)]
pub struct PanelProps {
    /// Number of grid columns to span inside a `PanelGrid`.
    #[validate(range(min = 1, max = 6, message = "col_span must be between 1 and 6"))]
    pub col_span: Option<u8>,
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

impl Compose for PanelProps {
    const DISPLAY_NAME: &'static str = "Panel";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[(
        "col_span",
        "The number of columns to span inside a `PanelGrid`.",
    )];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        report_violations(Self::DISPLAY_NAME, self);

        let mut classes = ClassNames::base(config.class("panel"));
        if let Some(span) = in_grid(self.col_span) {
            classes = classes.with(config.class(&format!("has-grid-column-span-{span}")));
        }
        container(Tag::Div, classes, &self.attributes, self.listeners(), &self.children)
    }
}

#[component]
pub fn Panel(props: PanelProps) -> Element {
    render_component(&props)
}

#[derive(Props, Clone, PartialEq, Default, Validate)]
pub struct PanelGridProps {
    /// Remove the gaps between panels.
    #[props(default)]
    pub nogap: bool,
    #[validate(range(min = 1, max = 6, message = "cols must be between 1 and 6"))]
    pub cols: Option<u8>,
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

impl Compose for PanelGridProps {
    const DISPLAY_NAME: &'static str = "PanelGrid";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[
        ("cols", "The number of columns in the grid."),
        ("nogap", "Set to **true** to remove the margins between the panels."),
    ];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        report_violations(Self::DISPLAY_NAME, self);

        let mut classes = ClassNames::base(config.class("panel-grid"))
            .with_if(self.nogap, config.class("panel-grid--nogap"));
        if let Some(cols) = in_grid(self.cols) {
            classes = classes.with(config.class(&format!("panel-grid--{cols}col")));
        }
        container(Tag::Div, classes, &self.attributes, self.listeners(), &self.children)
    }
}

#[component]
pub fn PanelGrid(props: PanelGridProps) -> Element {
    render_component(&props)
}

/// Plain sub-regions of a panel; they differ only in their class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSlot {
    #[default]
    Body,
    Header,
    Actions,
    Filters,
    Content,
    Footer,
}

impl PanelSlot {
    fn class(&self) -> &'static str {
        match self {
            PanelSlot::Body => "panel__body",
            PanelSlot::Header => "panel__header",
            PanelSlot::Actions => "panel__actions",
            PanelSlot::Filters => "panel__filters",
            PanelSlot::Content => "panel__content",
            PanelSlot::Footer => "panel__footer",
        }
    }
}

#[derive(Props, Clone, PartialEq, Default)]
pub struct PanelSlotProps {
    /// Set by the slot components; only matters when composing directly.
    #[props(default)]
    pub slot: PanelSlot,
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

impl Compose for PanelSlotProps {
    const DISPLAY_NAME: &'static str = "PanelSlot";
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        container(
            Tag::Div,
            ClassNames::base(config.class(self.slot.class())),
            &self.attributes,
            self.listeners(),
            &self.children,
        )
    }
}

fn render_slot(slot: PanelSlot, props: PanelSlotProps) -> Element {
    render_component(&PanelSlotProps { slot, ..props })
}

#[component]
pub fn PanelBody(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Body, props)
}

#[component]
pub fn PanelHeader(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Header, props)
}

#[component]
pub fn PanelActions(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Actions, props)
}

#[component]
pub fn PanelFilters(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Filters, props)
}

#[component]
pub fn PanelContent(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Content, props)
}

#[component]
pub fn PanelFooter(props: PanelSlotProps) -> Element {
    render_slot(PanelSlot::Footer, props)
}

/// Title and description block of a panel header; both are optional.
#[derive(Props, Clone, PartialEq, Default)]
pub struct PanelHeadProps {
    #[props(into)]
    pub title: Option<String>,
    #[props(into)]
    pub description: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
}

impl Compose for PanelHeadProps {
    const DISPLAY_NAME: &'static str = "PanelHead";
    const PROP_DESCRIPTIONS: &'static [(&'static str, &'static str)] = &[
        ("description", "Localized text for the description of the panel."),
        ("title", "Localized text for the title of the panel."),
    ];
    type Output = RenderNode;

    fn compose(&self, config: &UiConfig) -> RenderNode {
        let (class, rest) = forwarded(&self.attributes);
        let mut head = RenderNode::new(Tag::Div)
            .attributes(&rest)
            .class(ClassNames::base(config.class("panel__head")).with_opt(class.as_deref()))
            .listeners(self.listeners());

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            head = head.child(
                RenderNode::new(Tag::H1)
                    .class(ClassNames::base(config.class("panel__title")))
                    .text(title),
            );
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            head = head.child(
                RenderNode::new(Tag::P)
                    .class(ClassNames::base(config.class("panel__description")))
                    .text(description),
            );
        }
        head
    }
}

#[component]
pub fn PanelHead(props: PanelHeadProps) -> Element {
    render_component(&props)
}
