//! Behaviour shared by every component: passthrough, class ordering, purity.

use crate::common_ui::{caller_class, class_of, config, tracking_attr};
use fundamental_ui::{
    ActionBarActionsProps, ActionBarBackProps, ActionBarHeaderProps, ActionBarProps, Children,
    ClassNames, Compose, MenuGroupProps, MenuItemProps, MenuListProps, MenuProps, PanelGridProps,
    PanelHeadProps, PanelProps, PanelSlot, PanelSlotProps, RenderNode, Tag,
};
use pretty_assertions::assert_eq;

/// Root element of every component, each given the tracking attribute and a
/// caller class.
fn roots() -> Vec<(&'static str, RenderNode)> {
    let attrs = || vec![tracking_attr(), caller_class("caller")];
    let cfg = config();
    vec![
        (
            "ActionBar",
            ActionBarProps {
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "ActionBarBack",
            ActionBarBackProps {
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "ActionBarHeader",
            ActionBarHeaderProps {
                title: "Orders".into(),
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "ActionBarActions",
            ActionBarActionsProps {
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "Menu",
            MenuProps {
                addon_before: true,
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "MenuList",
            MenuListProps {
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "MenuItem",
            MenuItemProps {
                attributes: attrs(),
                children: Children::text("Home"),
                ..Default::default()
            }
            .compose(&cfg)
            .remove(0),
        ),
        (
            "MenuGroup",
            MenuGroupProps {
                title: "Account".into(),
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "Panel",
            PanelProps {
                col_span: Some(2),
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "PanelGrid",
            PanelGridProps {
                nogap: true,
                cols: Some(4),
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "PanelSlot",
            PanelSlotProps {
                slot: PanelSlot::Footer,
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
        (
            "PanelHead",
            PanelHeadProps {
                title: Some("Sales".into()),
                attributes: attrs(),
                ..Default::default()
            }
            .compose(&cfg),
        ),
    ]
}

#[test]
fn unrecognized_attributes_reach_the_root() {
    for (name, root) in roots() {
        assert_eq!(
            root.attribute_set().text("data-tracking-id"),
            Some("cta-42"),
            "{name} dropped the tracking attribute"
        );
    }
}

#[test]
fn recognized_class_never_leaks_into_attributes() {
    for (name, root) in roots() {
        assert!(
            !root.attribute_set().contains("class"),
            "{name} forwarded class as a plain attribute"
        );
    }
}

#[test]
fn caller_class_is_last_token() {
    for (name, root) in roots() {
        assert_eq!(root.class_names().last(), Some("caller"), "{name}");
    }
}

#[test]
fn modifiers_sit_between_base_and_caller() {
    let roots = roots();
    let class = |component: &str| {
        roots
            .iter()
            .find(|(name, _)| *name == component)
            .map(|(_, node)| class_of(node))
            .unwrap()
    };
    assert_eq!(class("Menu"), "fd-menu fd-menu--addon-before caller");
    assert_eq!(class("Panel"), "fd-panel fd-has-grid-column-span-2 caller");
    assert_eq!(
        class("PanelGrid"),
        "fd-panel-grid fd-panel-grid--nogap fd-panel-grid--4col caller"
    );
    assert_eq!(class("MenuItem"), "caller");
}

#[test]
fn composing_twice_gives_equal_trees() {
    assert_eq!(roots(), roots());

    let item = || MenuItemProps {
        url: Some("/a".into()),
        is_link: true,
        separator: true,
        addon: Some("home".into()),
        children: Children::Single(RenderNode::new(Tag::Span).text("A")),
        ..Default::default()
    };
    assert_eq!(item().compose(&config()), item().compose(&config()));
}

#[test]
fn mobile_passthrough_lands_on_inner_bar() {
    let node = ActionBarProps {
        mobile: true,
        attributes: vec![tracking_attr()],
        ..Default::default()
    }
    .compose(&config());
    assert!(!node.attribute_set().contains("data-tracking-id"));
    let bar = node.find_by_class("fd-action-bar").unwrap();
    assert_eq!(bar.attribute_set().text("data-tracking-id"), Some("cta-42"));
}

#[test]
fn cloned_link_child_keeps_its_own_class_after_item_classes() {
    let child = RenderNode::new(Tag::A).class(ClassNames::base("nav-link active"));
    let nodes = MenuItemProps {
        is_link: true,
        children: Children::Single(child.clone()),
        ..Default::default()
    }
    .compose(&config());
    let link = nodes[0].elements().next().unwrap();
    assert_eq!(
        link.class_names().tokens().collect::<Vec<_>>(),
        vec!["fd-menu__item", "fd-menu__link", "nav-link", "active"]
    );
    assert_eq!(class_of(&child), "nav-link active");
}

#[test]
fn separator_is_a_sibling_not_a_descendant() {
    let nodes = MenuItemProps {
        separator: true,
        url: Some("/logout".into()),
        children: Children::text("Logout"),
        ..Default::default()
    }
    .compose(&config());
    assert_eq!(
        nodes.iter().map(RenderNode::tag).collect::<Vec<_>>(),
        vec![Tag::Li, Tag::Hr]
    );
    fn has_hr(node: &RenderNode) -> bool {
        node.elements().any(|n| n.tag() == Tag::Hr || has_hr(n))
    }
    assert!(!has_hr(&nodes[0]));
}
