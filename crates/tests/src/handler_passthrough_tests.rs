//! Caller handlers land on each component's root element.

use crate::common_ui::{config, in_scope};
use dioxus::prelude::*;
use fundamental_ui::*;
use pretty_assertions::assert_eq;

fn handler() -> EventHandler<MouseEvent> {
    EventHandler::new(|_| {})
}

#[test]
fn action_bar_family_forwards_root_handlers() {
    in_scope(|| {
        let click = handler();
        let enter = handler();

        let bar = ActionBarProps {
            onclick: Some(click),
            onmouseenter: Some(enter),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(bar.event_listeners(), Listeners::new(Some(click), Some(enter), None));

        let mobile = ActionBarProps {
            mobile: true,
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert!(mobile.event_listeners().is_empty());
        let inner = mobile.find_by_class("fd-action-bar").unwrap();
        assert_eq!(inner.event_listeners().onclick, Some(click));

        let header = ActionBarHeaderProps {
            title: "Orders".into(),
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(header.event_listeners().onclick, Some(click));

        let actions = ActionBarActionsProps {
            onmouseenter: Some(enter),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(actions.event_listeners().onmouseenter, Some(enter));
    });
}

#[test]
fn back_click_goes_to_the_button() {
    in_scope(|| {
        let click = handler();
        let leave = handler();
        let back = ActionBarBackProps {
            onclick: Some(click),
            onmouseleave: Some(leave),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(back.event_listeners(), Listeners::new(None, None, Some(leave)));
        let button = back.elements().next().unwrap();
        assert_eq!(button.event_listeners().onclick, Some(click));
    });
}

#[test]
fn menu_family_forwards_root_handlers() {
    in_scope(|| {
        let click = handler();
        let enter = handler();

        let menu = MenuProps {
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(menu.event_listeners().onclick, Some(click));

        let list = MenuListProps {
            onmouseenter: Some(enter),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(list.event_listeners().onmouseenter, Some(enter));

        let group = MenuGroupProps {
            title: "Account".into(),
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(group.event_listeners().onclick, Some(click));

        let nodes = MenuItemProps {
            url: Some("/profile".into()),
            onclick: Some(click),
            onmouseenter: Some(enter),
            children: Children::text("Profile"),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(nodes[0].event_listeners(), Listeners::new(None, Some(enter), None));
        let link = nodes[0].elements().next().unwrap();
        assert_eq!(link.event_listeners().onclick, Some(click));
    });
}

#[test]
fn panel_family_forwards_root_handlers() {
    in_scope(|| {
        let click = handler();
        let enter = handler();
        let leave = handler();

        let panel = PanelProps {
            onclick: Some(click),
            onmouseenter: Some(enter),
            onmouseleave: Some(leave),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(
            panel.event_listeners(),
            Listeners::new(Some(click), Some(enter), Some(leave))
        );

        let grid = PanelGridProps {
            onmouseleave: Some(leave),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(grid.event_listeners().onmouseleave, Some(leave));

        let footer = PanelSlotProps {
            slot: PanelSlot::Footer,
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(footer.event_listeners().onclick, Some(click));

        let head = PanelHeadProps {
            title: Some("Sales".into()),
            onclick: Some(click),
            ..Default::default()
        }
        .compose(&config());
        assert_eq!(head.event_listeners().onclick, Some(click));
        assert!(head.elements().all(|n| n.event_listeners().is_empty()));
    });
}
