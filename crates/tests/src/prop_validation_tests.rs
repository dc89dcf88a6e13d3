//! Contract violations are reported but never stop rendering.

use crate::common_ui::config;
use fundamental_ui::validate::ValidateProps;
use fundamental_ui::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_titles_are_flagged() {
    let header = ActionBarHeaderProps::default();
    let err = header
        .validate_props(ActionBarHeaderProps::DISPLAY_NAME)
        .unwrap_err();
    assert_eq!(err.component, "ActionBarHeader");
    assert_eq!(err.violation("title").unwrap().kind, PropErrorKind::Missing);

    let group = MenuGroupProps::default();
    let err = group.validate_props(MenuGroupProps::DISPLAY_NAME).unwrap_err();
    assert_eq!(err.to_string(), "MenuGroup: title (Missing): title is required");
}

#[test]
fn grid_ranges_are_flagged() {
    let panel = PanelProps {
        col_span: Some(7),
        ..Default::default()
    };
    let err = panel.validate_props(PanelProps::DISPLAY_NAME).unwrap_err();
    assert_eq!(
        err.violation("col_span").unwrap().kind,
        PropErrorKind::OutOfRange
    );

    let grid = PanelGridProps {
        cols: Some(0),
        ..Default::default()
    };
    let err = grid.validate_props(PanelGridProps::DISPLAY_NAME).unwrap_err();
    assert_eq!(
        err.violation("cols").unwrap().message,
        "cols must be between 1 and 6"
    );
}

#[test]
fn valid_props_pass() {
    for span in 1..=6u8 {
        let panel = PanelProps {
            col_span: Some(span),
            ..Default::default()
        };
        assert!(panel.validate_props("Panel").is_ok());
    }
    assert!(PanelProps::default().validate_props("Panel").is_ok());
    assert!(MenuGroupProps {
        title: "Account".into(),
        ..Default::default()
    }
    .validate_props("MenuGroup")
    .is_ok());
}

#[test]
fn violations_degrade_instead_of_failing() {
    let header = ActionBarHeaderProps::default().compose(&config());
    let heading = header.elements().next().unwrap();
    assert_eq!(heading.tag(), Tag::H1);
    assert!(heading.text_content().is_empty());

    let group = MenuGroupProps::default().compose(&config());
    assert_eq!(group.elements().next().unwrap().tag(), Tag::H1);

    let panel = PanelProps {
        col_span: Some(9),
        ..Default::default()
    }
    .compose(&config());
    assert_eq!(panel.class_names().to_string(), "fd-panel");
}
