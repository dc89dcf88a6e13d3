//! Fundamental-style presentational components for Dioxus.
//!
//! Every component is a pure mapping from its props to element descriptors
//! ([`view::RenderNode`]) carrying the Fundamental class vocabulary, followed
//! by a thin Dioxus wrapper that renders them. Props a component does not
//! recognize are forwarded untouched to its root element, and so are the
//! `onclick`, `onmouseenter` and `onmouseleave` handlers.

pub mod components;
pub mod config;
pub mod error;
pub mod validate;
pub mod view;

pub use components::*;
pub use config::{use_ui_config, UiConfig, UiConfigProvider};
pub use error::{PropError, PropErrorKind, PropViolation};
pub use view::{
    AttributeSet, Children, ClassNames, Listeners, Node, Render, RenderNode, Tag,
};
