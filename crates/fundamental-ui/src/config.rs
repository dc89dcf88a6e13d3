use dioxus::prelude::*;
use serde::Deserialize;

/// Class-name vocabulary and defaults shared by every component.
///
/// The stylesheet the components target is namespaced; the prefixes here must
/// match the one it was built with. Every field falls back to the stock
/// Fundamental values when missing from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix of every component class token (`fd-` gives `fd-panel`).
    pub class_prefix: String,
    /// Prefix of icon-font class tokens (`sap-icon--` gives `sap-icon--cart`).
    pub icon_prefix: String,
    /// Width of the mobile action bar wrapper when the caller gives none.
    pub action_bar_width: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            class_prefix: "fd-".to_string(),
            icon_prefix: "sap-icon--".to_string(),
            action_bar_width: "319px".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a config from TOML, keeping defaults for omitted keys.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let config: UiConfig = toml::from_str(source)?;
        tracing::debug!(
            class_prefix = %config.class_prefix,
            icon_prefix = %config.icon_prefix,
            "loaded ui config"
        );
        Ok(config)
    }

    /// Namespaced component class, e.g. `class("menu__item")`.
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }

    /// Icon-font class for a named icon.
    pub fn icon(&self, name: &str) -> String {
        format!("{}{}", self.icon_prefix, name)
    }
}

/// Provide a [`UiConfig`] to every component rendered below.
#[component]
pub fn UiConfigProvider(config: UiConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

/// Read the nearest provided [`UiConfig`], or the defaults outside a provider.
pub fn use_ui_config() -> UiConfig {
    try_use_context::<UiConfig>().unwrap_or_default()
}
