use dioxus::prelude::*;
use fundamental_ui::*;

const UI_CONFIG: &str = include_str!("../fundamental.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> UiConfig {
    UiConfig::from_toml_str(UI_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid ui config, falling back to defaults");
        UiConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let mut mobile = use_signal(|| false);
    let mut last_action = use_signal(String::new);

    rsx! {
        UiConfigProvider { config,
            ActionBar { mobile: mobile(),
                ActionBarBack { onclick: move |_| last_action.set("back".to_string()) }
                ActionBarHeader {
                    title: "Component showcase",
                    description: "ActionBar, Menu and Panel families",
                }
                ActionBarActions {
                    button { onclick: move |_| mobile.set(!mobile()), "Toggle mobile" }
                }
            }
            Menu { addon_before: true,
                MenuGroup { title: "Navigation",
                    MenuList {
                        MenuItem { url: "#panels", is_link: true, addon: "grid", "Panels" }
                        MenuItem {
                            addon: "action",
                            onclick: move |_| last_action.set("menu".to_string()),
                            separator: true,
                            "Plain entry"
                        }
                        MenuItem {
                            is_link: true,
                            link: move |slot: LinkSlot| {
                                let attributes = slot.spread("showcase-link");
                                rsx! {
                                    a { href: "#about", ..attributes, "Custom link" }
                                }
                            },
                        }
                    }
                }
            }
            PanelGrid { cols: 3, id: "panels",
                Panel {
                    col_span: 2,
                    onmouseenter: move |_| last_action.set("hover".to_string()),
                    PanelHeader {
                        PanelHead { title: "Wide panel", description: "Spans two columns" }
                        PanelActions { "Last action: {last_action}" }
                    }
                    PanelFilters { "Filters" }
                    PanelBody { "Body" }
                    PanelFooter { "Footer" }
                }
                Panel {
                    PanelContent { "Narrow panel" }
                }
            }
        }
    }
}
