use dioxus::prelude::*;

use common::{
    App, Command,
    config::StyleChoice,
    render::{Slot, TextSlot},
    screen::Screen,
};

use super::ScreenFrame;
use crate::{
    components::{AppProps, cards::SlotView},
    effects::run,
};

#[derive(Clone, PartialEq, Props)]
struct StyleButtonProps {
    app: Signal<App>,
    choice: StyleChoice,
}

#[component]
fn StyleButton(props: StyleButtonProps) -> Element {
    let app = props.app;
    let key = props.choice.key.clone();
    let selected = app.read().selected_style() == Some(key.as_str());

    rsx! {
        div { class: if selected { "style-card selected" } else { "style-card" },
            h3 { class: "style-name", "{props.choice.label}" }
            p { class: "style-blurb", "{props.choice.blurb}" }
            button {
                class: "btn btn-primary choose-style-btn",
                "data-style": "{props.choice.key}",
                onclick: move |_| run(app, Command::ChooseStyle(key.clone())),
                "Choose"
            }
        }
    }
}

#[component]
pub fn StyleSelectionScreen(props: AppProps) -> Element {
    let app = props.app;
    let styles = app.read().config().styles.clone();

    rsx! {
        ScreenFrame { app, screen: Screen::StyleSelection,
            div { class: "container",
                div { class: "screen-header",
                    button {
                        id: "back-from-styles",
                        class: "btn btn-secondary",
                        onclick: move |_| run(app, Command::BackFromStyles),
                        "← Back"
                    }
                    h2 { class: "section-title", "Pick a Style" }
                }
                div { class: "styles-grid",
                    for choice in styles {
                        StyleButton { key: "{choice.key}", app, choice: choice.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsByStyleScreen(props: AppProps) -> Element {
    let app = props.app;
    let title = app
        .read()
        .scene()
        .text(TextSlot::StyleTitle)
        .unwrap_or_default()
        .to_owned();

    rsx! {
        ScreenFrame { app, screen: Screen::ProjectsByStyle,
            div { class: "container",
                div { class: "screen-header",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| run(app, Command::BackToStyles),
                        "← Styles"
                    }
                    h2 { id: "style-title", class: "section-title", "{title}" }
                }
                SlotView { app, slot: Slot::ProjectsList, class: "projects-list" }
                div { class: "cta",
                    p { "Want something different?" }
                    button {
                        id: "contact-me-btn",
                        class: "btn btn-primary",
                        onclick: move |_| run(app, Command::ContactMe),
                        "Contact Me"
                    }
                }
            }
        }
    }
}
