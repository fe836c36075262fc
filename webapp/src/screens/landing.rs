use dioxus::prelude::*;

use common::{Command, screen::Screen};

use super::ScreenFrame;
use crate::{components::AppProps, effects::run};

#[component]
pub fn LandingScreen(props: AppProps) -> Element {
    let app = props.app;
    let ready = app.read().is_ready();

    rsx! {
        ScreenFrame { app, screen: Screen::Landing,
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "hero-title", "Custom Builds" }
                        p { class: "hero-subtitle",
                            "Hand-made worlds, spawns and structures, built to order."
                        }
                        div { class: "hero-actions",
                            button {
                                id: "btn-straight-to-hiring",
                                class: "btn btn-primary btn-lg",
                                disabled: !ready,
                                onclick: move |_| run(app, Command::StraightToHiring),
                                "Hire Me"
                            }
                            button {
                                id: "btn-check-past-work",
                                class: "btn btn-secondary btn-lg",
                                disabled: !ready,
                                onclick: move |_| run(app, Command::CheckPastWork),
                                "Check Past Work"
                            }
                            button {
                                id: "btn-store",
                                class: "btn btn-secondary btn-lg",
                                disabled: !ready,
                                onclick: move |_| run(app, Command::OpenStore),
                                "Store"
                            }
                        }
                    }
                }
            }
        }
    }
}
