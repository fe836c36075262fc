use dioxus::prelude::*;

use common::{App, Command, config::FaqEntry, render::Slot, render::TextSlot, screen::Screen};

use super::ScreenFrame;
use crate::{
    components::{AppProps, cards::SlotView, navigation::NavBar},
    effects::run,
};

#[derive(Clone, PartialEq, Props)]
struct FaqItemProps {
    app: Signal<App>,
    index: usize,
    entry: FaqEntry,
}

#[component]
fn FaqItem(props: FaqItemProps) -> Element {
    let app = props.app;
    let index = props.index;
    let open = app.read().faq().is_open(index);

    rsx! {
        div { class: if open { "faq-item active" } else { "faq-item" },
            button {
                class: "faq-question",
                onclick: move |_| run(app, Command::ToggleFaq(index)),
                span { "{props.entry.question}" }
                span { class: "faq-toggle", if open { "−" } else { "+" } }
            }
            div { class: "faq-answer",
                p { "{props.entry.answer}" }
            }
        }
    }
}

#[component]
pub fn PortfolioScreen(props: AppProps) -> Element {
    let app = props.app;
    let (count, faq) = {
        let state = app.read();
        (
            state
                .scene()
                .text(TextSlot::ProjectCount)
                .unwrap_or("0")
                .to_owned(),
            state.config().faq.clone(),
        )
    };

    rsx! {
        ScreenFrame { app, screen: Screen::Portfolio,
            NavBar { app }

            section { id: "home", class: "portfolio-hero",
                div { class: "container",
                    h1 { class: "hero-title", "Past Work" }
                    p { class: "hero-subtitle",
                        span { id: "project-count", class: "stat-value", "{count}" }
                        " projects delivered"
                    }
                    div { class: "hero-actions",
                        button {
                            id: "hire-me-btn",
                            class: "btn btn-primary",
                            onclick: move |_| run(app, Command::HireMe),
                            "Hire Me"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| run(app, Command::ContactMe),
                            "Contact"
                        }
                    }
                }
            }

            section { id: "work", class: "work-section",
                div { class: "container",
                    h2 { class: "section-title", "Projects" }
                    SlotView { app, slot: Slot::ProjectsGrid, class: "projects-grid" }
                }
            }

            section { id: "reviews", class: "reviews-section",
                div { class: "container",
                    h2 { class: "section-title", "Reviews" }
                    div { class: "reviews-slider",
                        SlotView { app, slot: Slot::ReviewsSlider, class: "reviews-track" }
                    }
                }
            }

            section { id: "faq", class: "faq-section",
                div { class: "container",
                    h2 { class: "section-title", "FAQ" }
                    div { class: "faq-list",
                        for (index, entry) in faq.into_iter().enumerate() {
                            FaqItem { key: "{index}", app, index, entry }
                        }
                    }
                }
            }
        }
    }
}
