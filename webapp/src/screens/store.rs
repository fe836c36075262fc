use dioxus::prelude::*;

use common::{Command, render::Slot, screen::Screen};

use super::ScreenFrame;
use crate::{
    components::{AppProps, cards::SlotView},
    effects::run,
};

#[component]
pub fn StoreScreen(props: AppProps) -> Element {
    let app = props.app;

    rsx! {
        ScreenFrame { app, screen: Screen::Store,
            div { class: "container",
                div { class: "screen-header",
                    button {
                        id: "back-from-store",
                        class: "btn btn-secondary",
                        onclick: move |_| run(app, Command::BackFromStore),
                        "← Back"
                    }
                    h2 { class: "section-title", "Store" }
                }
                SlotView { app, slot: Slot::StoreProductsGrid, class: "products-grid" }
            }
        }
    }
}
