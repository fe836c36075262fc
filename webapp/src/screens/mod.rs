use dioxus::prelude::*;

use common::{App, screen::Screen};

mod landing;
pub use landing::LandingScreen;

mod portfolio;
pub use portfolio::PortfolioScreen;

mod store;
pub use store::StoreScreen;

mod styles;
pub use styles::{ProjectsByStyleScreen, StyleSelectionScreen};

#[derive(Clone, PartialEq, Props)]
struct ScreenFrameProps {
    app: Signal<App>,
    screen: Screen,
    children: Element,
}

// every screen is always in the page; only the active one carries the marker class
#[component]
fn ScreenFrame(props: ScreenFrameProps) -> Element {
    let active = props.app.read().screen() == props.screen;

    rsx! {
        div {
            id: props.screen.element_id(),
            class: if active { "screen active" } else { "screen" },
            {props.children}
        }
    }
}
