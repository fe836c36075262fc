use dioxus::prelude::*;

use common::App;

pub mod cards;
pub mod image;
pub mod modal;
pub mod navigation;

// nearly every component needs the page state and nothing else
#[derive(Clone, PartialEq, Props)]
pub struct AppProps {
    pub app: Signal<App>,
}
