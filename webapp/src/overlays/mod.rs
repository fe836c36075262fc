use dioxus::prelude::*;

use crate::components::AppProps;

mod contact;
use contact::ContactModal;

mod lightbox;
use lightbox::LightboxView;

mod product;
use product::ProductModal;

mod project;
use project::ProjectModal;

// stacked in paint order, so the lightbox sits over the project modal it opens from
#[component]
pub fn Overlays(props: AppProps) -> Element {
    let app = props.app;

    rsx! {
        ContactModal { app }
        ProjectModal { app }
        ProductModal { app }
        LightboxView { app }
    }
}
