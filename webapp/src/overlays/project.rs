use dioxus::prelude::*;

use common::{App, Command, overlay::GalleryImage, overlay::Overlay};

use crate::{
    components::{AppProps, image::FallbackImage, modal::OverlayShell},
    effects::run,
};

#[derive(Clone, PartialEq, Props)]
struct GalleryThumbProps {
    app: Signal<App>,
    thumb: GalleryImage,
}

#[component]
fn GalleryThumb(props: GalleryThumbProps) -> Element {
    let app = props.app;
    let index = props.thumb.index;
    let style = format!("animation-delay: {}ms;", props.thumb.delay_ms);

    rsx! {
        div {
            class: "modal-image-frame",
            "data-index": "{index}",
            onclick: move |_| run(app, Command::OpenLightbox(index)),
            FallbackImage { image: props.thumb.image.clone(), class: "modal-image", style }
        }
    }
}

#[component]
pub fn ProjectModal(props: AppProps) -> Element {
    let app = props.app;
    let Some(detail) = app.read().overlays().project().cloned() else {
        return rsx! {};
    };

    rsx! {
        OverlayShell {
            app,
            overlay: Overlay::Project,
            id: "project-modal",
            class: "project-modal",

            h2 { id: "modal-title", class: "modal-title", "{detail.title}" }

            div { id: "modal-description",
                div { class: "description-section",
                    div { class: "description-header",
                        div { class: "description-icon", "📝" }
                        h4 { class: "description-title", "Project Description" }
                    }
                    div { class: "description-body", "{detail.description}" }
                    if let Some(price) = &detail.price {
                        div { class: "modal-price-display", "{price}" }
                    }
                }
            }

            div { id: "modal-images",
                div { class: "images-header",
                    h4 { class: "images-title", "Project Gallery" }
                    span { class: "image-counter", "{detail.counter}" }
                }
                div { class: "images-grid",
                    for thumb in detail.gallery.iter().cloned() {
                        GalleryThumb { key: "{thumb.index}", app, thumb }
                    }
                }
            }
        }
    }
}
