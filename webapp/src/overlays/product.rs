use dioxus::prelude::*;

use common::{Command, overlay::Overlay};

use crate::{
    components::{AppProps, image::FallbackImage, modal::OverlayShell},
    effects::run,
};

#[component]
pub fn ProductModal(props: AppProps) -> Element {
    let app = props.app;
    let Some(detail) = app.read().overlays().product().cloned() else {
        return rsx! {};
    };
    let price_class = format!("modal-price {}", detail.price.class());

    rsx! {
        OverlayShell {
            app,
            overlay: Overlay::Product,
            id: "product-modal",
            class: "product-modal",

            h2 { id: "product-modal-title", class: "modal-title", "{detail.name}" }

            div { id: "product-modal-images",
                FallbackImage {
                    key: "{detail.image.src}",
                    image: detail.image.clone(),
                    class: "product-modal-image",
                }
            }

            p { id: "product-modal-description", "{detail.description}" }

            div { class: "product-modal-footer",
                span { id: "product-modal-price", class: "{price_class}", "{detail.price.label}" }
                button {
                    id: "product-purchase-btn",
                    class: "btn btn-primary",
                    disabled: detail.purchase_link.is_none(),
                    onclick: move |_| run(app, Command::Purchase),
                    if detail.price.free { "Get It" } else { "Buy Now" }
                }
            }
        }
    }
}
