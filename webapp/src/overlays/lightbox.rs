use dioxus::prelude::*;

use common::{Command, overlay::Overlay};

use crate::{
    components::{AppProps, image::FallbackImage, modal::OverlayShell},
    effects::run,
};

#[component]
pub fn LightboxView(props: AppProps) -> Element {
    let app = props.app;
    let (current, position) = {
        let state = app.read();
        let lightbox = state.overlays().lightbox();

        if !lightbox.is_open() {
            return rsx! {};
        }

        (
            lightbox.current(),
            format!("{} / {}", lightbox.index() + 1, lightbox.len()),
        )
    };

    rsx! {
        OverlayShell {
            app,
            overlay: Overlay::Lightbox,
            id: "lightbox",
            class: "lightbox-content",

            button {
                id: "lightbox-prev",
                class: "lightbox-nav prev",
                onclick: move |_| run(app, Command::PrevImage),
                "‹"
            }

            if let Some(image) = current {
                FallbackImage { key: "{image.src}", image: image.clone(), class: "lightbox-img" }
            }

            button {
                id: "lightbox-next",
                class: "lightbox-nav next",
                onclick: move |_| run(app, Command::NextImage),
                "›"
            }

            span { class: "lightbox-position", "{position}" }
        }
    }
}
