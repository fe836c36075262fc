use dioxus::prelude::*;

use common::{Command, overlay::Overlay};

use crate::{
    components::{AppProps, modal::OverlayShell},
    effects::run,
};

#[component]
pub fn ContactModal(props: AppProps) -> Element {
    let app = props.app;
    let (open, handle, label) = {
        let state = app.read();
        (
            state.overlays().is_open(Overlay::Contact),
            state.config().contact.handle.clone(),
            state.copy_label().to_owned(),
        )
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        OverlayShell {
            app,
            overlay: Overlay::Contact,
            id: "discord-modal",
            class: "contact-modal",

            h2 { class: "modal-title", "Get in Touch" }
            p { "Send me a message and tell me what you have in mind." }

            div { class: "contact-handle",
                span { id: "discord-user", "{handle}" }
                button {
                    id: "copy-discord",
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| run(app, Command::CopyContact),
                    "{label}"
                }
            }
        }
    }
}
