use dioxus::prelude::*;

use common::{App, Command, overlay::Overlay};

use crate::effects::run;

#[derive(Clone, PartialEq, Props)]
pub struct OverlayShellProps {
    app: Signal<App>,
    overlay: Overlay,
    id: String,
    #[props(default)]
    class: String,
    children: Element,
}

fn close_command(overlay: Overlay) -> Command {
    match overlay {
        Overlay::Project => Command::CloseProject,
        Overlay::Product => Command::CloseProduct,
        Overlay::Contact => Command::CloseContact,
        Overlay::Lightbox => Command::CloseLightbox,
    }
}

// OverlayShell
//
// backdrop plus content box shared by every overlay.  a click that reaches the backdrop
// closes the overlay; clicks inside the content stop before they get there
#[component]
pub fn OverlayShell(props: OverlayShellProps) -> Element {
    let app = props.app;
    let overlay = props.overlay;

    rsx! {
        div {
            id: "{props.id}",
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                run(app, Command::Backdrop(overlay));
            },
            div {
                class: "modal-content {props.class}",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "btn-close",
                    onclick: move |_| run(app, close_command(overlay)),
                    "×"
                }

                {props.children}
            }
        }
    }
}
