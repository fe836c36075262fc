use dioxus::prelude::*;

use common::render::ImageRef;

#[derive(Clone, PartialEq, Props)]
pub struct FallbackImageProps {
    image: ImageRef,
    #[props(default)]
    class: String,
    #[props(default)]
    style: String,
}

// an image that swaps itself for the placeholder the first time it fails to load
//
// the src lives in local state, so callers that reuse the slot for a different image
// should key it by src to start over
#[component]
pub fn FallbackImage(props: FallbackImageProps) -> Element {
    let mut src = use_signal(|| props.image.src.clone());
    let fallback = props.image.fallback.clone();

    rsx! {
        img {
            class: "{props.class}",
            style: "{props.style}",
            src: "{src}",
            alt: "{props.image.alt}",
            loading: "lazy",
            onerror: move |_| {
                if *src.peek() != fallback {
                    src.set(fallback.clone());
                }
            },
        }
    }
}
