use dioxus::prelude::*;

use common::{
    App, Command,
    render::{Card, Container, ProductCard, ProjectCard, ProjectItem, ReviewCard, Slot},
};

use crate::{components::image::FallbackImage, effects::run};

fn entrance(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms;")
}

#[derive(Clone, PartialEq, Props)]
struct ProjectTileProps {
    app: Signal<App>,
    card: ProjectCard,
}

// portfolio grid tile
#[component]
fn ProjectTile(props: ProjectTileProps) -> Element {
    let app = props.app;
    let card = props.card;
    let index = card.index;
    let clickable = card.clickable;
    let style = format!(
        "{} cursor: {};",
        entrance(card.delay_ms),
        if clickable { "pointer" } else { "default" }
    );

    rsx! {
        div {
            class: "project-card visible",
            style: "{style}",
            "data-project-index": "{index}",
            onclick: move |_| {
                if clickable {
                    run(app, Command::OpenProject(index));
                }
            },
            div { class: "project-image-container",
                FallbackImage {
                    key: "{card.image.src}",
                    image: card.image.clone(),
                    class: "project-thumbnail",
                }
            }
            div { class: "project-type {card.kind}", "{card.kind}" }
            div { class: "project-info",
                p { class: "project-description", "{card.description}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectRowProps {
    app: Signal<App>,
    item: ProjectItem,
}

// projects-by-style list entry
#[component]
fn ProjectRow(props: ProjectRowProps) -> Element {
    let app = props.app;
    let item = props.item;
    let index = item.index;
    let style = entrance(item.delay_ms);

    rsx! {
        div {
            class: "project-item visible",
            style: "{style}",
            onclick: move |_| run(app, Command::OpenProject(index)),
            div { class: "project-item-image",
                FallbackImage { key: "{item.image.src}", image: item.image.clone() }
            }
            div { class: "project-item-info",
                h3 { class: "project-item-title", "{item.title}" }
                p { class: "project-item-description", "{item.description}" }
                p { class: "project-item-price", "{item.price}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProductTileProps {
    app: Signal<App>,
    card: ProductCard,
}

#[component]
fn ProductTile(props: ProductTileProps) -> Element {
    let app = props.app;
    let card = props.card;
    let index = card.index;
    let style = entrance(card.delay_ms);
    let price_class = card.price.class();

    rsx! {
        div {
            class: "product-card visible",
            style: "{style}",
            onclick: move |_| run(app, Command::OpenProduct(index)),
            div { class: "product-image-container",
                FallbackImage {
                    key: "{card.image.src}",
                    image: card.image.clone(),
                    class: "product-image",
                }
            }
            div { class: "product-info",
                h3 { class: "product-name", "{card.name}" }
                p { class: "product-description", "{card.description}" }
                span { class: "product-price {price_class}", "{card.price.label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ReviewTileProps {
    card: ReviewCard,
}

#[component]
fn ReviewTile(props: ReviewTileProps) -> Element {
    let card = props.card;

    rsx! {
        div { class: "review-card",
            div { class: "review-stars", "{card.stars}" }
            p { class: "review-text", "{card.text}" }
            div { class: "review-author",
                strong { "{card.author}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CardViewProps {
    app: Signal<App>,
    card: Card,
}

#[component]
fn CardView(props: CardViewProps) -> Element {
    let app = props.app;

    match props.card {
        Card::Project(card) => rsx! {
            ProjectTile { app, card }
        },
        Card::ProjectItem(item) => rsx! {
            ProjectRow { app, item }
        },
        Card::Product(card) => rsx! {
            ProductTile { app, card }
        },
        Card::Review(card) => rsx! {
            ReviewTile { card }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SlotViewProps {
    app: Signal<App>,
    slot: Slot,
    #[props(default)]
    class: String,
}

// SlotView
//
// draws whatever the renderer last mounted into a slot.  a slot that was never
// rendered draws as an empty container
#[component]
pub fn SlotView(props: SlotViewProps) -> Element {
    let app = props.app;
    let container = app.read().scene().container(props.slot).cloned();

    rsx! {
        div { id: props.slot.element_id(), class: "{props.class}",
            match container {
                Some(Container::Empty(state)) => rsx! {
                    p { class: state.class, "{state.message}" }
                },
                Some(Container::Cards(cards)) => rsx! {
                    for (i, card) in cards.into_iter().enumerate() {
                        CardView { key: "{i}", app, card }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
