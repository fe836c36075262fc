use dioxus::prelude::*;

use common::{App, Command, config::NavLink};

use crate::{effects::run, measure};

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    app: Signal<App>,
    link: NavLink,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let app = props.app;
    let section = props.link.section.clone();
    let active = app.read().nav().is_active(&section);

    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: "#{props.link.section}",
            onclick: move |evt| {
                evt.prevent_default();

                // a section that isn't on the page still gets highlighted, it just
                // doesn't move anything
                let section_top = measure::section_top(&section);

                run(
                    app,
                    Command::NavigateTo {
                        section: section.clone(),
                        section_top,
                        header_height: measure::header_height(),
                    },
                );
            },
            "{props.link.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    app: Signal<App>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let app = props.app;
    let links = app.read().config().nav_links();

    rsx! {
        header { class: "header",
            div { class: "nav-container",
                div { class: "logo",
                    a {
                        href: "#home",
                        onclick: move |evt| {
                            evt.prevent_default();
                            run(app, Command::HireMe);
                        },
                        "Portfolio"
                    }
                }

                nav { class: "nav-links",
                    for link in links {
                        NavBarLink { key: "{link.section}", app, link: link.clone() }
                    }
                }
            }
        }
    }
}
