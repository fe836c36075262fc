#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, debug};

use api::HttpFetch;
use common::{App, Command, ContentStore, read_config};

mod components;

mod effects;

mod measure;

mod overlays;
use overlays::Overlays;

mod screens;
use screens::{
    LandingScreen, PortfolioScreen, ProjectsByStyleScreen, StoreScreen, StyleSelectionScreen,
};

mod style;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(Site);
}

// Site
//
// the whole page is one shell: every screen and overlay is mounted up front and the
// App state decides which of them show.  content is fetched once, after which the
// buttons come alive
#[component]
fn Site() -> Element {
    let app = use_signal(|| App::new(read_config(SITE_CONFIG)));

    use_future(move || async move {
        let base = app.peek().config().content.base_path.clone();
        let content = ContentStore::load(&HttpFetch::new(base)).await;

        debug!(
            projects = content.projects.len(),
            products = content.products.len(),
            reviews = content.settings.reviews.len(),
            "content loaded"
        );

        effects::run(app, Command::Loaded(Box::new(content)));
    });

    use_hook(move || effects::listen(app));

    rsx! {
        style { "{style::SITE_STYLES}" }

        LandingScreen { app }
        StyleSelectionScreen { app }
        ProjectsByStyleScreen { app }
        StoreScreen { app }
        PortfolioScreen { app }

        Overlays { app }
    }
}
