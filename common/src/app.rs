use tracing::{debug, trace};

use crate::{
    config::SiteConfig,
    faq::Faq,
    nav::{NavSync, SectionBounds, scroll_target},
    overlay::{Overlay, Overlays, ProductDetail, ProjectDetail},
    render::{Renderer, Scene},
    screen::{Screen, ScreenController},
    store::ContentStore,
};

// keys the page reacts to; everything else maps to Other
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    pub fn from_key_name(name: &str) -> Key {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

// commands
//
// every ui action the page can take.  the web front end turns dom events into these and
// nothing else, so the whole page can be driven from a test
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Loaded(Box<ContentStore>),

    // screens
    SwitchScreen(String),
    StraightToHiring,
    OpenStore,
    CheckPastWork,
    ChooseStyle(String),
    BackFromStyles,
    BackFromStore,
    BackToStyles,
    HireMe,

    // contact dialog
    ContactMe,
    CloseContact,
    CopyContact,
    ContactCopied,
    ResetCopyLabel,

    // project modal and lightbox
    OpenProject(usize),
    CloseProject,
    OpenLightbox(usize),
    NextImage,
    PrevImage,
    CloseLightbox,

    // product modal
    OpenProduct(usize),
    CloseProduct,
    Purchase,

    // shared overlay handling
    Backdrop(Overlay),
    Key(Key),

    // navigation
    Scrolled {
        scroll_y: f64,
        header_height: f64,
        sections: Vec<SectionBounds>,
    },
    NavigateTo {
        section: String,
        section_top: Option<f64>,
        header_height: f64,
    },
    ToggleFaq(usize),
}

// side effects the host has to carry out after a dispatch
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScrollTo { top: f64, smooth: bool },
    LockScroll(bool),
    OpenUrl(String),
    CopyToClipboard(String),
    Schedule { after_ms: u32, command: Box<Command> },
}

// application state
//
// one of these per page, owned by the front end.  all mutation goes through dispatch()
#[derive(Clone, Debug, PartialEq)]
pub struct App {
    config: SiteConfig,
    content: ContentStore,
    ready: bool,
    screens: ScreenController,
    overlays: Overlays,
    nav: NavSync,
    faq: Faq,
    scene: Scene,
    selected_style: Option<String>,
    copy_label: String,
    scroll_locked: bool,
}

impl App {
    pub fn new(config: SiteConfig) -> Self {
        App {
            nav: NavSync::new(config.nav_sections()),
            faq: Faq::new(config.faq.len()),
            copy_label: config.contact.copy_label.clone(),
            content: ContentStore::default(),
            ready: false,
            screens: ScreenController::new(),
            overlays: Overlays::default(),
            scene: Scene::new(),
            selected_style: None,
            scroll_locked: false,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn screen(&self) -> Screen {
        self.screens.active()
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn nav(&self) -> &NavSync {
        &self.nav
    }

    pub fn faq(&self) -> &Faq {
        &self.faq
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selected_style(&self) -> Option<&str> {
        self.selected_style.as_deref()
    }

    pub fn copy_label(&self) -> &str {
        &self.copy_label
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    // whether dispatching the command could do anything at all
    //
    // keys and scrolls arrive on every browser event, and most of them change nothing.
    // the host checks this under a read lock before taking a write one
    pub fn affects(&self, command: &Command) -> bool {
        if !self.ready {
            return matches!(command, Command::Loaded(_));
        }

        match command {
            Command::Loaded(_) => false,
            Command::Key(Key::ArrowLeft | Key::ArrowRight) => {
                self.overlays.is_open(Overlay::Lightbox)
            }
            Command::Key(Key::Escape) => self.overlays.any_open(),
            Command::Key(Key::Other) => false,
            Command::Scrolled {
                scroll_y,
                header_height,
                sections,
            } => {
                let next = self.nav.link_in_view(
                    sections,
                    *scroll_y,
                    *header_height,
                    self.config.layout.nav_lookahead,
                );

                next != self.nav.active()
            }
            _ => true,
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        let mut effects = Vec::new();

        if !self.ready && !matches!(command, Command::Loaded(_)) {
            trace!("ignoring {command:?} before content is loaded");
            return effects;
        }

        match command {
            Command::Loaded(content) => self.loaded(*content),

            // the scroll resets even when the name matches no screen
            Command::SwitchScreen(name) => {
                self.screens.switch_screen(&name);
                effects.push(scroll_to_top());
            }
            Command::StraightToHiring => self.switch(Screen::StyleSelection, &mut effects),
            Command::OpenStore => {
                self.switch(Screen::Store, &mut effects);
                Renderer::new(&self.config)
                    .render_store_products(&mut self.scene, &self.content.products);
            }
            Command::CheckPastWork => {
                self.switch(Screen::Portfolio, &mut effects);

                let renderer = Renderer::new(&self.config);
                renderer.render_reviews(&mut self.scene, &self.content.settings.reviews);
                renderer.render_projects(&mut self.scene, &self.content.projects);
                renderer.update_project_count(&mut self.scene, &self.content.projects);

                self.nav.reset();
            }
            Command::ChooseStyle(style) => {
                Renderer::new(&self.config).show_projects_by_style(
                    &mut self.scene,
                    &self.content.projects,
                    &style,
                );
                self.selected_style = Some(style);
                self.switch(Screen::ProjectsByStyle, &mut effects);
            }
            Command::BackFromStyles | Command::BackFromStore | Command::HireMe => {
                self.switch(Screen::Landing, &mut effects)
            }
            Command::BackToStyles => self.switch(Screen::StyleSelection, &mut effects),

            Command::ContactMe => self.overlays.open_contact(),
            Command::CloseContact => {
                self.overlays.close(Overlay::Contact);
            }
            Command::CopyContact => {
                effects.push(Effect::CopyToClipboard(self.config.contact.handle.clone()))
            }
            Command::ContactCopied => {
                self.copy_label = self.config.contact.copied_label.clone();
                effects.push(Effect::Schedule {
                    after_ms: self.config.contact.copy_reset_ms,
                    command: Box::new(Command::ResetCopyLabel),
                });
            }
            Command::ResetCopyLabel => {
                self.copy_label = self.config.contact.copy_label.clone();
            }

            Command::OpenProject(index) => match self.content.projects.get(index) {
                Some(project) => self
                    .overlays
                    .open_project(ProjectDetail::new(index, project, &self.config)),
                None => trace!("no project at {index}"),
            },
            Command::CloseProject => {
                self.overlays.close(Overlay::Project);
            }
            Command::OpenLightbox(start) => self.open_lightbox(start),
            Command::NextImage => {
                self.overlays.lightbox_mut().next();
            }
            Command::PrevImage => {
                self.overlays.lightbox_mut().prev();
            }
            Command::CloseLightbox => {
                self.overlays.close(Overlay::Lightbox);
            }

            Command::OpenProduct(index) => match self.content.products.get(index) {
                Some(product) => self
                    .overlays
                    .open_product(ProductDetail::new(index, product, &self.config)),
                None => trace!("no product at {index}"),
            },
            Command::CloseProduct => {
                self.overlays.close(Overlay::Product);
            }
            Command::Purchase => {
                if let Some(link) = self
                    .overlays
                    .product()
                    .and_then(|p| p.purchase_link.clone())
                {
                    effects.push(Effect::OpenUrl(link));
                }
            }

            Command::Backdrop(overlay) => {
                self.overlays.close(overlay);
            }
            Command::Key(key) => self.key(key),

            Command::Scrolled {
                scroll_y,
                header_height,
                sections,
            } => {
                self.nav.on_scroll(
                    &sections,
                    scroll_y,
                    header_height,
                    self.config.layout.nav_lookahead,
                );
            }
            Command::NavigateTo {
                section,
                section_top,
                header_height,
            } => {
                self.nav.activate(&section);

                // a link whose section isn't on the page only moves the highlight
                match section_top {
                    Some(top) => effects.push(Effect::ScrollTo {
                        top: scroll_target(top, header_height, self.config.layout.nav_click_offset),
                        smooth: true,
                    }),
                    None => trace!("no section {section} on the page"),
                }
            }
            Command::ToggleFaq(item) => {
                self.faq.toggle(item);
            }
        }

        self.sync_scroll_lock(&mut effects);

        effects
    }

    fn loaded(&mut self, content: ContentStore) {
        if self.ready {
            debug!("content already loaded, ignoring reload");
            return;
        }

        debug!(
            "content loaded: {} projects, {} products, {} reviews",
            content.projects.len(),
            content.products.len(),
            content.settings.reviews.len()
        );

        self.content = content;
        self.ready = true;
    }

    fn switch(&mut self, screen: Screen, effects: &mut Vec<Effect>) {
        self.screens.switch(screen);
        effects.push(scroll_to_top());
    }

    // the lightbox only ever shows the gallery of the open project
    fn open_lightbox(&mut self, start: usize) {
        let images = match self.overlays.project() {
            Some(detail) => detail.image_urls(),
            None => {
                trace!("no project open, not opening lightbox");
                return;
            }
        };

        let fallback = self.config.placeholders.lightbox.clone();
        self.overlays.lightbox_mut().open(images, start, &fallback);
    }

    // escape closes the lightbox and every modal under it in one press
    fn key(&mut self, key: Key) {
        match key {
            Key::ArrowRight if self.overlays.is_open(Overlay::Lightbox) => {
                self.overlays.lightbox_mut().next();
            }
            Key::ArrowLeft if self.overlays.is_open(Overlay::Lightbox) => {
                self.overlays.lightbox_mut().prev();
            }
            Key::Escape => {
                self.overlays.close_all();
            }
            _ => (),
        }
    }

    fn sync_scroll_lock(&mut self, effects: &mut Vec<Effect>) {
        let locked = self.overlays.any_open();

        if locked != self.scroll_locked {
            self.scroll_locked = locked;
            effects.push(Effect::LockScroll(locked));
        }
    }
}

fn scroll_to_top() -> Effect {
    Effect::ScrollTo {
        top: 0.0,
        smooth: false,
    }
}
