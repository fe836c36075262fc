use std::collections::{HashMap, HashSet};

use tracing::trace;

use api::{
    product::{Price, Product},
    project::{ALL_STYLES, Project},
    settings::Review,
};

use crate::config::SiteConfig;

// render targets
//
// a Surface is whatever the cards end up drawn on.  the renderer only knows slot names,
// never markup, and every write replaces the slot wholesale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    ProjectsGrid,
    ProjectsList,
    StoreProductsGrid,
    ReviewsSlider,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::ProjectsGrid,
        Slot::ProjectsList,
        Slot::StoreProductsGrid,
        Slot::ReviewsSlider,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Slot::ProjectsGrid => "projects-grid",
            Slot::ProjectsList => "projects-list",
            Slot::StoreProductsGrid => "store-products-grid",
            Slot::ReviewsSlider => "reviews-slider",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    StyleTitle,
    ProjectCount,
}

impl TextSlot {
    pub const ALL: [TextSlot; 2] = [TextSlot::StyleTitle, TextSlot::ProjectCount];
}

pub trait Surface {
    fn mount(&mut self, slot: Slot, content: Container);

    fn set_text(&mut self, slot: TextSlot, text: String);
}

// view models

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub fallback: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceTag {
    pub label: String,
    pub free: bool,
}

impl PriceTag {
    pub fn class(&self) -> &'static str {
        if self.free { "free" } else { "paid" }
    }
}

impl From<&Price> for PriceTag {
    fn from(price: &Price) -> Self {
        PriceTag {
            label: price.to_string(),
            free: price.is_free(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmptyState {
    pub class: &'static str,
    pub message: String,
}

// portfolio grid card; index is the position in the full project list
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub index: usize,
    pub image: ImageRef,
    pub kind: String,
    pub description: String,
    pub clickable: bool,
    pub delay_ms: u32,
}

// projects-by-style list entry
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectItem {
    pub index: usize,
    pub image: ImageRef,
    pub title: String,
    pub description: String,
    pub price: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub index: usize,
    pub image: ImageRef,
    pub name: String,
    pub description: String,
    pub price: PriceTag,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewCard {
    pub stars: String,
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Card {
    Project(ProjectCard),
    ProjectItem(ProjectItem),
    Product(ProductCard),
    Review(ReviewCard),
}

impl Card {
    pub fn heading(&self) -> &str {
        match self {
            Card::Project(card) => &card.kind,
            Card::ProjectItem(item) => &item.title,
            Card::Product(card) => &card.name,
            Card::Review(card) => &card.author,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Container {
    Empty(EmptyState),
    Cards(Vec<Card>),
}

impl Container {
    pub fn cards(&self) -> &[Card] {
        match self {
            Container::Empty(_) => &[],
            Container::Cards(cards) => cards,
        }
    }

    pub fn empty_state(&self) -> Option<&EmptyState> {
        match self {
            Container::Empty(state) => Some(state),
            Container::Cards(_) => None,
        }
    }

    // number of nodes the container holds once drawn
    pub fn node_count(&self) -> usize {
        match self {
            Container::Empty(_) => 1,
            Container::Cards(cards) => cards.len(),
        }
    }
}

// scene
//
// the in-memory surface the web front end draws from.  only bound slots accept writes;
// anything else is a missing target and is dropped
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    bound: HashSet<Slot>,
    bound_text: HashSet<TextSlot>,
    containers: HashMap<Slot, Container>,
    texts: HashMap<TextSlot, String>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::with_slots(Slot::ALL, TextSlot::ALL)
    }

    pub fn with_slots(
        slots: impl IntoIterator<Item = Slot>,
        text_slots: impl IntoIterator<Item = TextSlot>,
    ) -> Self {
        Scene {
            bound: slots.into_iter().collect(),
            bound_text: text_slots.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn container(&self, slot: Slot) -> Option<&Container> {
        self.containers.get(&slot)
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }
}

impl Surface for Scene {
    fn mount(&mut self, slot: Slot, content: Container) {
        if !self.bound.contains(&slot) {
            trace!("no target for {}, skipping render", slot.element_id());
            return;
        }

        self.containers.insert(slot, content);
    }

    fn set_text(&mut self, slot: TextSlot, text: String) {
        if !self.bound_text.contains(&slot) {
            trace!("no target for {slot:?}, skipping text");
            return;
        }

        self.texts.insert(slot, text);
    }
}

// filtering

pub fn filter_by_style<'a>(projects: &'a [Project], style: &str) -> Vec<(usize, &'a Project)> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| project.matches_style(style))
        .collect()
}

pub fn style_title(style: &str) -> String {
    let mut chars = style.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if style == ALL_STYLES {
        format!("{name} Projects")
    } else {
        format!("{name} Style Examples")
    }
}

pub fn stars(review: &Review) -> String {
    "★".repeat(review.star_count())
}

// renderer
//
// one method per collection.  each clears its slot and either mounts the cards or a
// single empty-state node
pub struct Renderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Renderer { config }
    }

    fn delay(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.config.layout.stagger_ms)
    }

    fn empty(class: &'static str, message: &str) -> Container {
        Container::Empty(EmptyState {
            class,
            message: message.to_owned(),
        })
    }

    pub fn render_projects(&self, surface: &mut impl Surface, projects: &[Project]) {
        if projects.is_empty() {
            surface.mount(
                Slot::ProjectsGrid,
                Self::empty("no-projects", &self.config.messages.no_projects),
            );
            return;
        }

        let cards = projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                Card::Project(ProjectCard {
                    index,
                    image: ImageRef {
                        src: project.thumbnail.clone(),
                        fallback: self.config.placeholders.project_card.clone(),
                        alt: project.title.clone(),
                    },
                    kind: project.kind.clone(),
                    description: project.description.clone(),
                    clickable: false,
                    delay_ms: self.delay(index),
                })
            })
            .collect();

        surface.mount(Slot::ProjectsGrid, Container::Cards(cards));
    }

    pub fn show_projects_by_style(
        &self,
        surface: &mut impl Surface,
        projects: &[Project],
        style: &str,
    ) {
        surface.set_text(TextSlot::StyleTitle, style_title(style));

        let matching = filter_by_style(projects, style);

        if matching.is_empty() {
            surface.mount(
                Slot::ProjectsList,
                Self::empty("no-projects-message", &self.config.messages.no_style_projects),
            );
            return;
        }

        // the stagger follows the position in the filtered list, not the source list
        let cards = matching
            .into_iter()
            .enumerate()
            .map(|(position, (index, project))| {
                Card::ProjectItem(ProjectItem {
                    index,
                    image: ImageRef {
                        src: project.thumbnail.clone(),
                        fallback: self.config.placeholders.project_item.clone(),
                        alt: project.title.clone(),
                    },
                    title: project.title.clone(),
                    description: project.description.clone(),
                    price: project
                        .price()
                        .unwrap_or(&self.config.messages.contact_for_price)
                        .to_owned(),
                    delay_ms: self.delay(position),
                })
            })
            .collect();

        surface.mount(Slot::ProjectsList, Container::Cards(cards));
    }

    pub fn render_store_products(&self, surface: &mut impl Surface, products: &[Product]) {
        if products.is_empty() {
            surface.mount(
                Slot::StoreProductsGrid,
                Self::empty("no-products", &self.config.messages.no_products),
            );
            return;
        }

        let cards = products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                Card::Product(ProductCard {
                    index,
                    image: ImageRef {
                        src: product.image.clone(),
                        fallback: self.config.placeholders.product_card.clone(),
                        alt: product.name.clone(),
                    },
                    name: product.name.clone(),
                    description: product.description.clone(),
                    price: PriceTag::from(&product.price),
                    delay_ms: self.delay(index),
                })
            })
            .collect();

        surface.mount(Slot::StoreProductsGrid, Container::Cards(cards));
    }

    // the slider scrolls continuously, so the list goes in twice back to back
    pub fn render_reviews(&self, surface: &mut impl Surface, reviews: &[Review]) {
        if reviews.is_empty() {
            surface.mount(
                Slot::ReviewsSlider,
                Self::empty("no-reviews", &self.config.messages.no_reviews),
            );
            return;
        }

        let cards = reviews
            .iter()
            .chain(reviews.iter())
            .map(|review| {
                Card::Review(ReviewCard {
                    stars: stars(review),
                    text: format!("\"{}\"", review.text),
                    author: review.author.clone(),
                })
            })
            .collect();

        surface.mount(Slot::ReviewsSlider, Container::Cards(cards));
    }

    pub fn update_project_count(&self, surface: &mut impl Surface, projects: &[Project]) {
        surface.set_text(TextSlot::ProjectCount, projects.len().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, style: &str) -> Project {
        Project {
            title: title.to_owned(),
            style: style.to_owned(),
            thumbnail: format!("{title}.png"),
            ..Default::default()
        }
    }

    fn product(name: &str, price: Price) -> Product {
        Product {
            name: name.to_owned(),
            price,
            ..Default::default()
        }
    }

    fn review(author: &str, stars: i64) -> Review {
        Review {
            author: author.to_owned(),
            text: "Solid".to_owned(),
            stars,
        }
    }

    fn assert_single_empty_state(scene: &Scene, slot: Slot) {
        let container = scene.container(slot).unwrap();

        assert_eq!(container.node_count(), 1);
        assert!(container.cards().is_empty());
        assert!(container.empty_state().is_some());
    }

    #[test]
    fn empty_collections_render_one_empty_state() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();

        renderer.render_projects(&mut scene, &[]);
        renderer.show_projects_by_style(&mut scene, &[], "modern");
        renderer.render_store_products(&mut scene, &[]);
        renderer.render_reviews(&mut scene, &[]);

        for slot in Slot::ALL {
            assert_single_empty_state(&scene, slot);
        }

        assert_eq!(
            scene
                .container(Slot::StoreProductsGrid)
                .and_then(Container::empty_state)
                .map(|s| s.message.as_str()),
            Some(config.messages.no_products.as_str())
        );
    }

    #[test]
    fn filters_by_exact_style() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();
        let projects = vec![project("A", "modern"), project("B", "classic")];

        renderer.show_projects_by_style(&mut scene, &projects, "modern");

        let cards = scene.container(Slot::ProjectsList).unwrap().cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].heading(), "A");
        assert_eq!(scene.text(TextSlot::StyleTitle), Some("Modern Style Examples"));
    }

    #[test]
    fn all_is_unfiltered() {
        let projects = vec![
            project("A", "modern"),
            project("B", "classic"),
            project("C", ""),
        ];

        let all = filter_by_style(&projects, ALL_STYLES);
        assert_eq!(all.len(), 3);
        assert_eq!(style_title(ALL_STYLES), "All Projects");

        let classic = filter_by_style(&projects, "classic");
        assert_eq!(classic.len(), 1);
        assert_eq!(classic[0].0, 1);
    }

    #[test]
    fn filtered_items_keep_source_index_and_restart_stagger() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();
        let mut projects = vec![project("A", "modern"), project("B", "classic")];
        projects[1].price = Some("$300".to_owned());

        renderer.show_projects_by_style(&mut scene, &projects, "classic");

        match &scene.container(Slot::ProjectsList).unwrap().cards()[0] {
            Card::ProjectItem(item) => {
                assert_eq!(item.index, 1);
                assert_eq!(item.delay_ms, 0);
                assert_eq!(item.price, "$300");
                assert_eq!(item.image.fallback, config.placeholders.project_item);
            }
            other => panic!("unexpected card {other:?}"),
        }

        renderer.show_projects_by_style(&mut scene, &projects, "modern");

        match &scene.container(Slot::ProjectsList).unwrap().cards()[0] {
            Card::ProjectItem(item) => assert_eq!(item.price, "Contact for price"),
            other => panic!("unexpected card {other:?}"),
        }
    }

    #[test]
    fn product_price_tags() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();
        let products = vec![
            product("Zero", Price::Amount(0.0)),
            product("Paid", Price::Amount(25.0)),
            product("Gift", Price::Label("free".to_owned())),
        ];

        renderer.render_store_products(&mut scene, &products);

        let tags: Vec<(String, &str)> = scene
            .container(Slot::StoreProductsGrid)
            .unwrap()
            .cards()
            .iter()
            .map(|card| match card {
                Card::Product(card) => (card.price.label.clone(), card.price.class()),
                other => panic!("unexpected card {other:?}"),
            })
            .collect();

        assert_eq!(
            tags,
            vec![
                ("FREE".to_owned(), "free"),
                ("$25".to_owned(), "paid"),
                ("FREE".to_owned(), "free"),
            ]
        );
    }

    #[test]
    fn cards_are_staggered_by_position() {
        let mut config = SiteConfig::default();
        config.layout.stagger_ms = 80;
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();
        let projects = vec![project("A", "x"), project("B", "x"), project("C", "x")];

        renderer.render_projects(&mut scene, &projects);

        let delays: Vec<u32> = scene
            .container(Slot::ProjectsGrid)
            .unwrap()
            .cards()
            .iter()
            .map(|card| match card {
                Card::Project(card) => {
                    assert!(!card.clickable);
                    card.delay_ms
                }
                other => panic!("unexpected card {other:?}"),
            })
            .collect();

        assert_eq!(delays, vec![0, 80, 160]);
    }

    #[test]
    fn reviews_are_doubled_with_stars() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();

        renderer.render_reviews(&mut scene, &[review("Ana", 3), review("Bo", 7)]);

        let cards = scene.container(Slot::ReviewsSlider).unwrap().cards();
        assert_eq!(cards.len(), 4);

        match (&cards[0], &cards[1], &cards[2]) {
            (Card::Review(first), Card::Review(second), Card::Review(repeat)) => {
                assert_eq!(first.stars, "★★★");
                assert_eq!(first.text, "\"Solid\"");
                assert_eq!(second.stars, "★★★★★");
                assert_eq!(repeat.author, "Ana");
            }
            other => panic!("unexpected cards {other:?}"),
        }
    }

    #[test]
    fn rerender_replaces_contents() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::new();

        renderer.render_projects(&mut scene, &[project("A", "x"), project("B", "x")]);
        renderer.render_projects(&mut scene, &[project("C", "x")]);

        assert_eq!(scene.container(Slot::ProjectsGrid).unwrap().node_count(), 1);

        renderer.update_project_count(&mut scene, &[project("C", "x")]);
        assert_eq!(scene.text(TextSlot::ProjectCount), Some("1"));
    }

    #[test]
    fn unbound_slots_are_skipped() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&config);
        let mut scene = Scene::with_slots([Slot::ProjectsGrid], []);

        renderer.render_store_products(&mut scene, &[]);
        renderer.update_project_count(&mut scene, &[]);
        renderer.render_projects(&mut scene, &[]);

        assert!(scene.container(Slot::StoreProductsGrid).is_none());
        assert!(scene.text(TextSlot::ProjectCount).is_none());
        assert!(scene.container(Slot::ProjectsGrid).is_some());
    }
}
