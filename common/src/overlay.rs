use tracing::{debug, trace};

use api::{product::Product, project::Project};

use crate::{
    config::SiteConfig,
    render::{ImageRef, PriceTag},
};

// overlays
//
// each kind is toggled on its own; more than one can be up at a time (the lightbox
// opens on top of the project modal)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    Project,
    Product,
    Contact,
    Lightbox,
}

impl Overlay {
    // topmost first
    pub const STACKING: [Overlay; 4] = [
        Overlay::Lightbox,
        Overlay::Product,
        Overlay::Project,
        Overlay::Contact,
    ];
}

// wrap-around stepping; an empty list has no position to step to
pub fn next_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index % len + 1) % len)
}

pub fn prev_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index % len + len - 1) % len)
}

pub fn image_counter(count: usize) -> String {
    if count == 1 {
        String::from("1 image")
    } else {
        format!("{count} images")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
    open: bool,
    fallback: String,
}

impl Lightbox {
    // an empty list has nothing to show, so the lightbox stays shut
    pub fn open(&mut self, images: Vec<String>, start: usize, fallback: &str) -> bool {
        if images.is_empty() {
            trace!("not opening lightbox without images");
            return false;
        }

        self.index = start % images.len();
        self.images = images;
        self.fallback = fallback.to_owned();
        self.open = true;

        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> Option<usize> {
        self.index = next_index(self.index, self.images.len())?;
        Some(self.index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.index = prev_index(self.index, self.images.len())?;
        Some(self.index)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> Option<ImageRef> {
        self.images.get(self.index).map(|src| ImageRef {
            src: src.clone(),
            fallback: self.fallback.clone(),
            alt: format!("Image {}", self.index + 1),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub index: usize,
    pub image: ImageRef,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub counter: String,
    pub gallery: Vec<GalleryImage>,
}

impl ProjectDetail {
    pub fn new(index: usize, project: &Project, config: &SiteConfig) -> Self {
        let gallery = project
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| GalleryImage {
                index: i,
                image: ImageRef {
                    src: src.clone(),
                    fallback: config.placeholders.gallery.clone(),
                    alt: format!("{} - Image {}", project.title, i + 1),
                },
                delay_ms: (i as u32).saturating_mul(config.layout.gallery_stagger_ms),
            })
            .collect();

        ProjectDetail {
            index,
            title: project.title.clone(),
            description: project.description.clone(),
            price: project.price().map(|p| format!("Price: {p}")),
            counter: image_counter(project.images.len()),
            gallery,
        }
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.gallery.iter().map(|g| g.image.src.clone()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub price: PriceTag,
    pub image: ImageRef,
    pub purchase_link: Option<String>,
}

impl ProductDetail {
    pub fn new(index: usize, product: &Product, config: &SiteConfig) -> Self {
        ProductDetail {
            index,
            name: product.name.clone(),
            description: product.long_description().to_owned(),
            price: PriceTag::from(&product.price),
            image: ImageRef {
                src: product.image.clone(),
                fallback: config.placeholders.product_modal.clone(),
                alt: product.name.clone(),
            },
            purchase_link: product.purchase_link().map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlays {
    project: Option<ProjectDetail>,
    product: Option<ProductDetail>,
    contact: bool,
    lightbox: Lightbox,
}

impl Overlays {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Project => self.project.is_some(),
            Overlay::Product => self.product.is_some(),
            Overlay::Contact => self.contact,
            Overlay::Lightbox => self.lightbox.is_open(),
        }
    }

    // background scrolling is off whenever anything is up
    pub fn any_open(&self) -> bool {
        Overlay::STACKING.iter().any(|o| self.is_open(*o))
    }

    // returns whether anything was open
    pub fn close_all(&mut self) -> bool {
        let mut closed = false;

        for overlay in Overlay::STACKING {
            closed |= self.close(overlay);
        }

        closed
    }

    pub fn open_project(&mut self, detail: ProjectDetail) {
        debug!("opening project {}", detail.index);
        self.project = Some(detail);
    }

    pub fn open_product(&mut self, detail: ProductDetail) {
        debug!("opening product {}", detail.index);
        self.product = Some(detail);
    }

    pub fn open_contact(&mut self) {
        self.contact = true;
    }

    // returns whether anything actually closed
    pub fn close(&mut self, overlay: Overlay) -> bool {
        let was_open = self.is_open(overlay);

        match overlay {
            Overlay::Project => self.project = None,
            Overlay::Product => self.product = None,
            Overlay::Contact => self.contact = false,
            Overlay::Lightbox => self.lightbox.close(),
        }

        if was_open {
            debug!("closed {overlay:?}");
        }

        was_open
    }

    pub fn project(&self) -> Option<&ProjectDetail> {
        self.project.as_ref()
    }

    pub fn product(&self) -> Option<&ProductDetail> {
        self.product.as_ref()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }
}

#[cfg(test)]
mod tests {
    use api::product::Price;

    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{i}.png")).collect()
    }

    fn project_with(n: usize) -> Project {
        Project {
            title: "Tower".to_owned(),
            images: images(n),
            ..Default::default()
        }
    }

    #[test]
    fn next_cycles_back_to_start() {
        for n in 1..6 {
            let mut lightbox = Lightbox::default();
            lightbox.open(images(n), 2 % n, "");
            let start = lightbox.index();

            for _ in 0..n {
                lightbox.next();
            }

            assert_eq!(lightbox.index(), start);
        }
    }

    #[test]
    fn prev_from_zero_wraps_to_end() {
        let mut lightbox = Lightbox::default();
        lightbox.open(images(4), 0, "");

        assert_eq!(lightbox.prev(), Some(3));
        assert_eq!(lightbox.next(), Some(0));
        assert_eq!(prev_index(0, 1), Some(0));
    }

    #[test]
    fn stepping_an_empty_list_has_no_index() {
        assert_eq!(next_index(0, 0), None);
        assert_eq!(prev_index(0, 0), None);
        assert_eq!(next_index(2, 3), Some(0));
        assert_eq!(prev_index(0, 3), Some(2));
    }

    #[test]
    fn empty_lightbox_never_opens() {
        let mut lightbox = Lightbox::default();

        assert!(!lightbox.open(Vec::new(), 0, ""));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.prev(), None);
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn current_uses_fallback() {
        let mut lightbox = Lightbox::default();
        lightbox.open(images(2), 1, "missing.png");

        let current = lightbox.current().unwrap();
        assert_eq!(current.src, "1.png");
        assert_eq!(current.fallback, "missing.png");
    }

    #[test]
    fn image_counter_pluralizes() {
        let config = SiteConfig::default();

        assert_eq!(ProjectDetail::new(0, &project_with(3), &config).counter, "3 images");
        assert_eq!(ProjectDetail::new(0, &project_with(1), &config).counter, "1 image");
        assert_eq!(ProjectDetail::new(0, &project_with(0), &config).counter, "0 images");
    }

    #[test]
    fn project_detail_gallery() {
        let config = SiteConfig::default();
        let mut project = project_with(2);
        project.price = Some("$90".to_owned());

        let detail = ProjectDetail::new(4, &project, &config);

        assert_eq!(detail.price.as_deref(), Some("Price: $90"));
        assert_eq!(detail.gallery[1].image.alt, "Tower - Image 2");
        assert_eq!(detail.gallery[1].delay_ms, 100);
        assert_eq!(detail.image_urls(), images(2));
    }

    #[test]
    fn product_detail_prefers_long_description() {
        let config = SiteConfig::default();
        let product = Product {
            name: "Kit".to_owned(),
            description: "short".to_owned(),
            detailed_description: Some("long".to_owned()),
            price: Price::Amount(12.0),
            purchase_link: Some("https://shop/kit".to_owned()),
            ..Default::default()
        };

        let detail = ProductDetail::new(0, &product, &config);

        assert_eq!(detail.description, "long");
        assert_eq!(detail.price.label, "$12");
        assert_eq!(detail.price.class(), "paid");
        assert_eq!(detail.purchase_link.as_deref(), Some("https://shop/kit"));
    }

    #[test]
    fn overlays_are_independent() {
        let config = SiteConfig::default();
        let mut overlays = Overlays::default();
        assert!(!overlays.any_open());

        overlays.open_project(ProjectDetail::new(0, &project_with(2), &config));
        overlays.lightbox_mut().open(images(2), 0, "");
        overlays.open_contact();

        assert!(overlays.close(Overlay::Lightbox));
        assert!(!overlays.close(Overlay::Lightbox));
        assert!(overlays.is_open(Overlay::Project));
        assert!(overlays.is_open(Overlay::Contact));

        assert!(overlays.close_all());
        assert!(!overlays.any_open());
        assert!(!overlays.close_all());
    }
}
