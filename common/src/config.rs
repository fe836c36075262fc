use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

use api::DEFAULT_BASE_PATH;

// site configuration
//
// everything the page shell would otherwise hard-code (placeholder images, copy, nav
// layout, timings) lives here.  every table has defaults, so an empty document is a
// complete config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content: ContentConfig,
    pub placeholders: PlaceholderConfig,
    pub layout: LayoutConfig,
    pub nav: Vec<NavLink>,
    pub styles: Vec<StyleChoice>,
    pub faq: Vec<FaqEntry>,
    pub contact: ContactConfig,
    pub messages: MessageConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    pub base_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            base_path: DEFAULT_BASE_PATH.to_owned(),
        }
    }
}

// fallback images, one per place an image can appear
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub project_card: String,
    pub project_item: String,
    pub product_card: String,
    pub gallery: String,
    pub product_modal: String,
    pub lightbox: String,
}

fn placeholder(width: u32, height: u32) -> String {
    format!("https://via.placeholder.com/{width}x{height}/f8fafb/666666?text=Image+Not+Found")
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        PlaceholderConfig {
            project_card: placeholder(400, 220),
            project_item: placeholder(400, 300),
            product_card: placeholder(300, 200),
            gallery: placeholder(150, 120),
            product_modal: placeholder(400, 250),
            lightbox: placeholder(800, 600),
        }
    }
}

// all distances in css pixels, all delays in milliseconds
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub stagger_ms: u32,
    pub gallery_stagger_ms: u32,
    pub nav_lookahead: f64,
    pub nav_click_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            stagger_ms: 100,
            gallery_stagger_ms: 100,
            nav_lookahead: 100.0,
            nav_click_offset: 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    pub section: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StyleChoice {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub blurb: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub handle: String,
    pub copy_label: String,
    pub copied_label: String,
    pub copy_reset_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            handle: String::new(),
            copy_label: "Copy".to_owned(),
            copied_label: "Copied!".to_owned(),
            copy_reset_ms: 2000,
        }
    }
}

// user-facing copy for the empty states and missing prices
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageConfig {
    pub no_projects: String,
    pub no_style_projects: String,
    pub no_products: String,
    pub no_reviews: String,
    pub contact_for_price: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        MessageConfig {
            no_projects: "No projects to display yet. Add some projects to projects.json!"
                .to_owned(),
            no_style_projects:
                "No projects available for this style yet. Contact me for a custom build!"
                    .to_owned(),
            no_products: "No products to display yet. Add some products to products.json!"
                .to_owned(),
            no_reviews: "No reviews yet.".to_owned(),
            contact_for_price: "Contact for price".to_owned(),
        }
    }
}

impl SiteConfig {
    // section ids of the nav links, in display order
    pub fn nav_sections(&self) -> Vec<String> {
        if self.nav.is_empty() {
            default_nav().into_iter().map(|link| link.section).collect()
        } else {
            self.nav.iter().map(|link| link.section.clone()).collect()
        }
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.nav.is_empty() {
            default_nav()
        } else {
            self.nav.clone()
        }
    }
}

fn default_nav() -> Vec<NavLink> {
    [
        ("Home", "home"),
        ("Work", "work"),
        ("Reviews", "reviews"),
        ("FAQ", "faq"),
    ]
    .into_iter()
    .map(|(label, section)| NavLink {
        label: label.to_owned(),
        section: section.to_owned(),
    })
    .collect()
}

// the site table sits under [site] so the same file can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.site)
}

// a broken config never takes the page down, it just falls back to the defaults
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> SiteConfig {
    debug!("parsing site config");

    match parse_config(doc) {
        Ok(config) => {
            debug!("successfully parsed site config");
            config
        }
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}
