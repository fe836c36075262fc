use std::fmt;

use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::{Level, debug, instrument};

pub mod product;
pub mod project;
pub mod settings;

pub const DEFAULT_BASE_PATH: &str = "./";

// static content
//
// the whole site is driven by three json documents that live next to the page.
// each is fetched once at startup and never written back
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Settings,
    Projects,
    Products,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Settings, Resource::Projects, Resource::Products];

    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Settings => "settings.json",
            Resource::Projects => "projects.json",
            Resource::Products => "products.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// fetching
//
// everything above this trait only ever sees the raw document, so the content store
// can be driven from memory when there is no browser around
#[async_trait(?Send)]
pub trait Fetch {
    async fn fetch(&self, resource: Resource) -> anyhow::Result<String>;
}

#[derive(Clone, Debug)]
pub struct HttpFetch {
    base: String,
}

impl HttpFetch {
    pub fn new(base: impl Into<String>) -> Self {
        HttpFetch { base: base.into() }
    }

    pub fn url(&self, resource: Resource) -> String {
        if self.base.is_empty() || self.base.ends_with('/') {
            format!("{}{}", self.base, resource.file_name())
        } else {
            format!("{}/{}", self.base, resource.file_name())
        }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        HttpFetch::new(DEFAULT_BASE_PATH)
    }
}

#[async_trait(?Send)]
impl Fetch for HttpFetch {
    #[instrument(level=Level::DEBUG, skip(self))]
    async fn fetch(&self, resource: Resource) -> anyhow::Result<String> {
        let url = self.url(resource);

        debug!("requesting {url}");

        let resp = Request::get(&url).send().await?;

        if resp.ok() {
            Ok(resp.text().await?)
        } else {
            Err(anyhow::Error::msg(format!(
                "failed to load {resource}: status {}",
                resp.status()
            )))
        }
    }
}

// typed fetch
//
// resource!(Projects, Vec<Project>) expands to fetch_projects(), which pulls the
// matching document through any Fetch and parses it
#[macro_export]
macro_rules! resource {
    ($name:ident, $ty:ty) => {
        paste::paste! {
            pub async fn [<fetch_ $name:snake>](source: &impl $crate::Fetch) -> anyhow::Result<$ty> {
                let doc = source.fetch($crate::Resource::[<$name:camel>]).await?;

                Ok(serde_json::from_str(&doc)?)
            }
        }
    };
}
