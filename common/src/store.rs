use std::future::Future;

use futures::join;
use tracing::{Level, debug, error, instrument};

use api::{
    Fetch, Resource,
    product::{Product, fetch_products},
    project::{Project, fetch_projects},
    settings::{Settings, fetch_settings},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub resource: Resource,
    pub message: String,
}

// what came back from a single resource load
//
// value is always usable: on failure it is the type's empty value and error says why
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub error: Option<Diagnostic>,
}

pub async fn load<T, Fut>(resource: Resource, fetch: Fut) -> Loaded<T>
where
    T: Default,
    Fut: Future<Output = anyhow::Result<T>>,
{
    match fetch.await {
        Ok(value) => {
            debug!("loaded {resource}");
            Loaded { value, error: None }
        }
        Err(err) => {
            error!("error loading {resource}: {err}");
            Loaded {
                value: T::default(),
                error: Some(Diagnostic {
                    resource,
                    message: err.to_string(),
                }),
            }
        }
    }
}

// content store
//
// the three collections are read once at startup and then only ever borrowed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentStore {
    pub settings: Settings,
    pub projects: Vec<Project>,
    pub products: Vec<Product>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ContentStore {
    // the loads are independent, so one failing never holds up the others
    #[instrument(level=Level::DEBUG, skip(source))]
    pub async fn load(source: &impl Fetch) -> ContentStore {
        let (settings, projects, products) = join!(
            load(Resource::Settings, fetch_settings(source)),
            load(Resource::Projects, fetch_projects(source)),
            load(Resource::Products, fetch_products(source)),
        );

        let diagnostics = [settings.error, projects.error, products.error]
            .into_iter()
            .flatten()
            .collect();

        ContentStore {
            settings: settings.value,
            projects: projects.value,
            products: products.value,
            diagnostics,
        }
    }

    pub fn failed(&self, resource: Resource) -> bool {
        self.diagnostics.iter().any(|d| d.resource == resource)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;

    struct MemoryFetch(HashMap<Resource, String>);

    #[async_trait(?Send)]
    impl Fetch for MemoryFetch {
        async fn fetch(&self, resource: Resource) -> anyhow::Result<String> {
            self.0
                .get(&resource)
                .cloned()
                .ok_or_else(|| anyhow::Error::msg(format!("{resource} not found")))
        }
    }

    fn source(docs: &[(Resource, &str)]) -> MemoryFetch {
        MemoryFetch(
            docs.iter()
                .map(|(resource, doc)| (*resource, doc.to_string()))
                .collect(),
        )
    }

    #[test]
    fn loads_all_three() {
        let store = block_on(ContentStore::load(&source(&[
            (
                Resource::Settings,
                r#"{"badges": [], "reviews": [{"author": "Ana", "text": "Nice", "stars": 5}]}"#,
            ),
            (Resource::Projects, r#"[{"title": "A", "style": "modern"}]"#),
            (Resource::Products, r#"[{"name": "Pack", "price": 25}]"#),
        ])));

        assert_eq!(store.settings.reviews.len(), 1);
        assert_eq!(store.projects[0].title, "A");
        assert_eq!(store.products[0].name, "Pack");
        assert!(store.diagnostics.is_empty());
    }

    #[test]
    fn one_failure_does_not_block_the_others() {
        let store = block_on(ContentStore::load(&source(&[
            (Resource::Projects, r#"[{"title": "A"}, {"title": "B"}]"#),
            (Resource::Products, "not json"),
        ])));

        assert_eq!(store.projects.len(), 2);
        assert!(store.products.is_empty());
        assert_eq!(store.settings, Settings::default());
        assert!(store.failed(Resource::Settings));
        assert!(store.failed(Resource::Products));
        assert!(!store.failed(Resource::Projects));
        assert_eq!(store.diagnostics.len(), 2);
    }

    #[test]
    fn failed_settings_default_to_empty_sections() {
        let store = block_on(ContentStore::load(&source(&[])));

        assert!(store.settings.badges.is_empty());
        assert!(store.settings.reviews.is_empty());
        assert_eq!(store.diagnostics.len(), 3);
        assert!(store.diagnostics[0].message.contains("settings.json"));
    }

    #[test]
    fn load_keeps_the_value_on_success() {
        let loaded = block_on(load(Resource::Projects, async {
            Ok::<_, anyhow::Error>(vec![1, 2, 3])
        }));

        assert_eq!(loaded.value, vec![1, 2, 3]);
        assert!(loaded.error.is_none());
    }
}
