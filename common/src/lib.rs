// the page controller, minus the page
//
// everything in here runs the same on a native target as in the browser: the web front
// end owns the markup and the browser apis, and talks to App only through commands and
// effects

pub mod app;
pub mod config;
pub mod faq;
pub mod nav;
pub mod overlay;
pub mod render;
pub mod screen;
pub mod store;

pub use app::{App, Command, Effect, Key};
pub use config::{SiteConfig, read_config};
pub use store::ContentStore;
