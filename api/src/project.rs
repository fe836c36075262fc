use serde::{Deserialize, Serialize};

use crate::resource;

// structs and types

// the style tag that disables filtering
pub const ALL_STYLES: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Project {
    pub fn matches_style(&self, style: &str) -> bool {
        style == ALL_STYLES || self.style == style
    }

    // an empty price string counts as no price at all
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref().filter(|p| !p.is_empty())
    }
}

resource!(Projects, Vec<Project>);
