use serde::{Deserialize, Serialize};

use crate::resource;

// structs and types

pub const MAX_STARS: i64 = 5;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub badges: Vec<Badge>,
    pub reviews: Vec<Review>,
}

// badges are carried through untouched; nothing on the page draws them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(pub serde_json::Value);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub author: String,
    pub text: String,
    pub stars: i64,
}

impl Review {
    pub fn star_count(&self) -> usize {
        self.stars.clamp(0, MAX_STARS) as usize
    }
}

resource!(Settings, Settings);
