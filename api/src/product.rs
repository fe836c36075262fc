use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resource;

// structs and types

pub const FREE: &str = "free";

// prices come in either as a bare number or as the literal string "free"
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    pub fn is_free(&self) -> bool {
        match self {
            Price::Amount(amount) => *amount == 0.0,
            Price::Label(label) => label == FREE,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            _ if self.is_free() => f.write_str("FREE"),
            Price::Amount(amount) => write!(f, "${amount}"),
            Price::Label(label) => write!(f, "${label}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub image: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_link: Option<String>,
}

impl Product {
    pub fn long_description(&self) -> &str {
        match self.detailed_description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => &self.description,
        }
    }

    pub fn purchase_link(&self) -> Option<&str> {
        self.purchase_link.as_deref().filter(|l| !l.is_empty())
    }
}

resource!(Products, Vec<Product>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats() {
        assert_eq!(Price::Amount(0.0).to_string(), "FREE");
        assert_eq!(Price::Label("free".to_owned()).to_string(), "FREE");
        assert_eq!(Price::Amount(25.0).to_string(), "$25");
        assert_eq!(Price::Amount(9.5).to_string(), "$9.5");
        assert_eq!(Price::Label("12.99".to_owned()).to_string(), "$12.99");
    }

    #[test]
    fn parses_number_and_free_prices() {
        let doc = r#"[
            {"name": "Pack", "image": "p.png", "price": 25, "purchaseLink": "https://shop/p"},
            {"name": "Gift", "image": "g.png", "price": "free", "detailedDescription": "long"},
            {"name": "Zero", "price": 0}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(doc).unwrap();

        assert_eq!(products[0].price, Price::Amount(25.0));
        assert_eq!(products[0].purchase_link(), Some("https://shop/p"));
        assert!(products[1].price.is_free());
        assert_eq!(products[1].long_description(), "long");
        assert!(products[2].price.is_free());
        assert_eq!(products[2].purchase_link(), None);
    }

    #[test]
    fn long_description_falls_back() {
        let product = Product {
            description: "short".to_owned(),
            detailed_description: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(product.long_description(), "short");
    }
}
