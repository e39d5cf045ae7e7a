use serde::Deserialize;

use super::{Artist, Thumbnails};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ProductCategory {
    Album,
    Single,
    Track,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: ProductCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Creators {
    #[serde(default)]
    pub performers: Vec<Artist>,
}

/// A release, single or track as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: CategoryRef,
    #[serde(default)]
    pub creators: Creators,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: CategoryRef { id: category },
            creators: Creators::default(),
            thumbnails: Thumbnails::default(),
        }
    }

    pub fn category(&self) -> ProductCategory {
        self.category.id
    }

    pub fn performer_names(&self) -> String {
        self.creators
            .performers
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_product() {
        let json = r#"{
            "id": "5555",
            "name": "A Night at the Opera",
            "category": { "id": "Album" },
            "creators": { "performers": [{ "id": "42", "name": "Queen" }] },
            "thumbnails": { "100x100": "https://img/5555/100.jpg" }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category(), ProductCategory::Album);
        assert_eq!(product.performer_names(), "Queen");
        assert_eq!(product.thumbnails.small.as_deref(), Some("https://img/5555/100.jpg"));
        assert_eq!(product.thumbnails.large, None);
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let json = r#"{ "id": "1", "name": "Bundle", "category": { "id": "Bundle" } }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category(), ProductCategory::Other);
        assert_eq!(product.thumbnails, Thumbnails::default());
    }
}
