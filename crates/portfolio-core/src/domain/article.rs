//! Article Entity
//!
//! Long-form articles bundled with the site. Bodies are markdown and are
//! attached by the content store after the metadata table is parsed.

use serde::{Deserialize, Serialize};

use super::category::Categorized;
use super::entity::Entity;
use super::published::PublishedOn;
use crate::listing::Dated;
use crate::route::slugify;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub published: PublishedOn,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub read_time: Option<String>,
    pub image: String,
    pub excerpt: String,
    /// Markdown body
    #[serde(default)]
    pub body: String,
    /// Ids of related articles, in display order
    #[serde(default)]
    pub related: Vec<u32>,
}

impl Article {
    /// Slug used by `/category/:slug`
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }
}

impl Entity for Article {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Categorized for Article {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Dated for Article {
    fn published(&self) -> PublishedOn {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": 7,
            "title": "Aqueducts",
            "published": "March 5, 2025",
            "author": "Vitruvius",
            "category": "Code Quality",
            "image": "/images/a.jpg",
            "excerpt": "Water flows downhill."
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id(), 7);
        assert!(article.related.is_empty());
        assert!(article.read_time.is_none());
        assert_eq!(article.category_slug(), "code-quality");
    }
}
