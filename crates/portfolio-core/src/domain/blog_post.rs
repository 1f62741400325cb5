//! Blog Post Entity
//!
//! Blog posts carry metadata in the bundled table; the body is either inline
//! markdown or a URL fetched when the post is opened.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::published::PublishedOn;
use crate::listing::Dated;

/// Cover shown on the blog index when a post has none
pub const DEFAULT_COVER_IMAGE: &str = "/images/blog/default.png";

const WORDS_PER_MINUTE: usize = 200;

/// Where a post's markdown lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlogBody {
    /// Fetched at runtime as raw text
    Remote { url: String },
    /// Bundled with the metadata
    Inline { markdown: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Slug, matches the markdown file name
    pub id: String,
    pub title: String,
    pub published: PublishedOn,
    pub author: String,
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub body: BlogBody,
}

impl BlogPost {
    /// Cover for the post page, which shows none unless the post sets one
    pub fn featured_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Cover for index cards
    pub fn cover_or_default(&self) -> &str {
        self.cover_image.as_deref().unwrap_or(DEFAULT_COVER_IMAGE)
    }
}

impl Entity for BlogPost {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

impl Dated for BlogPost {
    fn published(&self) -> PublishedOn {
        self.published
    }
}

/// Reading time in whole minutes, never less than one
pub fn estimate_read_minutes(markdown: &str) -> usize {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_kinds() {
        let remote: BlogBody = serde_json::from_str(r#"{"kind":"remote","url":"/blog/a.md"}"#).unwrap();
        assert_eq!(remote, BlogBody::Remote { url: "/blog/a.md".to_string() });

        let inline: BlogBody = serde_json::from_str(r##"{"kind":"inline","markdown":"# Hi"}"##).unwrap();
        assert_eq!(inline, BlogBody::Inline { markdown: "# Hi".to_string() });
    }

    fn post(cover_image: Option<&str>) -> BlogPost {
        BlogPost {
            id: "p".to_string(),
            title: "T".to_string(),
            published: "April 2025".parse().unwrap(),
            author: "A".to_string(),
            excerpt: "E".to_string(),
            cover_image: cover_image.map(str::to_string),
            tags: vec![],
            body: BlogBody::Inline { markdown: String::new() },
        }
    }

    #[test]
    fn test_cover_fallback() {
        let post = post(None);
        assert_eq!(post.cover_or_default(), DEFAULT_COVER_IMAGE);
        assert_eq!(post.featured_image(), None);
    }

    #[test]
    fn test_featured_image_only_when_set() {
        let post = post(Some("/images/blog/shop.png"));
        assert_eq!(post.featured_image(), Some("/images/blog/shop.png"));
        assert_eq!(post.cover_or_default(), "/images/blog/shop.png");
    }

    #[test]
    fn test_read_minutes() {
        assert_eq!(estimate_read_minutes(""), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(200)), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(201)), 2);
    }
}
