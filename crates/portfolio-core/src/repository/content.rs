//! Content Store
//!
//! All site content, parsed and validated once at startup. Nothing here is
//! mutated afterwards; pages borrow from the store for rendering.

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{
    Article, BlogPost, CategoryDef, CategorySet, DomainError, DomainResult, Photo, Resume,
};
use crate::listing;
use crate::route::slugify;
use super::catalog::Catalog;
use super::traits::Repository;

const ARTICLES_JSON: &str = include_str!("../../content/articles.json");
const BLOG_POSTS_JSON: &str = include_str!("../../content/blog_posts.json");
const GALLERY_JSON: &str = include_str!("../../content/gallery.json");
const RESUME_JSON: &str = include_str!("../../content/resume.json");

/// Article bodies keyed by article id
const ARTICLE_BODIES: &[(u32, &str)] = &[
    (1, include_str!("../../content/articles/roman-refactoring.md")),
    (2, include_str!("../../content/articles/legion-apis.md")),
    (3, include_str!("../../content/articles/senate-state.md")),
];

/// Raw content tables the store is built from
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub articles_json: &'a str,
    pub article_bodies: &'a [(u32, &'a str)],
    pub blog_posts_json: &'a str,
    pub gallery_json: &'a str,
    pub resume_json: &'a str,
}

impl ContentSources<'static> {
    /// Tables compiled into the binary
    pub fn bundled() -> Self {
        Self {
            articles_json: ARTICLES_JSON,
            article_bodies: ARTICLE_BODIES,
            blog_posts_json: BLOG_POSTS_JSON,
            gallery_json: GALLERY_JSON,
            resume_json: RESUME_JSON,
        }
    }
}

#[derive(Deserialize)]
struct GalleryTable {
    all_label: String,
    categories: Vec<CategoryDef>,
    photos: Vec<Photo>,
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    articles: Catalog<Article>,
    posts: Catalog<BlogPost>,
    photos: Catalog<Photo>,
    categories: CategorySet,
    resume: Resume,
}

impl ContentStore {
    /// Build the store from the bundled tables
    pub fn bundled() -> DomainResult<Self> {
        Self::from_sources(ContentSources::bundled())
    }

    pub fn from_sources(sources: ContentSources<'_>) -> DomainResult<Self> {
        let mut articles: Vec<Article> = serde_json::from_str(sources.articles_json)?;
        for article in articles.iter_mut() {
            if let Some((_, body)) = sources.article_bodies.iter().find(|(id, _)| *id == article.id) {
                article.body = body.to_string();
            }
            if article.body.trim().is_empty() {
                return Err(DomainError::InvalidInput(format!("article {} has no body", article.id)));
            }
        }
        let articles = Catalog::new(articles)?;
        for article in articles.iter() {
            if let Some(missing) = article.related.iter().find(|id| !articles.contains(id)) {
                return Err(DomainError::InvalidInput(format!(
                    "article {} lists unknown related article {}",
                    article.id, missing
                )));
            }
        }

        let posts: Vec<BlogPost> = serde_json::from_str(sources.blog_posts_json)?;
        let posts = Catalog::new(posts)?;

        let gallery: GalleryTable = serde_json::from_str(sources.gallery_json)?;
        let categories = CategorySet::tally(&gallery.all_label, &gallery.categories, &gallery.photos);
        if let Some(photo) = gallery.photos.iter().find(|p| !categories.contains(&p.category)) {
            return Err(DomainError::InvalidInput(format!(
                "photo {} uses undeclared category '{}'",
                photo.id, photo.category
            )));
        }
        let photos = Catalog::new(gallery.photos)?;

        let resume: Resume = serde_json::from_str(sources.resume_json)?;

        info!(
            articles = articles.len(),
            posts = posts.len(),
            photos = photos.len(),
            "content store loaded"
        );

        Ok(Self { articles, posts, photos, categories, resume })
    }

    pub fn articles(&self) -> &Catalog<Article> {
        &self.articles
    }

    pub fn posts(&self) -> &Catalog<BlogPost> {
        &self.posts
    }

    pub fn photos(&self) -> &Catalog<Photo> {
        &self.photos
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Look up an article by the raw `/post/:id` segment.
    ///
    /// A non-numeric segment is `InvalidInput`; an unknown id is `NotFound`.
    pub fn article_by_param(&self, raw: &str) -> DomainResult<&Article> {
        let id = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidInput(format!("article id '{}'", raw)))?;
        self.articles.get(&id)
    }

    pub fn post_by_slug(&self, slug: &str) -> DomainResult<&BlogPost> {
        self.posts.get(&slug.to_string())
    }

    /// Newest `n` articles
    pub fn recent_articles(&self, n: usize) -> Vec<&Article> {
        listing::most_recent(self.articles.list(), n)
    }

    /// Blog posts, newest first
    pub fn posts_newest_first(&self) -> Vec<&BlogPost> {
        listing::newest_first(self.posts.list())
    }

    /// Related articles that resolve, in the order the article lists them
    pub fn related_articles(&self, article: &Article) -> Vec<&Article> {
        article
            .related
            .iter()
            .filter(|id| **id != article.id)
            .filter_map(|id| self.articles.find_by_id(id))
            .collect()
    }

    /// Articles whose category slug matches, newest first
    pub fn articles_in_category(&self, slug: &str) -> Vec<&Article> {
        let slug = slugify(slug);
        let matching: Vec<&Article> = listing::newest_first(self.articles.list())
            .into_iter()
            .filter(|a| a.category_slug() == slug)
            .collect();
        debug!(slug = %slug, count = matching.len(), "category lookup");
        matching
    }

    /// Display name for an article category slug
    pub fn article_category_name(&self, slug: &str) -> Option<&str> {
        let slug = slugify(slug);
        self.articles
            .iter()
            .find(|a| a.category_slug() == slug)
            .map(|a| a.category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogBody, ALL_CATEGORY};

    const GALLERY: &str = r#"{
        "all_label": "All Photos",
        "categories": [{ "id": "travel", "name": "Travel" }],
        "photos": [
            { "id": 1, "src": "/a.jpg", "alt": "", "title": "A", "category": "travel", "description": "" }
        ]
    }"#;

    fn sources() -> ContentSources<'static> {
        ContentSources::bundled()
    }

    #[test]
    fn test_bundled_content_loads() {
        let store = ContentStore::bundled().expect("bundled content should be valid");
        assert_eq!(store.articles().len(), 3);
        assert!(!store.photos().is_empty());
        assert!(store.articles().iter().all(|a| !a.body.is_empty()));
        assert!(!store.resume().projects.is_empty());
    }

    #[test]
    fn test_bundled_category_counts_match_photos() {
        let store = ContentStore::bundled().unwrap();
        let total = store.photos().len();
        assert_eq!(store.categories().get(ALL_CATEGORY).unwrap().count, total);
        for cat in store.categories().iter().filter(|c| !c.is_all()) {
            let matching = store.photos().iter().filter(|p| p.category == cat.id).count();
            assert_eq!(cat.count, matching, "category {}", cat.id);
        }
        assert_eq!(store.categories().get("hobby").unwrap().count, 0);
    }

    #[test]
    fn test_bundled_post_is_remote() {
        let store = ContentStore::bundled().unwrap();
        let post = store.post_by_slug("building-shopSmart").unwrap();
        assert!(matches!(post.body, BlogBody::Remote { .. }));
        assert!(matches!(store.post_by_slug("no-such-post"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_article_by_param() {
        let store = ContentStore::bundled().unwrap();
        assert_eq!(store.article_by_param("2").unwrap().id, 2);
        assert!(matches!(store.article_by_param("99"), Err(DomainError::NotFound(_))));
        assert!(matches!(store.article_by_param("abc"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_recent_articles() {
        let store = ContentStore::bundled().unwrap();
        let first = store.recent_articles(3);
        let ids: Vec<u32> = first.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ids, store.recent_articles(3).iter().map(|a| a.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_related_articles_resolve() {
        let store = ContentStore::bundled().unwrap();
        let article = store.article_by_param("1").unwrap();
        let related: Vec<u32> = store.related_articles(article).iter().map(|a| a.id).collect();
        assert_eq!(related, vec![2, 3]);
    }

    #[test]
    fn test_articles_in_category() {
        let store = ContentStore::bundled().unwrap();
        let found = store.articles_in_category("backend-development");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
        assert_eq!(store.article_category_name("backend-development"), Some("Backend Development"));
        assert!(store.articles_in_category("cooking").is_empty());
    }

    #[test]
    fn test_undeclared_photo_category_rejected() {
        let gallery = GALLERY.replace("\"category\": \"travel\"", "\"category\": \"space\"");
        let src = ContentSources { gallery_json: &gallery, ..sources() };
        let err = ContentStore::from_sources(src).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_related_article_rejected() {
        let articles = r#"[{
            "id": 1, "title": "T", "published": "March 5, 2025", "author": "A",
            "category": "C", "image": "/i.jpg", "excerpt": "E", "related": [42]
        }]"#;
        let src = ContentSources { articles_json: articles, gallery_json: GALLERY, ..sources() };
        let err = ContentStore::from_sources(src).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_body_rejected() {
        let articles = r#"[{
            "id": 77, "title": "T", "published": "March 5, 2025", "author": "A",
            "category": "C", "image": "/i.jpg", "excerpt": "E"
        }]"#;
        let src = ContentSources { articles_json: articles, ..sources() };
        assert!(ContentStore::from_sources(src).is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let src = ContentSources { blog_posts_json: "[{", ..sources() };
        let err = ContentStore::from_sources(src).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
