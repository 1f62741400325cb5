//! Route Table
//!
//! Maps URL paths to pages. Parsing is total: anything unrecognised becomes
//! `Route::NotFound`, and unknown content ids are left for the page to
//! resolve so it can render its own "not found" view.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::RouterMode;

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Blog,
    /// `/blog/:id`, markdown post by slug
    BlogPost(String),
    /// `/post/:id`, bundled article by numeric id
    Article(String),
    Gallery,
    Contact,
    /// `/category/:slug`, articles in one category
    Category(String),
    NotFound(String),
}

/// Header navigation, in display order
pub const PRIMARY_NAV: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Experience, "Experience"),
    (Route::Education, "Education"),
    (Route::Skills, "Skills"),
    (Route::Projects, "Projects"),
    (Route::Blog, "Blog"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

impl Route {
    /// Parse a path such as `/blog/my-post?x=1`
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

        match parts.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["experience"] => Route::Experience,
            ["education"] => Route::Education,
            ["skills"] => Route::Skills,
            ["projects"] => Route::Projects,
            ["blog"] => Route::Blog,
            ["blog", id] => Route::BlogPost(id.to_string()),
            ["post", id] => Route::Article(id.to_string()),
            ["gallery"] => Route::Gallery,
            ["contact"] => Route::Contact,
            ["category", slug] => Route::Category(slug.to_string()),
            _ => Route::NotFound(format!("/{}", segments.join("/"))),
        }
    }

    /// Parse `location.hash` (`#/blog` or empty).
    ///
    /// A hash without a leading slash (`#setup`) is an in-page anchor and
    /// names no route.
    pub fn from_hash(hash: &str) -> Option<Route> {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        if hash.is_empty() {
            return Some(Route::Home);
        }
        hash.starts_with('/').then(|| Route::parse(hash))
    }

    /// Canonical path
    pub fn path(&self) -> String {
        let seg = |s: &str| utf8_percent_encode(s, SEGMENT_ENCODE_SET).to_string();
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Experience => "/experience".to_string(),
            Route::Education => "/education".to_string(),
            Route::Skills => "/skills".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(id) => format!("/blog/{}", seg(id)),
            Route::Article(id) => format!("/post/{}", seg(id)),
            Route::Gallery => "/gallery".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Category(slug) => format!("/category/{}", seg(slug)),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Link target for the given router mode
    pub fn href(&self, mode: RouterMode) -> String {
        match mode {
            RouterMode::Hash => format!("#{}", self.path()),
            RouterMode::Path => self.path(),
        }
    }

    /// Whether a nav entry for `self` should be highlighted on `current`
    pub fn is_section_of(&self, current: &Route) -> bool {
        match (self, current) {
            (Route::Blog, Route::BlogPost(_)) => true,
            (Route::Home, Route::Article(_) | Route::Category(_)) => true,
            _ => self == current,
        }
    }

    /// Document title suffix
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Experience => "Experience",
            Route::Education => "Education",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Blog | Route::BlogPost(_) => "Blog",
            Route::Article(_) => "Article",
            Route::Gallery => "Gallery",
            Route::Contact => "Contact",
            Route::Category(_) => "Category",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// Lowercase, ASCII-alphanumeric words joined by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
