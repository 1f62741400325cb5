//! Portfolio Core
//!
//! Target-independent half of the portfolio site:
//! - domain: content records, dates, categories, errors
//! - repository: read-only catalogs and the bundled content store
//! - browse / listing / contact / loader: UI state machines driven by the pages
//! - route / config: route table and runtime site configuration

pub mod domain;
pub mod repository;
pub mod browse;
pub mod listing;
pub mod contact;
pub mod loader;
pub mod route;
pub mod config;

pub use domain::{
    Article, BlogBody, BlogPost, Category, CategoryDef, CategorySet, Categorized, DomainError,
    DomainResult, Entity, Photo, PublishedOn, Resume, ALL_CATEGORY,
};
pub use repository::{Catalog, ContentStore, Repository};
pub use browse::{Browser, Direction, Filter};
pub use config::{RouterMode, SiteConfig};
pub use route::Route;
