//! Domain Layer
//!
//! Content records displayed by the site. Everything here is built once from
//! bundled content and never mutated afterwards.

mod entity;
mod published;
mod category;
mod article;
mod blog_post;
mod photo;
mod resume;

pub use entity::{DomainError, DomainResult, Entity};
pub use published::{DatePrecision, PublishedOn};
pub use category::{Category, CategoryDef, CategorySet, Categorized, ALL_CATEGORY};
pub use article::Article;
pub use blog_post::{estimate_read_minutes, BlogBody, BlogPost, DEFAULT_COVER_IMAGE};
pub use photo::Photo;
pub use resume::{Award, Certification, Education, Experience, Profile, Project, Resume, SkillGroup, SocialLink};
