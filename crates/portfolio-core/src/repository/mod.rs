//! Repository Layer
//!
//! Read-only access to bundled content:
//! - traits: lookup contract shared by all collections
//! - catalog: in-memory collection with an id index
//! - content: the store assembled once at startup

mod traits;
mod catalog;
mod content;

pub use traits::Repository;
pub use catalog::Catalog;
pub use content::{ContentSources, ContentStore};
