//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod link;
mod header;
mod footer;
mod article_card;
mod blog_card;
mod empty_state;
mod markdown_view;

pub use link::Link;
pub use header::Header;
pub use footer::Footer;
pub use article_card::ArticleCard;
pub use blog_card::BlogCard;
pub use empty_state::EmptyState;
pub use markdown_view::MarkdownView;
