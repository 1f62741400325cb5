//! Pages
//!
//! One component per route. Each page reads the content store from context
//! and owns its local UI state, which is dropped when the route changes.

mod home;
mod about;
mod experience;
mod education;
mod skills;
mod projects;
mod blog;
mod blog_post;
mod article;
mod category;
mod gallery;
mod contact;
mod not_found;

pub use home::HomePage;
pub use about::AboutPage;
pub use experience::ExperiencePage;
pub use education::EducationPage;
pub use skills::SkillsPage;
pub use projects::ProjectsPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use article::ArticlePage;
pub use category::CategoryPage;
pub use gallery::GalleryPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;
