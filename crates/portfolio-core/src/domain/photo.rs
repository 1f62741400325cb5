//! Photo Entity

use serde::{Deserialize, Serialize};

use super::category::Categorized;
use super::entity::Entity;

/// A gallery photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub category: String,
    pub description: String,
}

impl Entity for Photo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Categorized for Photo {
    fn category(&self) -> &str {
        &self.category
    }
}
