use serde::{Deserialize, Serialize};

use crate::domain::common::CategoryId;

/// Категория оборудования (Laptops, Peripherals, ...)
///
/// The identifier is optional: some endpoints embed a category by name only,
/// and the inventory filter falls back to a text search in that case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(CategoryId(id)),
            name: Some(name.into()),
        }
    }

    /// Category known only by its display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Display name, if a non-blank one is present
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Label for a category tile
    pub fn tile_label(&self) -> &str {
        self.display_name().unwrap_or("Category")
    }
}
