use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::domain::common::{lenient, CategoryId, EquipmentId};

/// Единица оборудования в каталоге
///
/// Immutable snapshot of a backend row. The console never mutates it; a reload
/// replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: EquipmentId,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,

    /// Units available for checkout
    #[serde(default, deserialize_with = "lenient::stock_count")]
    pub quantity: u32,

    #[serde(default, deserialize_with = "optional_category_id")]
    pub category_id: Option<CategoryId>,
    /// Eager-loaded relation, present on some endpoints
    #[serde(default)]
    pub category: Option<Category>,
}

fn optional_category_id<'de, D>(deserializer: D) -> Result<Option<CategoryId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::optional_i64(deserializer)?.map(CategoryId))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl EquipmentItem {
    pub fn new(id: i64, brand: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: EquipmentId(id),
            name: None,
            brand: Some(brand.into()),
            model: None,
            specifications: None,
            quantity,
            category_id: None,
            category: None,
        }
    }

    /// Name used in the cart and the request summary: name, then brand
    pub fn display_name(&self) -> &str {
        non_blank(&self.name)
            .or_else(|| non_blank(&self.brand))
            .unwrap_or("Unknown")
    }

    pub fn brand_label(&self) -> &str {
        non_blank(&self.brand).unwrap_or("Unknown")
    }

    pub fn model_label(&self) -> &str {
        non_blank(&self.model).unwrap_or("Model")
    }

    pub fn specifications_label(&self) -> &str {
        non_blank(&self.specifications).unwrap_or("No specs available")
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(Category::display_name)
    }
}
