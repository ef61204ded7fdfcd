//! Inventory filter
//!
//! Turns a category click into the equipment query to re-fetch, and keeps the
//! label used to highlight the selected category tile.

use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::CategoryId;
use serde::Serialize;

/// What the user clicked: a structured category or a bare display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    Category(Category),
    Name(String),
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        CategorySelector::Category(category)
    }
}

impl From<&Category> for CategorySelector {
    fn from(category: &Category) -> Self {
        CategorySelector::Category(category.clone())
    }
}

impl From<String> for CategorySelector {
    fn from(name: String) -> Self {
        CategorySelector::Name(name)
    }
}

impl From<&str> for CategorySelector {
    fn from(name: &str) -> Self {
        CategorySelector::Name(name.to_string())
    }
}

impl CategorySelector {
    /// Label for highlighting: category name, else the raw string as given.
    /// Blank strings count as absent.
    pub fn label(&self) -> Option<&str> {
        match self {
            CategorySelector::Category(category) => category.display_name(),
            CategorySelector::Name(name) => Some(name.as_str()).filter(|n| !n.trim().is_empty()),
        }
    }
}

/// `GET /equipment` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentQuery {
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl EquipmentQuery {
    pub fn all(per_page: u32) -> Self {
        Self {
            per_page,
            category_id: None,
            search: None,
        }
    }

    /// Endpoint path with the encoded query string
    pub fn path(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) => format!("/equipment?{}", qs),
            Err(e) => {
                log::warn!("failed to encode equipment query {:?}: {}", self, e);
                format!("/equipment?per_page={}", self.per_page)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFilter {
    per_page: u32,
    selected: Option<CategorySelector>,
}

impl InventoryFilter {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            selected: None,
        }
    }

    /// Query for a selector, without touching the current selection.
    ///
    /// An identifier scopes the query; without one a non-blank name becomes a
    /// text search; otherwise the query is unscoped.
    pub fn query_for(&self, selector: &CategorySelector) -> EquipmentQuery {
        let mut query = EquipmentQuery::all(self.per_page);
        match selector {
            CategorySelector::Category(Category { id: Some(id), .. }) => {
                query.category_id = Some(*id);
            }
            other => {
                query.search = other.label().map(str::to_string);
            }
        }
        query
    }

    /// Select a category and return the query to re-fetch with.
    /// Selecting the same category again yields the same query.
    pub fn filter_by_category(&mut self, selector: impl Into<CategorySelector>) -> EquipmentQuery {
        let selector = selector.into();
        let query = self.query_for(&selector);
        log::debug!(
            "inventory filter: {:?} -> {}",
            selector.label(),
            query.path()
        );
        self.selected = Some(selector);
        query
    }

    /// Query for the current selection (unscoped when nothing is selected)
    pub fn current_query(&self) -> EquipmentQuery {
        match &self.selected {
            Some(selector) => self.query_for(selector),
            None => EquipmentQuery::all(self.per_page),
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.as_ref().and_then(CategorySelector::label)
    }

    /// Whether a category tile should be rendered as selected
    pub fn is_selected(&self, category: &Category) -> bool {
        match &self.selected {
            Some(CategorySelector::Category(current)) => match (current.id, category.id) {
                (Some(a), Some(b)) => a == b,
                _ => current.display_name().is_some()
                    && current.display_name() == category.display_name(),
            },
            Some(CategorySelector::Name(_)) => {
                self.selected_label().is_some() && self.selected_label() == category.display_name()
            }
            None => false,
        }
    }

    /// Heading of the equipment panel
    pub fn inventory_title(&self) -> String {
        match self.selected_label() {
            Some(label) => format!("{} Types", label),
            None => "Equipment Types".to_string(),
        }
    }

    pub fn empty_inventory_message(&self) -> String {
        match self.selected_label() {
            Some(label) => format!("No {} equipment found", label),
            None => "No equipment found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> InventoryFilter {
        InventoryFilter::new(100)
    }

    #[test]
    fn test_name_only_category_falls_back_to_search() {
        let mut f = filter();
        let query = f.filter_by_category(Category::named("Laptops"));
        assert_eq!(query.search.as_deref(), Some("Laptops"));
        assert_eq!(query.category_id, None);
        assert_eq!(query.path(), "/equipment?per_page=100&search=Laptops");
        assert_eq!(f.selected_label(), Some("Laptops"));
    }

    #[test]
    fn test_id_scoped_query_wins_over_name() {
        let mut f = filter();
        let query = f.filter_by_category(Category::new(7, "Laptops"));
        assert_eq!(query.category_id, Some(CategoryId(7)));
        assert_eq!(query.search, None);
        assert_eq!(query.path(), "/equipment?per_page=100&category_id=7");
    }

    #[test]
    fn test_raw_string_selector() {
        let mut f = filter();
        let query = f.filter_by_category("Projectors");
        assert_eq!(query.search.as_deref(), Some("Projectors"));
        assert_eq!(f.selected_label(), Some("Projectors"));
    }

    #[test]
    fn test_raw_string_is_used_as_given() {
        let mut f = filter();
        let query = f.filter_by_category(" 4K Monitors ");
        assert_eq!(query.search.as_deref(), Some(" 4K Monitors "));
        assert_eq!(f.selected_label(), Some(" 4K Monitors "));
        assert_eq!(f.inventory_title(), " 4K Monitors  Types");
    }

    #[test]
    fn test_empty_selector_is_unscoped() {
        let mut f = filter();
        assert_eq!(f.filter_by_category(""), EquipmentQuery::all(100));
        assert_eq!(f.selected_label(), None);
        assert_eq!(f.filter_by_category("   "), EquipmentQuery::all(100));
        assert_eq!(f.selected_label(), None);
        assert_eq!(f.filter_by_category(Category::default()), EquipmentQuery::all(100));
        assert_eq!(EquipmentQuery::all(100).path(), "/equipment?per_page=100");
    }

    #[test]
    fn test_id_without_name_has_no_label() {
        let mut f = filter();
        let category = Category {
            id: Some(CategoryId(3)),
            name: None,
        };
        let query = f.filter_by_category(&category);
        assert_eq!(query.category_id, Some(CategoryId(3)));
        assert_eq!(f.selected_label(), None);
        assert!(f.is_selected(&category));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut f = filter();
        let laptops = Category::new(1, "Laptops");
        let first = f.filter_by_category(&laptops);
        let state = f.clone();
        let second = f.filter_by_category(&laptops);
        assert_eq!(first, second);
        assert_eq!(f, state);
        assert_eq!(f.current_query(), first);
    }

    #[test]
    fn test_highlight_and_titles() {
        let mut f = filter();
        assert_eq!(f.inventory_title(), "Equipment Types");
        assert_eq!(f.empty_inventory_message(), "No equipment found");

        f.filter_by_category(Category::new(1, "Laptops"));
        assert!(f.is_selected(&Category::new(1, "Laptops")));
        assert!(!f.is_selected(&Category::new(2, "Laptops")));
        assert_eq!(f.inventory_title(), "Laptops Types");
        assert_eq!(f.empty_inventory_message(), "No Laptops equipment found");

        f.filter_by_category("Mice");
        assert!(f.is_selected(&Category::named("Mice")));
        assert!(!f.is_selected(&Category::new(1, "Laptops")));
        assert_eq!(f.current_query().search.as_deref(), Some("Mice"));
    }
}
