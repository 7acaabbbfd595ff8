use std::fmt;

use super::model::{InventoryDataset, InventoryRow};

/// Label of the wildcard entry in the category selector.
pub const ALL_CATEGORIES: &str = "All";

// ---------------------------------------------------------------------------
// Category selection
// ---------------------------------------------------------------------------

/// Which categories are in view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value: `"All"` is the wildcard, anything else an exact category.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, row: &InventoryRow) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => row.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Return the rows in view. The wildcard returns every row unchanged.
pub fn filter_rows(rows: &[InventoryRow], filter: &CategoryFilter) -> Vec<InventoryRow> {
    rows.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Selector entries: `"All"` followed by the dataset's categories.
pub fn category_options(dataset: &InventoryDataset) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(dataset.categories.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::row;

    fn rows() -> Vec<InventoryRow> {
        vec![
            row("A", "Toys", 1, 1),
            row("B", "Home", 2, 2),
            row("C", "Toys", 3, 3),
        ]
    }

    #[test]
    fn wildcard_keeps_everything_in_order() {
        assert_eq!(filter_rows(&rows(), &CategoryFilter::All), rows());
    }

    #[test]
    fn exact_category_keeps_matching_rows() {
        let toys = filter_rows(&rows(), &CategoryFilter::from_selection("Toys"));
        let skus: Vec<_> = toys.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "C"]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(filter_rows(&rows(), &CategoryFilter::from_selection("Garden")).is_empty());
    }

    #[test]
    fn options_start_with_wildcard() {
        let ds = InventoryDataset::from_rows(rows());
        assert_eq!(category_options(&ds), vec!["All", "Home", "Toys"]);
        assert_eq!(CategoryFilter::from_selection("All"), CategoryFilter::All);
    }
}
