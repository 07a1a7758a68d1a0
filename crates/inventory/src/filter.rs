//! Search/category filtering over the in-memory component collection.

use std::collections::BTreeSet;

use crate::component::Component;

/// Current search state of the component screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub query: String,
    pub category: Option<String>,
}

impl ComponentFilter {
    pub fn new(query: impl Into<String>, category: Option<String>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Case-insensitive substring match on name, description, brand and
    /// supplier, AND'ed with an exact category match when one is set.
    pub fn matches(&self, component: &Component) -> bool {
        if let Some(category) = &self.category {
            if component.category != *category {
                return false;
            }
        }

        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            &component.name,
            &component.description,
            &component.brand,
            &component.supplier,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Borrowed view of the components matching `filter`, in collection order.
pub fn filter_components<'a>(items: &'a [Component], filter: &ComponentFilter) -> Vec<&'a Component> {
    items.iter().filter(|c| filter.matches(c)).collect()
}

/// Distinct non-empty categories, sorted.
pub fn categories(items: &[Component]) -> Vec<String> {
    items
        .iter()
        .map(|c| c.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
