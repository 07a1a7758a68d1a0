//! View-model rows for the component list.

use partstock_core::ComponentId;
use partstock_format::format_currency;

use crate::component::Component;
use crate::filter::{ComponentFilter, filter_components};

/// One rendered line of the component table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRow {
    pub id: ComponentId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub supplier: String,
    pub category: String,
    pub price: String,
}

impl From<&Component> for ComponentRow {
    fn from(c: &Component) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            brand: c.brand.clone(),
            supplier: c.supplier.clone(),
            category: c.category.clone(),
            price: format_currency(c.price),
        }
    }
}

/// Map (collection, filter state) to the ordered rows to display.
pub fn render_rows(items: &[Component], filter: &ComponentFilter) -> Vec<ComponentRow> {
    filter_components(items, filter)
        .into_iter()
        .map(ComponentRow::from)
        .collect()
}
