use serde::{Deserialize, Serialize};

use partstock_core::{ComponentId, DomainError, DomainResult, Entity, FieldError};
use partstock_validation::{is_empty_field, parse_positive_number};

/// A component (inventory item) as returned by the API.
///
/// `price` is `None` when the API sends `null` or omits it; such records are
/// still listed and render as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub category: String,
}

impl Entity for Component {
    type Id = ComponentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Request body for create/update (a component without its id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDraft {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub supplier: String,
    pub category: String,
}

/// Raw form input, as typed by the user.
///
/// Every field is text; `validate` turns it into a `ComponentDraft` or
/// reports every failing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentForm {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: String,
    pub supplier: String,
    pub category: String,
}

impl ComponentForm {
    pub fn validate(&self) -> DomainResult<ComponentDraft> {
        let mut errors = Vec::new();

        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("brand", &self.brand),
            ("supplier", &self.supplier),
            ("category", &self.category),
        ];
        for (field, value) in required {
            if is_empty_field(Some(value.as_str())) {
                errors.push(FieldError::new(field, "required"));
            }
        }

        let price = parse_positive_number(&self.price);
        if price.is_none() {
            errors.push(FieldError::new("price", "must be a positive number"));
        }

        match price {
            Some(price) if errors.is_empty() => Ok(ComponentDraft {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                brand: self.brand.trim().to_string(),
                price,
                supplier: self.supplier.trim().to_string(),
                category: self.category.trim().to_string(),
            }),
            _ => Err(DomainError::InvalidFields(errors)),
        }
    }
}

impl From<&Component> for ComponentForm {
    fn from(c: &Component) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            brand: c.brand.clone(),
            price: c.price.map(|p| p.to_string()).unwrap_or_default(),
            supplier: c.supplier.clone(),
            category: c.category.clone(),
        }
    }
}
