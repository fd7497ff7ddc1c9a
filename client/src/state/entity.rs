//! Entity descriptors binding wire records to their forms, routes, and tables.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::de::DeserializeOwned;

use crate::net::types::{Product, SpiceCategory};
use crate::state::form::{FormModel, ProductFields, SpiceFields};

/// Request body type for an entity's create/update calls.
pub type DraftOf<E> = <<E as Entity>::Form as FormModel>::Draft;

/// A backend-owned record type managed by one list view.
pub trait Entity: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Form: FormModel;

    /// Collection path under the API base, e.g. `/products`.
    const PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    /// Capitalized singular for buttons and dialog titles.
    const LABEL: &'static str;
    /// Page heading.
    const TITLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> u64;

    /// Editable fields pre-filled from this record.
    fn form(&self) -> Self::Form;

    /// Display text for each column in `COLUMNS`.
    fn cells(&self) -> Vec<String>;

    fn item_path(id: u64) -> String {
        format!("{}/{id}", Self::PATH)
    }
}

fn description_cell(description: &str) -> String {
    if description.trim().is_empty() { "—".to_owned() } else { description.to_owned() }
}

/// Price as shown in tables: `$` and two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

impl Entity for Product {
    type Form = ProductFields;

    const PATH: &'static str = "/products";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";
    const LABEL: &'static str = "Product";
    const TITLE: &'static str = "Products";
    const COLUMNS: &'static [&'static str] = &["Name", "Description", "Price", "Stock"];

    fn id(&self) -> u64 {
        self.id
    }

    fn form(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.to_string(),
            stock: self.stock.to_string(),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            description_cell(&self.description),
            format_price(self.price),
            self.stock.to_string(),
        ]
    }
}

impl Entity for SpiceCategory {
    type Form = SpiceFields;

    const PATH: &'static str = "/spices";
    const SINGULAR: &'static str = "spice category";
    const PLURAL: &'static str = "spice categories";
    const LABEL: &'static str = "Spice Category";
    const TITLE: &'static str = "Spice Categories";
    const COLUMNS: &'static [&'static str] = &["Name", "Description"];

    fn id(&self) -> u64 {
        self.id
    }

    fn form(&self) -> SpiceFields {
        SpiceFields { name: self.name.clone(), description: self.description.clone() }
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), description_cell(&self.description)]
    }
}
