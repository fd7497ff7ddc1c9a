//! Editable form models for entity overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form inputs hold raw strings; a `FormModel` knows its field layout, how to
//! read/write a field by key, and how to validate itself into the request
//! draft. Validation repeats the native input constraints so a submission
//! never reaches the network with a blank name, a non-positive price, or a
//! negative stock.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;

use crate::net::types::{ProductDraft, SpiceDraft};

/// Input widget and native constraints for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number { min: &'static str, step: &'static str },
}

/// Static description of one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

/// Submission-time validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be a whole number")]
    NotWhole(&'static str),
    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

/// A form over an entity's editable fields.
pub trait FormModel: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Validated request body produced on submit.
    type Draft: Clone + Serialize + Send + Sync + 'static;

    const FIELDS: &'static [FieldSpec];

    fn value(&self, key: &str) -> String;
    fn set(&mut self, key: &str, value: String);

    /// # Errors
    ///
    /// Returns the first field that violates its constraint.
    fn validate(&self) -> Result<Self::Draft, FieldError>;
}

fn required_text(value: &str, label: &'static str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(label));
    }
    Ok(trimmed.to_owned())
}

fn positive_decimal(value: &str, label: &'static str) -> Result<f64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(label));
    }
    let parsed: f64 = trimmed.parse().map_err(|_| FieldError::NotANumber(label))?;
    if !parsed.is_finite() {
        return Err(FieldError::NotANumber(label));
    }
    if parsed <= 0.0 {
        return Err(FieldError::NotPositive(label));
    }
    Ok(parsed)
}

fn non_negative_integer(value: &str, label: &'static str) -> Result<i64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(label));
    }
    let parsed: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) if trimmed.parse::<f64>().is_ok() => return Err(FieldError::NotWhole(label)),
        Err(_) => return Err(FieldError::NotANumber(label)),
    };
    if parsed < 0 {
        return Err(FieldError::Negative(label));
    }
    Ok(parsed)
}

// =============================================================================
// PRODUCT
// =============================================================================

/// Product form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self { name: String::new(), description: String::new(), price: "0".to_owned(), stock: "0".to_owned() }
    }
}

impl FormModel for ProductFields {
    type Draft = ProductDraft;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", label: "Name", kind: FieldKind::Text, required: true, placeholder: "" },
        FieldSpec { key: "description", label: "Description", kind: FieldKind::TextArea, required: false, placeholder: "" },
        FieldSpec {
            key: "price",
            label: "Price",
            kind: FieldKind::Number { min: "0.01", step: "0.01" },
            required: true,
            placeholder: "",
        },
        FieldSpec {
            key: "stock",
            label: "Stock",
            kind: FieldKind::Number { min: "0", step: "1" },
            required: true,
            placeholder: "",
        },
    ];

    fn value(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "price" => self.price.clone(),
            "stock" => self.stock.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
            "price" => self.price = value,
            "stock" => self.stock = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<ProductDraft, FieldError> {
        Ok(ProductDraft {
            name: required_text(&self.name, "Name")?,
            description: self.description.clone(),
            price: positive_decimal(&self.price, "Price")?,
            stock: non_negative_integer(&self.stock, "Stock")?,
        })
    }
}

// =============================================================================
// SPICE CATEGORY
// =============================================================================

/// Spice category form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpiceFields {
    pub name: String,
    pub description: String,
}

impl FormModel for SpiceFields {
    type Draft = SpiceDraft;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", label: "Name", kind: FieldKind::Text, required: true, placeholder: "e.g. Turmeric" },
        FieldSpec {
            key: "description",
            label: "Description",
            kind: FieldKind::TextArea,
            required: false,
            placeholder: "Optional description…",
        },
    ];

    fn value(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<SpiceDraft, FieldError> {
        Ok(SpiceDraft { name: required_text(&self.name, "Name")?, description: self.description.clone() })
    }
}
