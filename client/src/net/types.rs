//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Records deserialize the backend's model shape, which capitalizes the
//! identifier and timestamp keys (`ID`, `CreatedAt`, `UpdatedAt`). Drafts are
//! the request bodies for create/update and carry only editable fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email/password pair for `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub email: String,
}

/// Backend error body: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A product as returned by `/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "CreatedAt", alias = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", alias = "updated_at", default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /products` and `PUT /products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

/// A spice category as returned by `/spices`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiceCategory {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "CreatedAt", alias = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", alias = "updated_at", default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /spices` and `PUT /spices/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpiceDraft {
    pub name: String,
    pub description: String,
}
