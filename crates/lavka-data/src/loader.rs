//! # Catalog Document Loader
//!
//! Reads catalog JSON documents and assembles the Category graph.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products.json                                                          │
//! │                                                                         │
//! │  [                                 ← array of category objects          │
//! │    {                                                                    │
//! │      "name": "Смартфоны",                                               │
//! │      "description": "...",                                              │
//! │      "products": [               ← array of product records             │
//! │        { "name": "iPhone 13", "description": "...",                     │
//! │          "price": 80000.0, "quantity": 5 },                             │
//! │        ...                                                              │
//! │      ]                                                                  │
//! │    },                                                                   │
//! │    ...                                                                  │
//! │  ]                                                                      │
//! │                                                                         │
//! │  Unknown keys are ignored; the four product keys are required.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Assembly Pipeline
//! ```text
//! load_document(path) ──► serde_json::Value
//!                              │
//! build_catalog(&doc, &reg) ───┤  per category object:
//!                              │    name/description extracted & validated
//!                              │    each product entry through the SAME
//!                              │    validated path as Category::add_value
//!                              ▼
//!                         Vec<Category>
//!
//! Fail-fast: the FIRST bad entry aborts the whole build. A half-assembled
//! catalog is never returned.
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use lavka_core::error::json_kind;
use lavka_core::{Category, CoreError, Registry, ValidationError};

use crate::error::{DataError, DataResult};

// =============================================================================
// Document Loading
// =============================================================================

/// Reads a UTF-8 JSON document from `path` into a generic value.
///
/// ## Errors
/// - [`DataError::FileNotFound`] when the path does not exist
/// - [`DataError::ReadFailed`] when the file cannot be read as UTF-8
/// - [`DataError::MalformedJson`] when the content is not valid JSON
pub fn load_document(path: impl AsRef<Path>) -> DataResult<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| DataError::from_io(path, err))?;

    let document = serde_json::from_str(&content).map_err(|err| DataError::MalformedJson {
        path: path.to_path_buf(),
        source: err,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "catalog document loaded");
    Ok(document)
}

// =============================================================================
// Catalog Assembly
// =============================================================================

/// Builds one category from a document entry.
///
/// The entry must be an object with string `name` and `description` keys;
/// the optional `products` key must be an array of product records, each of
/// which goes through the same validated path as [`Category::add_value`].
pub fn build_category(entry: &Value, registry: &Registry) -> DataResult<Category> {
    let record = entry
        .as_object()
        .ok_or_else(|| CoreError::type_mismatch("category record", entry))?;

    let name = require_str(record, "name")?;
    let description = require_str(record, "description")?;

    let mut category = Category::new(name, description, registry);

    if let Some(products) = record.get("products") {
        let entries = products
            .as_array()
            .ok_or_else(|| CoreError::type_mismatch("product list", products))?;

        for product in entries {
            category.add_value(product)?;
        }
    }

    debug!(
        category = category.name(),
        products = category.len(),
        "category assembled"
    );
    Ok(category)
}

/// Builds the whole catalog from a loaded document.
///
/// The document must be an array of category objects. Fail-fast: the first
/// invalid entry aborts the build and surfaces its error.
pub fn build_catalog(document: &Value, registry: &Registry) -> DataResult<Vec<Category>> {
    let entries = document
        .as_array()
        .ok_or_else(|| CoreError::type_mismatch("category list", document))?;

    let mut catalog = Vec::with_capacity(entries.len());
    for entry in entries {
        catalog.push(build_category(entry, registry)?);
    }

    info!(categories = catalog.len(), "catalog assembled");
    Ok(catalog)
}

/// Loads and assembles a catalog in one call.
pub fn load_catalog(path: impl AsRef<Path>, registry: &Registry) -> DataResult<Vec<Category>> {
    let document = load_document(path)?;
    build_catalog(&document, registry)
}

/// Extracts a required string field from a category record.
fn require_str<'a>(
    record: &'a serde_json::Map<String, Value>,
    field: &str,
) -> DataResult<&'a str> {
    let value = record.get(field).ok_or_else(|| {
        CoreError::Validation(ValidationError::Required {
            field: field.to_string(),
        })
    })?;

    value.as_str().ok_or_else(|| {
        CoreError::Validation(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected string, found {}", json_kind(value)),
        })
        .into()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
