//! # lavka-core: Pure Catalog Logic for Lavka
//!
//! This crate is the **heart** of the Lavka catalog. It contains the whole
//! product/category aggregation and validation engine with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lavka Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 showcase binary (lavka-data)                    │   │
//! │  │        config load ──► catalog load ──► narrated walkthrough    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 lavka-data (Document Layer)                     │   │
//! │  │      JSON catalog loader, TOML config, tracing observer         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lavka-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ category  │  │  cursor   │  │   money   │  │   │
//! │  │   │  Product  │  │ Category  │  │  Product  │  │   Money   │  │   │
//! │  │   │  resolve  │  │ listings  │  │  Cursor   │  │  kopecks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │   order   │  │ validation│  │  render   │  │   │
//! │  │   │ counters  │  │ snapshot  │  │   rules   │  │  labels   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The validated item record, its kinds, and the
//!   upsert-by-name `resolve` factory
//! - [`category`] - The ordered product aggregate and derived statistics
//! - [`cursor`] - Single-pass sequential traversal over a category
//! - [`order`] - Immutable purchase snapshots
//! - [`registry`] - Shared counters and the creation observer hook
//! - [`money`] - Integer-kopeck money type (no floating point!)
//! - [`validation`] - Catalog field rules
//! - [`render`] - Configurable listing labels
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Reject-and-retain**: a failed write never corrupts prior state —
//!    the old value stays, the caller gets a typed error
//! 2. **No I/O**: file, network and logging access is FORBIDDEN here
//! 3. **Integer Money**: every price is kopecks (i64), floats exist only at
//!    the document boundary and convert through one checked path
//! 4. **Explicit Errors**: typed enums, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lavka_core::{Category, Money, Product, Registry};
//!
//! let registry = Registry::new();
//! let mut category = Category::new("Смартфоны", "Гаджеты для жизни", &registry);
//!
//! category.add(
//!     Product::new("iPhone 13", "Смартфон от Apple", Money::from_kopecks(8_000_000), 5)
//!         .unwrap(),
//! );
//!
//! assert_eq!(category.len(), 1);
//! assert_eq!(category.average_price(), Money::from_kopecks(8_000_000));
//! assert_eq!(registry.products_added(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod category;
pub mod cursor;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
pub mod registry;
pub mod render;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lavka_core::Product` instead of
// `use lavka_core::product::Product`

pub use category::Category;
pub use cursor::ProductCursor;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::Order;
pub use product::{Product, ProductInfo, ProductKind, Resolved};
pub use registry::{CatalogObserver, Registry};
pub use render::SummaryStyle;
