//! # Tracing Observer
//!
//! The creation-announcement hook, backed by `tracing`.
//!
//! The core fires [`CatalogObserver`] callbacks but never logs itself; this
//! implementation is where those callbacks become structured log events.
//! Attach it when building the registry:
//!
//! ```rust
//! use lavka_core::Registry;
//! use lavka_data::observer::TracingObserver;
//!
//! let registry = Registry::with_observer(TracingObserver);
//! ```

use tracing::info;

use lavka_core::{CatalogObserver, Category, Product};

// =============================================================================
// Tracing Observer
// =============================================================================

/// Announces catalog entities as `info!` events with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CatalogObserver for TracingObserver {
    fn category_created(&self, category: &Category) {
        info!(
            category = category.name(),
            description = category.description(),
            "категория создана"
        );
    }

    fn product_added(&self, category_name: &str, product: &Product) {
        info!(
            category = category_name,
            product = product.name(),
            kind = product.kind().label(),
            price = %product.price(),
            quantity = product.quantity(),
            "продукт добавлен"
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
