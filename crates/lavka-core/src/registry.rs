//! # Catalog Registry
//!
//! Shared counters and the creation-announcement hook.
//!
//! ## Why a Registry Object?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GLOBAL COUNTERS vs REGISTRY                                            │
//! │                                                                         │
//! │  Process-global statics:                                                │
//! │    • leak state between tests                                           │
//! │    • cannot be reset deterministically                                  │
//! │    • hide the dependency from every constructor signature               │
//! │                                                                         │
//! │  Registry handle (this module):                                         │
//! │    • one fresh Registry per test = clean counters                       │
//! │    • cheap Clone shares ONE set of counters (Arc inside)                │
//! │    • Category::new(.., &registry) makes the dependency visible          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counters only ever grow: they count categories ever created and
//! products ever added, independent of later destruction. Relaxed atomics
//! are enough; they are statistics, not synchronization.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::category::Category;
use crate::product::Product;

// =============================================================================
// Catalog Observer
// =============================================================================

/// Hook invoked after catalog entities come to life.
///
/// Replaces the "announce on construction" side effect: instead of printing
/// from inside constructors, the registry calls an optional observer after
/// the entity is fully built. The core stays I/O-free; a tracing-backed
/// implementation lives in the data crate.
pub trait CatalogObserver: Send + Sync {
    /// Called once per `Category::new`, after construction.
    fn category_created(&self, category: &Category);

    /// Called once per successful `Category::add` / `add_value`.
    fn product_added(&self, category_name: &str, product: &Product);
}

// =============================================================================
// Registry
// =============================================================================

/// Counters shared across every catalog entity plus the optional observer.
///
/// Cloning a `Registry` is cheap and every clone reads and bumps the SAME
/// counters.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    categories_created: AtomicU64,
    products_added: AtomicU64,
    observer: Option<Box<dyn CatalogObserver>>,
}

impl Registry {
    /// Creates a registry with zeroed counters and no observer.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Creates a registry that announces entities through `observer`.
    pub fn with_observer(observer: impl CatalogObserver + 'static) -> Self {
        Registry {
            inner: Arc::new(RegistryInner {
                categories_created: AtomicU64::new(0),
                products_added: AtomicU64::new(0),
                observer: Some(Box::new(observer)),
            }),
        }
    }

    /// Total categories ever created through this registry.
    pub fn categories_created(&self) -> u64 {
        self.inner.categories_created.load(Ordering::Relaxed)
    }

    /// Total products ever added across all of this registry's categories.
    pub fn products_added(&self) -> u64 {
        self.inner.products_added.load(Ordering::Relaxed)
    }

    /// Bumps the category counter and fires the observer.
    ///
    /// Called by `Category::new` with the fully constructed category.
    pub(crate) fn record_category_created(&self, category: &Category) {
        self.inner
            .categories_created
            .fetch_add(1, Ordering::Relaxed);
        if let Some(observer) = &self.inner.observer {
            observer.category_created(category);
        }
    }

    /// Bumps the product counter and fires the observer.
    ///
    /// Called by `Category::add` after the product is in the collection.
    pub(crate) fn record_product_added(&self, category_name: &str, product: &Product) {
        self.inner.products_added.fetch_add(1, Ordering::Relaxed);
        if let Some(observer) = &self.inner.observer {
            observer.product_added(category_name, product);
        }
    }
}

/// Debug skips the observer (trait objects have nothing useful to show).
impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("categories_created", &self.categories_created())
            .field("products_added", &self.products_added())
            .field("has_observer", &self.inner.observer.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
