//! # Product Cursor
//!
//! Sequential traversal over a category's products.
//!
//! ## Cursor State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products: [A, B, C]                                                    │
//! │                                                                         │
//! │  position: 0 ──next()──► 1 ──next()──► 2 ──next()──► 3 (exhausted)     │
//! │            │             │             │              │                 │
//! │            ▼             ▼             ▼              ▼                 │
//! │         Some(A)       Some(B)       Some(C)         None, forever      │
//! │                                                                         │
//! │  • exhaustion is None, not an error (the iterator protocol IS the      │
//! │    termination signal)                                                  │
//! │  • a cursor is single-pass: no rewind, no restart                      │
//! │  • Category::iter() hands out a FRESH cursor per call, so the          │
//! │    category itself is restartably iterable                             │
//! │  • the cursor borrows the collection; the borrow checker rules out     │
//! │    category mutation while any cursor is alive                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::iter::FusedIterator;

use crate::product::Product;

// =============================================================================
// Product Cursor
// =============================================================================

/// Single-pass, position-tracking cursor over a category's products.
///
/// Yields products in insertion order. Independent cursors over the same
/// category do not interfere; each tracks its own position.
#[derive(Debug, Clone)]
pub struct ProductCursor<'a> {
    products: &'a [Product],
    position: usize,
}

impl<'a> ProductCursor<'a> {
    /// Creates a cursor at the start of the collection.
    pub(crate) fn new(products: &'a [Product]) -> Self {
        ProductCursor {
            products,
            position: 0,
        }
    }

    /// The current position (number of products already yielded).
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for ProductCursor<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let product = self.products.get(self.position)?;
        self.position += 1;
        Some(product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.products.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductCursor<'_> {}

/// Exhaustion is sticky: once `next()` returns `None` it stays `None`.
impl FusedIterator for ProductCursor<'_> {}

// =============================================================================
// Unit Tests
// =============================================================================
