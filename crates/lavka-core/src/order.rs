//! # Order Module
//!
//! An immutable purchase snapshot of a product.
//!
//! ## Why a Snapshot?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t₀  Order::new(&phone, 2)                                              │
//! │        ├── freezes name:        "iPhone 13"                             │
//! │        ├── freezes unit_price:  80000.00                                │
//! │        └── computes total ONCE: 80000.00 × 2 = 160000.00               │
//! │                                                                         │
//! │  t₁  phone.set_price(85000.00)   ← catalog price changes               │
//! │                                                                         │
//! │  t₂  order.total()  ──►  STILL 160000.00                                │
//! │                                                                         │
//! │  The order records what the buyer agreed to pay, not what the           │
//! │  catalog says later.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::product::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Order
// =============================================================================

/// A purchase of `quantity` units of a product at its price at order time.
///
/// All fields are frozen at construction; there are no setters.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: Uuid,
    product_name: String,
    unit_price: Money,
    quantity: i64,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order for `quantity` units of `product`.
    ///
    /// ## Rules
    /// - `quantity` must be strictly positive
    /// - name and unit price are copied out of the product, never referenced
    /// - `total = unit_price × quantity`, computed here and never again
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    /// use lavka_core::order::Order;
    /// use lavka_core::product::Product;
    ///
    /// let mut phone =
    ///     Product::new("iPhone 13", "Смартфон", Money::from_kopecks(8_000_000), 5).unwrap();
    /// let order = Order::new(&phone, 2).unwrap();
    /// assert_eq!(order.total(), Money::from_kopecks(16_000_000));
    ///
    /// // A later price change does not touch the order
    /// phone.set_price(Money::from_kopecks(8_500_000)).unwrap();
    /// assert_eq!(order.total(), Money::from_kopecks(16_000_000));
    /// ```
    pub fn new(product: &Product, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;

        let unit_price = product.price();
        Ok(Order {
            id: Uuid::new_v4(),
            product_name: product.name().to_string(),
            unit_price,
            quantity,
            total: unit_price.multiply_quantity(quantity),
            created_at: Utc::now(),
        })
    }

    /// Unique order identifier (UUID v4).
    #[inline]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the ordered product, as it read at order time.
    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Unit price frozen at order time.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Ordered quantity.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Total cost, computed once at construction.
    #[inline]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// When the order was created (UTC).
    #[inline]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// `"Заказ: {name}, Количество: {quantity}, Итоговая стоимость: {total} руб."`
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Заказ: {}, Количество: {}, Итоговая стоимость: {} руб.",
            self.product_name, self.quantity, self.total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
