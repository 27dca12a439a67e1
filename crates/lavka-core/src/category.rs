//! # Category Module
//!
//! The ordered product aggregate and its derived statistics.
//!
//! ## Category Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Category                                      │
//! │                                                                         │
//! │  name / description ── identity, free text                             │
//! │  products ──────────── Vec<Product>, EXCLUSIVELY owned                 │
//! │  │                     insertion order preserved                       │
//! │  │                                                                     │
//! │  │   writes: add() / add_value() ONLY                                 │
//! │  │   reads:  products() slice, iter() cursor, statistics              │
//! │  │                                                                     │
//! │  registry ──────────── shared counter/observer handle                  │
//! │                                                                         │
//! │  DERIVED (never stored):                                               │
//! │    len()            number of entries        2                        │
//! │    total_quantity() sum of quantities        15 + 10 = 25             │
//! │    average_price()  mean of prices           (100+200+150)/3 = 150    │
//! │                                                                         │
//! │  ⚠ "25 шт." in the summary means 25 UNITS across 2 entries,           │
//! │    never the entry count. Easy to miscode, covered by tests.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Categories always construct empty; products enter through explicit `add`
//! calls (or the validated `add_value` twin for untyped document entries).

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::cursor::ProductCursor;
use crate::error::CoreResult;
use crate::money::Money;
use crate::product::{Product, ProductInfo};
use crate::registry::Registry;
use crate::render::SummaryStyle;

// =============================================================================
// Category
// =============================================================================

/// An ordered, exclusively-owned aggregate of products.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
    #[serde(skip)]
    registry: Registry,
}

impl Category {
    /// Creates an empty category and records it in the registry.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::category::Category;
    /// use lavka_core::registry::Registry;
    ///
    /// let registry = Registry::new();
    /// let category = Category::new("Смартфоны", "Гаджеты для жизни", &registry);
    ///
    /// assert_eq!(category.len(), 0);
    /// assert_eq!(registry.categories_created(), 1);
    /// ```
    pub fn new(name: impl Into<String>, description: impl Into<String>, registry: &Registry) -> Self {
        let category = Category {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
            registry: registry.clone(),
        };
        registry.record_category_created(&category);
        category
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The category name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-text description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read-only view of the owned collection, in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of product entries owned by THIS category.
    ///
    /// Distinct from both `registry.products_added()` (lifetime total across
    /// all categories) and `total_quantity()` (sum of units).
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the category owns no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends a product to the end of the collection.
    ///
    /// Any kind is accepted; the type system guarantees the argument is a
    /// product, so this cannot fail. The registry's product counter ticks
    /// and the observer is notified.
    pub fn add(&mut self, product: Product) {
        self.registry.record_product_added(&self.name, &product);
        self.products.push(product);
    }

    /// Dynamic twin of [`add`](Category::add) for untyped document entries.
    ///
    /// ## Behavior
    /// - A non-record value fails with `TypeMismatch`
    /// - A record failing product validation fails with the validation error
    /// - On ANY failure the collection is untouched: `len()` is unchanged
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::category::Category;
    /// use lavka_core::registry::Registry;
    /// use serde_json::json;
    ///
    /// let registry = Registry::new();
    /// let mut category = Category::new("Смартфоны", "Гаджеты", &registry);
    ///
    /// category
    ///     .add_value(&json!({
    ///         "name": "iPhone 13",
    ///         "description": "Смартфон от Apple",
    ///         "price": 80000.0,
    ///         "quantity": 5
    ///     }))
    ///     .unwrap();
    /// assert_eq!(category.len(), 1);
    ///
    /// assert!(category.add_value(&json!("непродукт")).is_err());
    /// assert_eq!(category.len(), 1);
    /// ```
    pub fn add_value(&mut self, value: &Value) -> CoreResult<()> {
        let info = ProductInfo::from_value(value)?;
        let product = Product::try_from(&info)?;
        self.add(product);
        Ok(())
    }

    // =========================================================================
    // Derived Statistics
    // =========================================================================

    /// Sum of `quantity` across all owned products (units, not entries).
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(Product::quantity).sum()
    }

    /// Arithmetic mean of all owned products' prices.
    ///
    /// ## Empty Categories
    /// Exactly `Money::zero()` — "no data" is not an error here, and the
    /// division-by-zero condition never reaches the caller. Quantities do
    /// not weight the mean.
    pub fn average_price(&self) -> Money {
        let count = self.products.len() as i64;
        if count == 0 {
            return Money::zero();
        }

        let total: i64 = self.products.iter().map(|p| p.price().kopecks()).sum();
        // Round to the nearest kopeck (half away from zero; prices are positive)
        Money::from_kopecks((total + count / 2) / count)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Newline-joined product summaries with default labels.
    pub fn listing(&self) -> String {
        self.listing_with(&SummaryStyle::default())
    }

    /// Newline-joined product summaries with custom labels.
    ///
    /// Every owned product renders via `summary_with`, in insertion order.
    /// An empty category renders the sentinel line instead; never an error.
    pub fn listing_with(&self, style: &SummaryStyle) -> String {
        if self.products.is_empty() {
            return style.empty_category_text.clone();
        }

        self.products
            .iter()
            .map(|product| product.summary_with(style))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// A fresh sequential cursor over the owned collection.
    ///
    /// Each call returns an independent cursor with its own position, so the
    /// category can be walked any number of times even though every
    /// individual cursor is single-pass.
    pub fn iter(&self) -> ProductCursor<'_> {
        ProductCursor::new(&self.products)
    }
}

/// Category summary: `"{name}, количество продуктов: {total_quantity} шт."`.
///
/// The number is the SUM of quantities, not the entry count.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}

/// `for product in &category` requests a fresh cursor, matching `iter()`.
impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = ProductCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phone() -> Product {
        Product::new(
            "iPhone 13",
            "Смартфон от Apple",
            Money::from_kopecks(8_000_000),
            5,
        )
        .expect("valid product")
    }

    fn tv() -> Product {
        Product::new(
            "Телевизор QLED",
            "4K экран",
            Money::from_kopecks(12_300_000),
            7,
        )
        .expect("valid product")
    }

    #[test]
    fn test_new_category_starts_empty() {
        let registry = Registry::new();
        let category = Category::new("Смартфоны", "Гаджеты", &registry);

        assert_eq!(category.name(), "Смартфоны");
        assert_eq!(category.description(), "Гаджеты");
        assert!(category.is_empty());
        assert_eq!(category.len(), 0);
        assert_eq!(registry.categories_created(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let registry = Registry::new();
        let mut category = Category::new("Техника", "Электроника", &registry);
        category.add(phone());
        category.add(tv());

        assert_eq!(category.len(), 2);
        assert_eq!(category.products()[0].name(), "iPhone 13");
        assert_eq!(category.products()[1].name(), "Телевизор QLED");
        assert_eq!(registry.products_added(), 2);
    }

    #[test]
    fn test_len_counts_entries_not_registry_total() {
        let registry = Registry::new();
        let mut first = Category::new("Смартфоны", "Гаджеты", &registry);
        let mut second = Category::new("Телевизоры", "Техника", &registry);
        first.add(phone());
        second.add(tv());

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(registry.products_added(), 2);
    }

    #[test]
    fn test_add_value_accepts_record() {
        let registry = Registry::new();
        let mut category = Category::new("Смартфоны", "Гаджеты", &registry);

        category
            .add_value(&json!({
                "name": "iPhone 13",
                "description": "Смартфон от Apple",
                "price": 80000.0,
                "quantity": 5
            }))
            .expect("valid record");

        assert_eq!(category.len(), 1);
        assert_eq!(category.products()[0].price(), Money::from_kopecks(8_000_000));
    }

    #[test]
    fn test_add_value_rejects_non_record_without_mutation() {
        let registry = Registry::new();
        let mut category = Category::new("Смартфоны", "Гаджеты", &registry);
        category.add(phone());

        let err = category.add_value(&json!("просто строка")).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(category.len(), 1);
        assert_eq!(registry.products_added(), 1);

        // An invalid record is rejected the same way
        let err = category
            .add_value(&json!({
                "name": "Телевизор",
                "description": "4K",
                "price": 123000.0,
                "quantity": 0
            }))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(category.len(), 1);
    }

    #[test]
    fn test_average_price_empty_is_zero() {
        let registry = Registry::new();
        let category = Category::new("Пустая", "Ничего нет", &registry);
        assert_eq!(category.average_price(), Money::zero());
    }

    #[test]
    fn test_average_price_ignores_quantities() {
        let registry = Registry::new();
        let mut category = Category::new("Разное", "Смешанные товары", &registry);
        category.add(Product::new("А", "первый", Money::from_kopecks(10_000), 100).unwrap());
        category.add(Product::new("Б", "второй", Money::from_kopecks(20_000), 1).unwrap());
        category.add(Product::new("В", "третий", Money::from_kopecks(15_000), 7).unwrap());

        // (100 + 200 + 150) / 3 = 150 rubles, quantities irrelevant
        assert_eq!(category.average_price(), Money::from_kopecks(15_000));
    }

    #[test]
    fn test_average_price_rounds_to_nearest_kopeck() {
        let registry = Registry::new();
        let mut category = Category::new("Копейки", "Неделимые суммы", &registry);
        category.add(Product::new("А", "a", Money::from_kopecks(100), 1).unwrap());
        category.add(Product::new("Б", "b", Money::from_kopecks(101), 1).unwrap());
        category.add(Product::new("В", "c", Money::from_kopecks(101), 1).unwrap());

        // 302 / 3 = 100.67 -> 101 kopecks
        assert_eq!(category.average_price(), Money::from_kopecks(101));
    }

    #[test]
    fn test_total_quantity_sums_units() {
        let registry = Registry::new();
        let mut category = Category::new("Техника", "Электроника", &registry);
        category.add(Product::new("А", "первый", Money::from_kopecks(100), 15).unwrap());
        category.add(Product::new("Б", "второй", Money::from_kopecks(200), 10).unwrap());

        assert_eq!(category.len(), 2);
        assert_eq!(category.total_quantity(), 25);
    }

    #[test]
    fn test_display_reports_units_not_entries() {
        let registry = Registry::new();
        let mut category = Category::new("Техника", "Электроника", &registry);
        category.add(Product::new("А", "первый", Money::from_kopecks(100), 15).unwrap());
        category.add(Product::new("Б", "второй", Money::from_kopecks(200), 10).unwrap());

        assert_eq!(category.to_string(), "Техника, количество продуктов: 25 шт.");
    }

    #[test]
    fn test_listing_joins_summaries_in_order() {
        let registry = Registry::new();
        let mut category = Category::new("Техника", "Электроника", &registry);
        category.add(phone());
        category.add(tv());

        assert_eq!(
            category.listing(),
            "iPhone 13, 80000.00 руб. Остаток: 5 шт.\n\
             Телевизор QLED, 123000.00 руб. Остаток: 7 шт."
        );
    }

    #[test]
    fn test_listing_empty_sentinel() {
        let registry = Registry::new();
        let category = Category::new("Пустая", "Ничего нет", &registry);
        assert_eq!(category.listing(), "Нет продуктов в категории.");

        let style = SummaryStyle {
            empty_category_text: "Категория пуста.".to_string(),
            ..SummaryStyle::default()
        };
        assert_eq!(category.listing_with(&style), "Категория пуста.");
    }
}
