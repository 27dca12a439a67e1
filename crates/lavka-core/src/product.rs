//! # Product Module
//!
//! The validated item record at the heart of the catalog, its specialized
//! kinds, and the upsert-by-name merge factory.
//!
//! ## Product Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Product                                      │
//! │                                                                         │
//! │  name ──────────── merge key (exact equality in resolve)               │
//! │  description ───── free text                                           │
//! │  price ─────────── Money, invariant: > 0 ALWAYS                        │
//! │  quantity ──────── i64, invariant: > 0 at construction                 │
//! │  kind ──────────── tagged payload:                                     │
//! │                    ┌──────────┬────────────────┬──────────────────┐    │
//! │                    │   Base   │   Smartphone   │    LawnGrass     │    │
//! │                    │          │  performance   │  country         │    │
//! │                    │  (none)  │  model         │  germination     │    │
//! │                    │          │  memory_gb     │  color           │    │
//! │                    │          │  color         │                  │    │
//! │                    └──────────┴────────────────┴──────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Resolve Flow (upsert-by-name)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductInfo { name: "X", price: 85000.0, quantity: 3 }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate name / price / quantity  ── invalid ──► error, candidates    │
//! │       │                                           untouched             │
//! │       ▼                                                                 │
//! │  scan candidates for name == "X"                                       │
//! │       │                                                                 │
//! │       ├── found ────► quantity += 3, price = max(old, new)             │
//! │       │               (through the validated setter)                   │
//! │       │               returns Resolved::Updated(&mut existing)         │
//! │       │                                                                 │
//! │       └── not found ► returns Resolved::Created(new base Product)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::render::SummaryStyle;
use crate::validation::{
    parse_price, validate_price, validate_product_name, validate_quantity, ValidationResult,
};

// =============================================================================
// Product Kind
// =============================================================================

/// Kind-specific payload carried by a product.
///
/// ## Why a Tagged Variant?
/// All kinds share the base fields and validation; only the extra attributes
/// and their rendering differ. A single struct with a tagged payload keeps
/// every kind flowing through the same constructors, setter and merge rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// Plain catalog product with no extra attributes.
    Base,

    /// Smartphone with hardware attributes.
    Smartphone {
        performance: String,
        model: String,
        memory_gb: u32,
        color: String,
    },

    /// Lawn grass seed with agronomic attributes.
    LawnGrass {
        country: String,
        germination_days: u32,
        color: String,
    },
}

impl ProductKind {
    /// Human-readable kind name used in announcements.
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Base => "Продукт",
            ProductKind::Smartphone { .. } => "Смартфон",
            ProductKind::LawnGrass { .. } => "Газонная трава",
        }
    }

    /// Kind-specific attribute line, if the kind has one.
    pub fn details(&self) -> Option<String> {
        match self {
            ProductKind::Base => None,
            ProductKind::Smartphone {
                performance,
                model,
                memory_gb,
                color,
            } => Some(format!(
                "Производительность: {}, Модель: {}, Память: {} ГБ, Цвет: {}",
                performance, model, memory_gb, color
            )),
            ProductKind::LawnGrass {
                country,
                germination_days,
                color,
            } => Some(format!(
                "Страна: {}, Срок прорастания: {} дн., Цвет: {}",
                country, germination_days, color
            )),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A validated catalog item.
///
/// Fields are private: every write path goes through validation, which is
/// what keeps the `price > 0` invariant unconditional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    price: Money,
    quantity: i64,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    /// Constructs a base-kind product.
    ///
    /// ## Rules
    /// - `name` must not be empty
    /// - `price` must be strictly positive
    /// - `quantity` must be strictly positive
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    /// use lavka_core::product::Product;
    ///
    /// let product = Product::new(
    ///     "iPhone 13",
    ///     "Смартфон от Apple",
    ///     Money::from_kopecks(8_000_000),
    ///     5,
    /// )
    /// .unwrap();
    /// assert_eq!(product.quantity(), 5);
    ///
    /// let rejected = Product::new("x", "y", Money::from_kopecks(100), 0);
    /// assert!(rejected.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Base)
    }

    /// Constructs a smartphone product.
    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity: i64,
        performance: impl Into<String>,
        model: impl Into<String>,
        memory_gb: u32,
        color: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::with_kind(
            name,
            description,
            price,
            quantity,
            ProductKind::Smartphone {
                performance: performance.into(),
                model: model.into(),
                memory_gb,
                color: color.into(),
            },
        )
    }

    /// Constructs a lawn grass product.
    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity: i64,
        country: impl Into<String>,
        germination_days: u32,
        color: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::with_kind(
            name,
            description,
            price,
            quantity,
            ProductKind::LawnGrass {
                country: country.into(),
                germination_days,
                color: color.into(),
            },
        )
    }

    /// Constructs a product with an explicit kind payload.
    ///
    /// All named constructors funnel through here; this is the single
    /// validated construction path.
    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity: i64,
        kind: ProductKind,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Product {
            name,
            description: description.into(),
            price,
            quantity,
            kind,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The product name (also the merge key for `resolve`).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-text description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The current price. Always strictly positive.
    #[inline]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// The remaining quantity.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The kind payload.
    #[inline]
    pub const fn kind(&self) -> &ProductKind {
        &self.kind
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets a new price.
    ///
    /// ## Behavior
    /// A non-positive price is rejected and the stored price stays unchanged.
    /// The caller sees the rejection in the returned `Result`; nothing is
    /// clamped silently.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    /// use lavka_core::product::Product;
    ///
    /// let mut product =
    ///     Product::new("iPhone 13", "Смартфон", Money::from_kopecks(8_000_000), 5).unwrap();
    ///
    /// assert!(product.set_price(Money::zero()).is_err());
    /// assert_eq!(product.price(), Money::from_kopecks(8_000_000));
    ///
    /// product.set_price(Money::from_kopecks(8_500_000)).unwrap();
    /// assert_eq!(product.price(), Money::from_kopecks(8_500_000));
    /// ```
    pub fn set_price(&mut self, price: Money) -> ValidationResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    // =========================================================================
    // Derived Values & Rendering
    // =========================================================================

    /// Total stock value: `price × quantity`.
    #[inline]
    pub const fn total_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Combined stock value of two products:
    /// `price₁×quantity₁ + price₂×quantity₂`.
    ///
    /// Any two products combine, regardless of kind.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    /// use lavka_core::product::Product;
    ///
    /// let phone =
    ///     Product::new("iPhone 13", "Смартфон", Money::from_kopecks(8_000_000), 5).unwrap();
    /// let grass =
    ///     Product::new("Газонная трава", "Семена", Money::from_kopecks(150_000), 20).unwrap();
    ///
    /// // 80000×5 + 1500×20 = 430000 rubles
    /// assert_eq!(phone.combined_value(&grass), Money::from_kopecks(43_000_000));
    /// ```
    pub fn combined_value(&self, other: &Product) -> Money {
        self.total_value() + other.total_value()
    }

    /// One-line listing entry with default labels:
    /// `"{name}, {price} руб. Остаток: {quantity} шт."`.
    pub fn summary(&self) -> String {
        self.summary_with(&SummaryStyle::default())
    }

    /// One-line listing entry with custom labels.
    pub fn summary_with(&self, style: &SummaryStyle) -> String {
        format!(
            "{}, {} {} {}: {} {}",
            self.name,
            self.price,
            style.currency_suffix,
            style.stock_label,
            self.quantity,
            style.unit_suffix
        )
    }

    /// Kind-specific attribute line, if this product's kind has one.
    pub fn details(&self) -> Option<String> {
        self.kind.details()
    }

    // =========================================================================
    // Resolve (upsert-by-name)
    // =========================================================================

    /// Merges a product record into a candidate list, or creates a new
    /// product when no candidate matches by name.
    ///
    /// ## Rules
    /// - The incoming record is validated in full FIRST; an invalid record
    ///   returns an error with every candidate untouched
    /// - Match: exact name equality against `candidates`, first hit wins
    /// - On match: quantity is added, price becomes `max(stored, incoming)`
    ///   through the validated setter, and the mutated entry is returned by
    ///   mutable reference (the mutation is visible in the caller's list)
    /// - On no match: a fresh base-kind product is returned as
    ///   [`Resolved::Created`]; the caller decides where it lives
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    /// use lavka_core::product::{Product, ProductInfo, Resolved};
    ///
    /// let mut stock = vec![
    ///     Product::new("iPhone 13", "Смартфон", Money::from_kopecks(8_000_000), 5).unwrap(),
    /// ];
    /// let incoming = ProductInfo::new("iPhone 13", "Смартфон", 80000.0, 3);
    ///
    /// let resolved = Product::resolve(&incoming, &mut stock).unwrap();
    /// assert!(matches!(resolved, Resolved::Updated(_)));
    /// assert_eq!(stock[0].quantity(), 8);
    /// ```
    pub fn resolve<'a>(
        info: &ProductInfo,
        candidates: &'a mut [Product],
    ) -> CoreResult<Resolved<'a>> {
        validate_product_name(&info.name)?;
        let price = parse_price(info.price)?;
        validate_quantity(info.quantity)?;

        if let Some(existing) = candidates
            .iter_mut()
            .find(|candidate| candidate.name == info.name)
        {
            existing.quantity += info.quantity;
            let merged = existing.price.max(price);
            existing.set_price(merged)?;
            return Ok(Resolved::Updated(existing));
        }

        Product::with_kind(
            info.name.clone(),
            info.description.clone(),
            price,
            info.quantity,
            ProductKind::Base,
        )
        .map(Resolved::Created)
    }
}

/// Base rendering shared by every kind:
/// `"Продукт: {name}, Описание: {description}, Цена: {price},
/// Количество: {quantity}"`. Kind attributes render separately via
/// [`Product::details`].
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Продукт: {}, Описание: {}, Цена: {}, Количество: {}",
            self.name, self.description, self.price, self.quantity
        )
    }
}

// =============================================================================
// Product Info (untyped boundary record)
// =============================================================================

/// Raw product record as it appears in catalog documents.
///
/// Carries unvalidated input; it becomes a [`Product`] only through
/// [`Product::resolve`] or the `TryFrom` conversion, both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
    /// Price in fractional rubles, exactly as JSON carries it.
    pub price: f64,
    pub quantity: i64,
}

impl ProductInfo {
    /// Convenience constructor for records built in code.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        ProductInfo {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Extracts a record from an untyped JSON value.
    ///
    /// ## Behavior
    /// - A non-object value is a `TypeMismatch` naming the JSON type found
    /// - An object missing any of `name`, `description`, `price`, `quantity`
    ///   is a `Required` validation error
    /// - A present key of the wrong type is an `InvalidFormat` error
    /// - Unknown keys are ignored
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| CoreError::type_mismatch("product record", value))?;

        for key in ["name", "description", "price", "quantity"] {
            if !record.contains_key(key) {
                return Err(ValidationError::Required {
                    field: key.to_string(),
                }
                .into());
            }
        }

        serde_json::from_value(value.clone()).map_err(|err| {
            CoreError::Validation(ValidationError::InvalidFormat {
                field: "product record".to_string(),
                reason: err.to_string(),
            })
        })
    }
}

/// Validated conversion from a raw record to a base-kind product.
impl TryFrom<&ProductInfo> for Product {
    type Error = CoreError;

    fn try_from(info: &ProductInfo) -> Result<Self, Self::Error> {
        let price = parse_price(info.price)?;
        Product::with_kind(
            info.name.clone(),
            info.description.clone(),
            price,
            info.quantity,
            ProductKind::Base,
        )
    }
}

// =============================================================================
// Resolved
// =============================================================================

/// Outcome of [`Product::resolve`].
#[derive(Debug)]
pub enum Resolved<'a> {
    /// An existing candidate was merged in place.
    Updated(&'a mut Product),

    /// No candidate matched; a fresh product was created.
    Created(Product),
}

impl Resolved<'_> {
    /// The resolved product, whichever way it was obtained.
    pub fn product(&self) -> &Product {
        match self {
            Resolved::Updated(product) => product,
            Resolved::Created(product) => product,
        }
    }

    /// Returns true if an existing candidate was updated.
    pub fn is_updated(&self) -> bool {
        matches!(self, Resolved::Updated(_))
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

    #[test]
    fn test_construction_reads_back_fields() {
        let product = phone();
        assert_eq!(product.name(), "iPhone 13");
        assert_eq!(product.description(), "Смартфон от Apple");
        assert_eq!(product.price(), Money::from_kopecks(8_000_000));
        assert_eq!(product.quantity(), 5);
        assert_eq!(product.kind(), &ProductKind::Base);
    }

    #[test]
    fn test_construction_rejects_non_positive_quantity() {
        let zero = Product::new("Товар", "desc", Money::from_kopecks(100), 0);
        assert!(matches!(
            zero,
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));

        let negative = Product::new("Товар", "desc", Money::from_kopecks(100), -5);
        assert!(negative.is_err());
    }

    #[test]
    fn test_construction_rejects_bad_price_and_name() {
        assert!(Product::new("Товар", "desc", Money::zero(), 1).is_err());
        assert!(Product::new("Товар", "desc", Money::from_kopecks(-1), 1).is_err());
        assert!(Product::new("", "desc", Money::from_kopecks(100), 1).is_err());
    }

    #[test]
    fn test_set_price_rejects_and_retains() {
        let mut product = phone();

        let err = product.set_price(Money::zero());
        assert!(matches!(
            err,
            Err(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(product.price(), Money::from_kopecks(8_000_000));

        assert!(product.set_price(Money::from_kopecks(-100)).is_err());
        assert_eq!(product.price(), Money::from_kopecks(8_000_000));
    }

    #[test]
    fn test_set_price_accepts_positive() {
        let mut product = phone();
        product
            .set_price(Money::from_kopecks(8_500_000))
            .expect("positive price");
        assert_eq!(product.price(), Money::from_kopecks(8_500_000));
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            phone().summary(),
            "iPhone 13, 80000.00 руб. Остаток: 5 шт."
        );
    }

    #[test]
    fn test_summary_with_custom_style() {
        let style = SummaryStyle {
            currency_suffix: "RUB.".to_string(),
            stock_label: "In stock".to_string(),
            unit_suffix: "pcs.".to_string(),
            ..SummaryStyle::default()
        };
        assert_eq!(
            phone().summary_with(&style),
            "iPhone 13, 80000.00 RUB. In stock: 5 pcs."
        );
    }

    #[test]
    fn test_display_base_line_for_every_kind() {
        assert_eq!(
            phone().to_string(),
            "Продукт: iPhone 13, Описание: Смартфон от Apple, Цена: 80000.00, Количество: 5"
        );

        let smartphone = Product::smartphone(
            "iPhone 13",
            "Смартфон от Apple",
            Money::from_kopecks(8_000_000),
            5,
            "A15 Bionic",
            "iPhone 13",
            128,
            "Черный",
        )
        .expect("valid smartphone");
        assert_eq!(
            smartphone.to_string(),
            "Продукт: iPhone 13, Описание: Смартфон от Apple, Цена: 80000.00, Количество: 5"
        );
    }

    #[test]
    fn test_kind_details_and_labels() {
        assert_eq!(phone().details(), None);
        assert_eq!(phone().kind().label(), "Продукт");

        let smartphone = Product::smartphone(
            "iPhone 13",
            "Смартфон от Apple",
            Money::from_kopecks(8_000_000),
            5,
            "A15 Bionic",
            "iPhone 13",
            128,
            "Черный",
        )
        .expect("valid smartphone");
        assert_eq!(smartphone.kind().label(), "Смартфон");
        assert_eq!(
            smartphone.details().as_deref(),
            Some("Производительность: A15 Bionic, Модель: iPhone 13, Память: 128 ГБ, Цвет: Черный")
        );

        let grass = Product::lawn_grass(
            "Газонная трава",
            "Смешанная трава для газонов",
            Money::from_kopecks(150_000),
            20,
            "Россия",
            14,
            "Зеленый",
        )
        .expect("valid lawn grass");
        assert_eq!(grass.kind().label(), "Газонная трава");
        assert_eq!(
            grass.details().as_deref(),
            Some("Страна: Россия, Срок прорастания: 14 дн., Цвет: Зеленый")
        );
    }

    #[test]
    fn test_combined_value_across_kinds() {
        let smartphone = Product::smartphone(
            "iPhone 13",
            "Смартфон от Apple",
            Money::from_kopecks(8_000_000),
            5,
            "A15 Bionic",
            "iPhone 13",
            128,
            "Черный",
        )
        .expect("valid smartphone");
        let grass = Product::lawn_grass(
            "Газонная трава",
            "Смешанная трава для газонов",
            Money::from_kopecks(150_000),
            20,
            "Россия",
            14,
            "Зеленый",
        )
        .expect("valid lawn grass");

        // 80000×5 + 1500×20 = 430000 rubles
        assert_eq!(
            smartphone.combined_value(&grass),
            Money::from_kopecks(43_000_000)
        );
        assert_eq!(
            grass.combined_value(&smartphone),
            Money::from_kopecks(43_000_000)
        );
    }

    #[test]
    fn test_resolve_merges_existing_in_place() {
        let mut candidates = vec![phone()];
        let info = ProductInfo::new("iPhone 13", "Смартфон от Apple", 80000.0, 3);

        let resolved = Product::resolve(&info, &mut candidates).expect("valid info");
        assert!(resolved.is_updated());
        assert_eq!(resolved.product().quantity(), 8);
        assert_eq!(resolved.product().price(), Money::from_kopecks(8_000_000));

        // The mutation is visible through the caller's list, not a copy
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].quantity(), 8);
        assert_eq!(candidates[0].price(), Money::from_kopecks(8_000_000));
    }

    #[test]
    fn test_resolve_takes_higher_incoming_price() {
        let mut candidates = vec![phone()];
        let info = ProductInfo::new("iPhone 13", "Смартфон от Apple", 85000.0, 1);

        Product::resolve(&info, &mut candidates).expect("valid info");
        assert_eq!(candidates[0].price(), Money::from_kopecks(8_500_000));
        assert_eq!(candidates[0].quantity(), 6);
    }

    #[test]
    fn test_resolve_keeps_stored_price_on_lower_incoming() {
        let mut candidates = vec![phone()];
        let info = ProductInfo::new("iPhone 13", "Смартфон от Apple", 75000.0, 1);

        Product::resolve(&info, &mut candidates).expect("valid info");
        assert_eq!(candidates[0].price(), Money::from_kopecks(8_000_000));
    }

    #[test]
    fn test_resolve_creates_when_no_name_matches() {
        let mut candidates = vec![phone()];
        let info = ProductInfo::new("Samsung Galaxy S23", "Флагман Samsung", 110000.0, 2);

        let resolved = Product::resolve(&info, &mut candidates).expect("valid info");
        assert!(!resolved.is_updated());
        match resolved {
            Resolved::Created(product) => {
                assert_eq!(product.name(), "Samsung Galaxy S23");
                assert_eq!(product.price(), Money::from_kopecks(11_000_000));
                assert_eq!(product.quantity(), 2);
                assert_eq!(product.kind(), &ProductKind::Base);
            }
            Resolved::Updated(_) => panic!("expected Created"),
        }

        // Existing candidates untouched
        assert_eq!(candidates[0].quantity(), 5);
    }

    #[test]
    fn test_resolve_rejects_invalid_info_without_mutation() {
        let mut candidates = vec![phone()];

        let bad_quantity = ProductInfo::new("iPhone 13", "Смартфон", 80000.0, -3);
        assert!(Product::resolve(&bad_quantity, &mut candidates).is_err());
        assert_eq!(candidates[0].quantity(), 5);

        let bad_price = ProductInfo::new("iPhone 13", "Смартфон", -80000.0, 3);
        assert!(Product::resolve(&bad_price, &mut candidates).is_err());
        assert_eq!(candidates[0].quantity(), 5);
        assert_eq!(candidates[0].price(), Money::from_kopecks(8_000_000));
    }

    #[test]
    fn test_from_value_rejects_non_record() {
        let err = ProductInfo::from_value(&json!("непродукт")).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("found string"));

        assert!(ProductInfo::from_value(&json!(42)).is_err());
        assert!(ProductInfo::from_value(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_from_value_requires_all_keys() {
        let missing_price = json!({
            "name": "iPhone 13",
            "description": "Смартфон",
            "quantity": 5
        });
        let err = ProductInfo::from_value(&missing_price).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: price is required");
    }

    #[test]
    fn test_from_value_reads_record_and_ignores_extras() {
        let value = json!({
            "name": "iPhone 13",
            "description": "Смартфон от Apple",
            "price": 80000.0,
            "quantity": 5,
            "warehouse": "MSK-1"
        });
        let info = ProductInfo::from_value(&value).expect("valid record");
        assert_eq!(info.name, "iPhone 13");
        assert_eq!(info.price, 80000.0);
        assert_eq!(info.quantity, 5);
    }

    #[test]
    fn test_from_value_rejects_wrongly_typed_field() {
        let value = json!({
            "name": "iPhone 13",
            "description": "Смартфон",
            "price": "дорого",
            "quantity": 5
        });
        let err = ProductInfo::from_value(&value).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_try_from_info() {
        let info = ProductInfo::new("iPhone 13", "Смартфон от Apple", 80000.0, 5);
        let product = Product::try_from(&info).expect("valid info");
        assert_eq!(product.name(), "iPhone 13");
        assert_eq!(product.price(), Money::from_kopecks(8_000_000));

        let invalid = ProductInfo::new("iPhone 13", "Смартфон", 80000.0, 0);
        assert!(Product::try_from(&invalid).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            // Property: a constructed product always satisfies the invariants.
            #[test]
            fn prop_constructed_product_is_valid(
                name in "[A-Za-z][A-Za-z0-9 ]{0,19}",
                price_kopecks in 1i64..=100_000_000,
                quantity in 1i64..=10_000,
            ) {
                let product = Product::new(
                    name.clone(),
                    "generated",
                    Money::from_kopecks(price_kopecks),
                    quantity,
                )
                .unwrap();

                prop_assert!(product.price().is_positive());
                prop_assert!(product.quantity() > 0);
                prop_assert_eq!(product.name(), name.as_str());
            }

            // Property: set_price can never leave a non-positive price behind.
            #[test]
            fn prop_set_price_preserves_invariant(attempt in any::<i64>()) {
                let mut product = Product::new(
                    "Товар",
                    "generated",
                    Money::from_kopecks(1000),
                    1,
                )
                .unwrap();

                let outcome = product.set_price(Money::from_kopecks(attempt));
                prop_assert!(product.price().is_positive());
                if attempt > 0 {
                    prop_assert!(outcome.is_ok());
                    prop_assert_eq!(product.price(), Money::from_kopecks(attempt));
                } else {
                    prop_assert!(outcome.is_err());
                    prop_assert_eq!(product.price(), Money::from_kopecks(1000));
                }
            }

            // Property: merging adds quantities and never lowers the price.
            #[test]
            fn prop_resolve_merge_is_additive_and_max_wins(
                stored_kopecks in 1i64..=1_000_000,
                stored_quantity in 1i64..=1_000,
                incoming_kopecks in 1i64..=1_000_000,
                incoming_quantity in 1i64..=1_000,
            ) {
                let mut candidates = vec![Product::new(
                    "Товар",
                    "stored",
                    Money::from_kopecks(stored_kopecks),
                    stored_quantity,
                )
                .unwrap()];

                let info = ProductInfo::new(
                    "Товар",
                    "incoming",
                    incoming_kopecks as f64 / 100.0,
                    incoming_quantity,
                );

                let resolved = Product::resolve(&info, &mut candidates).unwrap();
                prop_assert!(resolved.is_updated());
                prop_assert_eq!(
                    candidates[0].quantity(),
                    stored_quantity + incoming_quantity
                );
                prop_assert_eq!(
                    candidates[0].price(),
                    Money::from_kopecks(stored_kopecks.max(incoming_kopecks))
                );
            }
        }
    }
}
