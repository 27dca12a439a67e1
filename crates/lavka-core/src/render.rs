//! # Rendering Styles
//!
//! Label set for product and category listings.
//!
//! ## Where the Labels Land
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product summary:                                                       │
//! │                                                                         │
//! │    iPhone 13, 80000.00 руб. Остаток: 5 шт.                              │
//! │    └──name──┘  └price┘ └─┬─┘ └──┬───┘   └┬─┘                            │
//! │                currency_suffix  │    unit_suffix                        │
//! │                            stock_label                                  │
//! │                                                                         │
//! │  Empty category listing:                                                │
//! │                                                                         │
//! │    Нет продуктов в категории.   ← empty_category_text                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The defaults reproduce the Russian retail wording; a deployment can
//! override any label through the `[display]` config section.

use serde::{Deserialize, Serialize};

// =============================================================================
// Summary Style
// =============================================================================

/// Labels used when rendering product summaries and category listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStyle {
    /// Suffix after the price (default: "руб.").
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Label before the remaining quantity (default: "Остаток").
    #[serde(default = "default_stock_label")]
    pub stock_label: String,

    /// Suffix after quantities (default: "шт.").
    #[serde(default = "default_unit_suffix")]
    pub unit_suffix: String,

    /// Sentinel line for a category without products
    /// (default: "Нет продуктов в категории.").
    #[serde(default = "default_empty_category_text")]
    pub empty_category_text: String,
}

fn default_currency_suffix() -> String {
    "руб.".to_string()
}

fn default_stock_label() -> String {
    "Остаток".to_string()
}

fn default_unit_suffix() -> String {
    "шт.".to_string()
}

fn default_empty_category_text() -> String {
    "Нет продуктов в категории.".to_string()
}

impl Default for SummaryStyle {
    fn default() -> Self {
        SummaryStyle {
            currency_suffix: default_currency_suffix(),
            stock_label: default_stock_label(),
            unit_suffix: default_unit_suffix(),
            empty_category_text: default_empty_category_text(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let style = SummaryStyle::default();
        assert_eq!(style.currency_suffix, "руб.");
        assert_eq!(style.stock_label, "Остаток");
        assert_eq!(style.unit_suffix, "шт.");
        assert_eq!(style.empty_category_text, "Нет продуктов в категории.");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let style: SummaryStyle = serde_json::from_str(r#"{"currency_suffix": "RUB"}"#)
            .expect("partial style should deserialize");
        assert_eq!(style.currency_suffix, "RUB");
        assert_eq!(style.stock_label, "Остаток");
        assert_eq!(style.unit_suffix, "шт.");
    }
}
