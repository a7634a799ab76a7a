//! The product record returned by the search collaborator.
//!
//! The shape is a contract with the external API: fields pass through
//! verbatim and are only presence-checked before rendering. Unknown fields
//! in the response are ignored.

use serde::{Deserialize, Serialize};

/// One product record from the collaborator's `/search` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub size_range: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Ranking signal the backend attaches to each hit. Meaning is defined
    /// entirely by the collaborator.
    #[serde(default, rename = "_score", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ResultItem {
    /// Star string for this item's rating, e.g. `★★★☆☆` for 3.7.
    #[must_use]
    pub fn stars(&self) -> String {
        stars(self.rating)
    }
}

/// Render a 0–5 rating as filled and empty stars: `floor(r)` filled, the
/// rest empty. Out-of-range ratings are clamped.
#[must_use]
pub fn stars(rating: f64) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    let mut out = String::new();
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

/// Format a price as a currency amount.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format a discount percentage, or `None` when there is no discount.
#[must_use]
pub fn format_discount(discount: f64) -> Option<String> {
    if discount <= 0.0 {
        return None;
    }
    if discount.fract() == 0.0 {
        Some(format!("{discount:.0}% off"))
    } else {
        Some(format!("{discount}% off"))
    }
}

/// Format the backend's relevance score to two decimal places.
#[must_use]
pub fn format_relevance(score: f64) -> String {
    format!("{score:.2}")
}
