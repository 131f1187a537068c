//! Core data models: raw order rows and derived indexable documents.

use serde::{Deserialize, Serialize};

use crate::ranges::{AmountRange, ProfitRange, QuantityRange};

/// One raw row of the order dataset, as read from the input CSV.
///
/// Column names follow the source file headers; columns not listed here are
/// ignored by the reader.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Order ID")]
    pub order_id: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
}

/// Derived document pushed to the search index, one per [`OrderRecord`].
///
/// `id` is row-index derived and therefore stable across full rebuilds from
/// the same input file. `content` is the consumer-facing rendering and never
/// carries profit figures; `business_content` is the business-facing
/// rendering and always does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
    pub id: String,
    pub order_id: String,
    pub amount: f64,
    pub profit: f64,
    pub quantity: u32,
    pub category: String,
    pub sub_category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub business_content: String,
    pub amount_range: AmountRange,
    pub profit_range: ProfitRange,
    pub quantity_range: QuantityRange,
}
