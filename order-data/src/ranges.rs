//! Coarse range buckets derived from continuous numeric fields.
//!
//! The buckets partition each axis with fixed thresholds and are indexed as
//! filterable attributes. Serialized labels are the lowercase snake_case
//! variant names.

use serde::{Deserialize, Serialize};

/// Amount bucket: `< 100 → Low`, `< 500 → Medium`, else `High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountRange {
    Low,
    Medium,
    High,
}

impl AmountRange {
    pub fn from_amount(amount: f64) -> Self {
        if amount < 100.0 {
            Self::Low
        } else if amount < 500.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Label used in rendered text and in the indexed payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Profit bucket: `< 0 → Loss`, `< 50 → LowProfit`, else `HighProfit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitRange {
    Loss,
    LowProfit,
    HighProfit,
}

impl ProfitRange {
    pub fn from_profit(profit: f64) -> Self {
        if profit < 0.0 {
            Self::Loss
        } else if profit < 50.0 {
            Self::LowProfit
        } else {
            Self::HighProfit
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loss => "loss",
            Self::LowProfit => "low_profit",
            Self::HighProfit => "high_profit",
        }
    }
}

/// Quantity bucket: `<= 2 → Small`, `<= 5 → Medium`, else `Large`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityRange {
    Small,
    Medium,
    Large,
}

impl QuantityRange {
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity <= 2 {
            Self::Small
        } else if quantity <= 5 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}
