//! Portfolio domain models.
//!
//! `ClientPortfolio` and `Asset` are immutable snapshots supplied by the
//! caller. The computed fields (`allocation_pct`, `total_market_value`,
//! `allocation_by_type`) start out absent and are filled in by the metrics
//! calculator, which returns new copies rather than mutating these inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::num_utils::{lenient_num, lenient_num_option};

/// Category of a holding within a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Bond,
    Cash,
    Etf,
    /// Catch-all category; also the default when a holding carries no type.
    #[default]
    Other,
}

/// One holding within a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique within the owning portfolio
    pub id: String,
    #[serde(rename = "type", default)]
    pub asset_type: AssetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, with = "lenient_num")]
    pub quantity: f64,
    #[serde(default, with = "lenient_num")]
    pub unit_price: f64,
    /// Semantically quantity * unit_price, but supplied by the source and
    /// never re-derived here
    #[serde(default, with = "lenient_num")]
    pub market_value: f64,
    /// Percent of portfolio (0-100), computed output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

/// One point on a portfolio's historical value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    /// Epoch milliseconds
    pub timestamp: i64,
    /// Total portfolio market value at this timestamp
    #[serde(default, with = "lenient_num")]
    pub portfolio_value: f64,
    /// Return for the period ending at `timestamp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_return_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_return_pct: Option<f64>,
}

/// Snapshot of one client's holdings plus cash at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPortfolio {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Epoch milliseconds of the snapshot
    pub as_of: i64,
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Sum of asset market values plus cash balance, computed output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_market_value: Option<f64>,
    #[serde(default, with = "lenient_num_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_balance: Option<f64>,
    /// Aggregate allocation percentage per asset category, computed output.
    /// Categories with no assets are absent rather than present with zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_by_type: Option<HashMap<AssetType, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Vec<PerformancePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
