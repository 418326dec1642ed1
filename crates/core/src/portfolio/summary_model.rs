//! View models for the portfolio summary display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::AssetType;

/// One asset row, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummaryView {
    pub id: String,
    /// Display name, falling back to ticker and then id
    pub label: String,
    pub asset_type: AssetType,
    pub market_value: f64,
    /// Market value formatted as "$1234.56"
    pub market_value_display: String,
    pub allocation_pct: f64,
    /// Allocation formatted as "12.34%"
    pub allocation_pct_display: String,
}

/// Summary of a single portfolio with display-formatted totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummaryView {
    pub id: String,
    /// Portfolio name, falling back to id
    pub label: String,
    /// Epoch milliseconds of the underlying snapshot
    pub as_of: i64,
    pub total_market_value: f64,
    /// Total formatted as "$1234.56"
    pub total_market_value_display: String,
    pub assets: Vec<AssetSummaryView>,
    pub allocation_by_type: HashMap<AssetType, f64>,
}
