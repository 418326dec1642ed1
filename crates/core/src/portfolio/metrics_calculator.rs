//! Calculates display metrics for portfolio snapshots.
//!
//! The calculator is total: it never fails and never mutates its input.
//! Malformed numeric values contribute zero to totals (see
//! [`safe_number`]) so one bad holding cannot abort the whole computation.

use std::collections::HashMap;

use log::debug;

use crate::constants::PERCENT_SCALE;
use crate::portfolio::{Asset, AssetType, ClientPortfolio};
use crate::utils::safe_number;

/// Computes `total_market_value`, per-asset `allocation_pct`, and
/// `allocation_by_type` for a sequence of portfolio snapshots.
///
/// Returns a new sequence of the same length and order. Each output
/// portfolio is a copy of its input with the three computed fields
/// replaced; every other field is carried over unchanged.
///
/// Guarantees:
/// - `total_market_value` = sum of normalized asset market values plus the
///   normalized cash balance
/// - `allocation_pct` = normalized market value / total * 100 when the
///   total is positive, else exactly 0 (never NaN or infinite)
pub fn compute_portfolio_metrics(portfolios: &[ClientPortfolio]) -> Vec<ClientPortfolio> {
    portfolios.iter().map(compute_metrics_for_portfolio).collect()
}

/// Single-portfolio convenience with the same contract as
/// [`compute_portfolio_metrics`].
pub fn compute_metrics_for_portfolio(portfolio: &ClientPortfolio) -> ClientPortfolio {
    let cash = safe_number(portfolio.cash_balance.unwrap_or(0.0));
    let assets_sum: f64 = portfolio
        .assets
        .iter()
        .map(|a| safe_number(a.market_value))
        .sum();
    let total = assets_sum + cash;

    debug!(
        "Computed total market value {} for portfolio {} ({} assets)",
        total,
        portfolio.id,
        portfolio.assets.len()
    );

    let assets: Vec<Asset> = portfolio
        .assets
        .iter()
        .map(|a| {
            let market_value = safe_number(a.market_value);
            let allocation_pct = if total > 0.0 {
                market_value / total * PERCENT_SCALE
            } else {
                0.0
            };
            Asset {
                allocation_pct: Some(allocation_pct),
                ..a.clone()
            }
        })
        .collect();

    let mut allocation_by_type: HashMap<AssetType, f64> = HashMap::new();
    for asset in &assets {
        *allocation_by_type.entry(asset.asset_type).or_insert(0.0) +=
            asset.allocation_pct.unwrap_or(0.0);
    }

    ClientPortfolio {
        assets,
        total_market_value: Some(total),
        allocation_by_type: Some(allocation_by_type),
        ..portfolio.clone()
    }
}
