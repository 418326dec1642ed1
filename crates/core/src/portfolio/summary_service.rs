//! Builds display-ready summaries from portfolio snapshots.

use log::debug;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::{
    compute_metrics_for_portfolio, AssetSummaryView, ClientPortfolio, PortfolioSummaryView,
};

/// Formats a monetary amount with a leading dollar sign and two decimals.
fn format_money(value: f64) -> String {
    format!("${:.prec$}", value, prec = DISPLAY_DECIMAL_PRECISION)
}

/// Formats a percentage with a trailing percent sign and two decimals.
fn format_percent(value: f64) -> String {
    format!("{:.prec$}%", value, prec = DISPLAY_DECIMAL_PRECISION)
}

/// Runs the metrics calculator over one portfolio and shapes the result for
/// display. Pure function of its input; the snapshot itself is untouched.
pub fn build_portfolio_summary(portfolio: &ClientPortfolio) -> PortfolioSummaryView {
    let computed = compute_metrics_for_portfolio(portfolio);
    let total = computed.total_market_value.unwrap_or(0.0);

    debug!("Building summary view for portfolio {}", computed.id);

    let assets = computed
        .assets
        .iter()
        .map(|a| {
            let allocation_pct = a.allocation_pct.unwrap_or(0.0);
            let label = a
                .name
                .clone()
                .or_else(|| a.ticker.clone())
                .unwrap_or_else(|| a.id.clone());
            AssetSummaryView {
                id: a.id.clone(),
                label,
                asset_type: a.asset_type,
                market_value: a.market_value,
                market_value_display: format_money(a.market_value),
                allocation_pct,
                allocation_pct_display: format_percent(allocation_pct),
            }
        })
        .collect();

    PortfolioSummaryView {
        id: computed.id.clone(),
        label: computed.name.clone().unwrap_or_else(|| computed.id.clone()),
        as_of: computed.as_of,
        total_market_value: total,
        total_market_value_display: format_money(total),
        assets,
        allocation_by_type: computed.allocation_by_type.unwrap_or_default(),
    }
}
