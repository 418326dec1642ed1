//! Portfolio module - snapshot models, metrics calculator, and summary views.

mod metrics_calculator;
mod portfolio_model;
mod summary_model;
mod summary_service;

#[cfg(test)]
mod portfolio_model_tests;

// Re-export the public interface
pub use metrics_calculator::{compute_metrics_for_portfolio, compute_portfolio_metrics};
pub use portfolio_model::{Asset, AssetType, ClientPortfolio, PerformancePoint};
pub use summary_model::{AssetSummaryView, PortfolioSummaryView};
pub use summary_service::build_portfolio_summary;
