//! Tests for portfolio domain models and their wire format.

#[cfg(test)]
mod tests {
    use crate::portfolio::{compute_metrics_for_portfolio, Asset, AssetType, ClientPortfolio};
    use serde_json::json;

    #[test]
    fn test_asset_type_serialization() {
        assert_eq!(serde_json::to_string(&AssetType::Stock).unwrap(), "\"stock\"");
        assert_eq!(serde_json::to_string(&AssetType::Etf).unwrap(), "\"etf\"");
        assert_eq!(serde_json::to_string(&AssetType::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_asset_type_defaults_to_other() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a1",
            "quantity": 1,
            "unitPrice": 10,
            "marketValue": 10
        }))
        .unwrap();
        assert_eq!(asset.asset_type, AssetType::Other);
    }

    #[test]
    fn test_portfolio_deserializes_from_camel_case_wire_shape() {
        let portfolio: ClientPortfolio = serde_json::from_value(json!({
            "id": "p1",
            "clientId": "c1",
            "asOf": 1700000000000i64,
            "assets": [
                { "id": "a1", "type": "stock", "ticker": "AAPL",
                  "quantity": 10, "unitPrice": 100, "marketValue": 1000 }
            ],
            "cashBalance": 250.5
        }))
        .unwrap();

        assert_eq!(portfolio.client_id.as_deref(), Some("c1"));
        assert_eq!(portfolio.assets[0].asset_type, AssetType::Stock);
        assert_eq!(portfolio.assets[0].market_value, 1000.0);
        assert_eq!(portfolio.cash_balance, Some(250.5));
        assert_eq!(portfolio.total_market_value, None);
    }

    #[test]
    fn test_missing_assets_field_is_empty_sequence() {
        let portfolio: ClientPortfolio = serde_json::from_value(json!({
            "id": "p1",
            "asOf": 0
        }))
        .unwrap();
        assert!(portfolio.assets.is_empty());
        assert_eq!(portfolio.cash_balance, None);
    }

    #[test]
    fn test_malformed_market_value_normalizes_to_zero() {
        let portfolio: ClientPortfolio = serde_json::from_value(json!({
            "id": "p1",
            "asOf": 0,
            "assets": [
                { "id": "a1", "type": "stock", "marketValue": "not-a-number" },
                { "id": "a2", "type": "bond", "marketValue": null },
                { "id": "a3", "type": "etf" },
                { "id": "a4", "type": "cash", "marketValue": "750.25" }
            ],
            "cashBalance": "oops"
        }))
        .unwrap();

        let result = compute_metrics_for_portfolio(&portfolio);

        assert_eq!(result.total_market_value, Some(750.25));
        assert_eq!(result.assets[0].allocation_pct, Some(0.0));
        assert_eq!(result.assets[1].allocation_pct, Some(0.0));
        assert_eq!(result.assets[2].allocation_pct, Some(0.0));
        assert_eq!(result.assets[3].allocation_pct, Some(100.0));
    }

    #[test]
    fn test_computed_portfolio_serializes_allocation_map() {
        let portfolio: ClientPortfolio = serde_json::from_value(json!({
            "id": "p1",
            "asOf": 0,
            "assets": [
                { "id": "a1", "type": "stock", "marketValue": 600 },
                { "id": "a2", "type": "bond", "marketValue": 400 }
            ]
        }))
        .unwrap();

        let result = compute_metrics_for_portfolio(&portfolio);
        let wire = serde_json::to_value(&result).unwrap();

        assert_eq!(wire["totalMarketValue"], json!(1000.0));
        assert_eq!(wire["allocationByType"]["stock"], json!(60.0));
        assert_eq!(wire["allocationByType"]["bond"], json!(40.0));
        assert_eq!(wire["assets"][0]["allocationPct"], json!(60.0));
    }

    #[test]
    fn test_performance_points_round_trip() {
        let portfolio: ClientPortfolio = serde_json::from_value(json!({
            "id": "p1",
            "asOf": 0,
            "performance": [
                { "timestamp": 1700000000000i64, "portfolioValue": 1500.0,
                  "periodReturnPct": 1.2, "cumulativeReturnPct": 8.4 }
            ]
        }))
        .unwrap();

        let points = portfolio.performance.as_ref().unwrap();
        assert_eq!(points[0].portfolio_value, 1500.0);
        assert_eq!(points[0].period_return_pct, Some(1.2));

        // Carried through the calculator untouched
        let result = compute_metrics_for_portfolio(&portfolio);
        assert_eq!(result.performance, portfolio.performance);
    }
}
