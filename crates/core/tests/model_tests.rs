// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire-shape fidelity of the typed mirrors
// ═══════════════════════════════════════════════════════════════════

use roboadvisor_client_core::models::analysis::{Diversification, PortfolioAnalysis};
use roboadvisor_client_core::models::auth::TokenResponse;
use roboadvisor_client_core::models::dashboard::{AllocationData, PortfolioSummary, RiskMetrics};
use roboadvisor_client_core::models::health::HealthPayload;
use roboadvisor_client_core::models::history::AnalysisHistoryEntry;
use roboadvisor_client_core::models::portfolio::{CsvUploadReport, Holding};
use roboadvisor_client_core::models::user::{UserSettings, UserSettingsPatch};
use roboadvisor_client_core::models::watchlist::WatchlistItem;

// ── Holdings ────────────────────────────────────────────────────────

mod holdings {
    use super::*;

    #[test]
    fn plain_crud_response_without_valuation() {
        let holding: Holding = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Apple Inc.",
            "isin": "US0378331005",
            "ticker": "AAPL",
            "purchase_date": "2024-01-15T00:00:00",
            "quantity": 10.0,
            "purchase_price": "150.50",
            "created_at": "2024-01-15T09:00:00",
            "updated_at": "2024-01-15T09:00:00"
        }))
        .unwrap();

        assert_eq!(holding.id, 12);
        assert_eq!(holding.current_value, None);
        assert_eq!(holding.gain_loss_percent, None);
        assert_eq!(holding.sector, None);
    }

    #[test]
    fn dashboard_position_with_valuation() {
        let holding: Holding = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Apple Inc.",
            "isin": "US0378331005",
            "ticker": "AAPL",
            "purchase_date": "2024-01-15T00:00:00",
            "quantity": 10.0,
            "purchase_price": "150.50",
            "purchase_value": 1505.0,
            "current_price": 185.5,
            "current_value": 1855.0,
            "gain_loss": 350.0,
            "gain_loss_percent": 23.26
        }))
        .unwrap();

        assert_eq!(holding.current_price, Some(185.5));
        assert_eq!(holding.purchase_value, Some(1505.0));
    }

    #[test]
    fn absent_valuation_renders_as_na() {
        assert_eq!(Holding::display_value(None), "N/A");
        assert_eq!(Holding::display_value(Some(1855.0)), "1855.00");
    }

    #[test]
    fn csv_upload_report_shape() {
        let report: CsvUploadReport = serde_json::from_value(serde_json::json!({
            "success": 3,
            "errors": ["Zeile 5: ISIN oder Ticker muss angegeben werden"],
            "created": [
                {"id": 1, "name": "Apple Inc.", "isin": "US0378331005", "ticker": "AAPL"},
                {"id": 2, "name": "Microsoft", "isin": null, "ticker": "MSFT"},
                {"id": 3, "name": "BASF", "isin": "DE000BASF111", "ticker": null}
            ]
        }))
        .unwrap();

        assert_eq!(report.success, 3);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.created.len(), 3);
        assert_eq!(report.created[1].ticker.as_deref(), Some("MSFT"));
    }
}

// ── Dashboard ───────────────────────────────────────────────────────

mod dashboard {
    use super::*;

    #[test]
    fn summary_with_positions() {
        let summary: PortfolioSummary = serde_json::from_value(serde_json::json!({
            "total_purchase_value": 1505.0,
            "total_current_value": 1855.0,
            "total_gain_loss": 350.0,
            "total_gain_loss_percent": 23.26,
            "position_count": 1,
            "positions": [{
                "id": 12,
                "name": "Apple Inc.",
                "purchase_date": "2024-01-15T00:00:00",
                "quantity": 10.0,
                "purchase_price": "150.50",
                "purchase_value": 1505.0
            }]
        }))
        .unwrap();

        assert_eq!(summary.position_count, 1);
        assert_eq!(summary.positions[0].name, "Apple Inc.");
    }

    #[test]
    fn allocation_keeps_server_order() {
        let allocation: AllocationData = serde_json::from_value(serde_json::json!({
            "by_sector": [
                {"category": "Technology", "value": 1855.0, "percentage": 62.0},
                {"category": "Chemicals", "value": 890.0, "percentage": 38.0}
            ],
            "by_region": [],
            "by_asset_class": []
        }))
        .unwrap();

        let sectors: Vec<&str> = allocation
            .by_sector
            .iter()
            .map(|i| i.category.as_str())
            .collect();
        assert_eq!(sectors, vec!["Technology", "Chemicals"]);
    }

    #[test]
    fn risk_metrics_tolerate_missing_figures() {
        let metrics: RiskMetrics = serde_json::from_value(serde_json::json!({
            "beta": 1.1
        }))
        .unwrap();
        assert_eq!(metrics.beta, Some(1.1));
        assert_eq!(metrics.sharpe_ratio, None);
    }
}

// ── Settings ────────────────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn wire_uses_camel_case_for_advisory_fields() {
        let settings: UserSettings = serde_json::from_value(serde_json::json!({
            "timezone": "Europe/Berlin",
            "language": "de",
            "currency": "EUR",
            "riskProfile": "moderat",
            "investmentHorizon": "5-10",
            "notifications": {"email": true, "push": false},
            "two_factor_enabled": false
        }))
        .unwrap();

        assert_eq!(settings.risk_profile.as_deref(), Some("moderat"));
        assert_eq!(settings.investment_horizon.as_deref(), Some("5-10"));
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = UserSettingsPatch {
            currency: Some("USD".into()),
            ..UserSettingsPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"currency": "USD"}));
    }

    #[test]
    fn patch_uses_camel_case_on_the_wire() {
        let patch = UserSettingsPatch {
            risk_profile: Some("spekulativ".into()),
            ..UserSettingsPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"riskProfile": "spekulativ"}));
    }
}

// ── Analysis ────────────────────────────────────────────────────────

mod analysis {
    use super::*;

    fn sample() -> PortfolioAnalysis {
        serde_json::from_value(serde_json::json!({
            "fundamentalAnalysis": [
                {"ticker": "AAPL", "summary": "Solide Bilanz", "valuation": "fair"}
            ],
            "technicalAnalysis": [
                {"ticker": "AAPL", "trend": "aufwärts", "rsi": "58", "signal": "halten"}
            ],
            "risks": ["Klumpenrisiko Technologie"],
            "diversification": {
                "regionBreakdown": {"USA": 80.0, "Europa": 20.0},
                "sectorBreakdown": {"Technology": 62.0},
                "positionWeights": {
                    "Apple Inc.": 40.0, "Microsoft": 25.0, "BASF": 12.0,
                    "Siemens": 8.0, "SAP": 5.0, "Allianz": 4.0, "Bayer": 3.0,
                    "VW": 1.5, "Adidas": 0.9, "Zalando": 0.4, "Lufthansa": 0.2
                }
            },
            "cashAssessment": "Cash-Quote angemessen",
            "suggestedRebalancing": "Technologie reduzieren",
            "shortTermAdvice": "Halten",
            "longTermAdvice": "Diversifizieren",
            "cached": true,
            "generated_at": "2026-08-06T10:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn camel_case_fields_map_to_snake_case() {
        let analysis = sample();
        assert_eq!(analysis.fundamental_analysis[0].valuation, "fair");
        assert_eq!(analysis.cash_assessment, "Cash-Quote angemessen");
        assert!(analysis.cached);
    }

    #[test]
    fn top_position_weights_sorts_and_truncates_to_ten() {
        let top = sample().diversification.top_position_weights(10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].0, "Apple Inc.");
        assert_eq!(top[1].0, "Microsoft");
        // Eleventh-smallest weight is cut.
        assert!(top.iter().all(|(name, _)| name != "Lufthansa"));
        // Weights are non-increasing.
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn empty_diversification_yields_empty_top_list() {
        let diversification = Diversification::default();
        assert!(diversification.top_position_weights(10).is_empty());
    }

    #[test]
    fn missing_optional_sections_default() {
        let analysis: PortfolioAnalysis = serde_json::from_value(serde_json::json!({
            "fundamentalAnalysis": [],
            "technicalAnalysis": [],
            "risks": [],
            "diversification": {},
            "cashAssessment": "",
            "suggestedRebalancing": "",
            "shortTermAdvice": "",
            "longTermAdvice": ""
        }))
        .unwrap();
        assert!(!analysis.cached);
        assert_eq!(analysis.generated_at, None);
    }
}

// ── History, watchlist, auth, health ────────────────────────────────

mod misc {
    use super::*;

    #[test]
    fn history_entry_with_partial_analysis_data() {
        let entry: AnalysisHistoryEntry = serde_json::from_value(serde_json::json!({
            "id": 3,
            "portfolio_holding_id": 12,
            "watchlist_item_id": null,
            "asset_name": "Apple Inc.",
            "asset_isin": "US0378331005",
            "asset_ticker": "AAPL",
            "analysis_data": {
                "recommendation": "Halten",
                "priceTarget": "200 USD"
            },
            "created_at": "2026-08-01T08:00:00"
        }))
        .unwrap();

        assert_eq!(entry.analysis_data.recommendation.as_deref(), Some("Halten"));
        assert_eq!(entry.analysis_data.risks, None);
        assert_eq!(entry.watchlist_item_id, None);
    }

    #[test]
    fn watchlist_item_has_notes_but_no_valuation() {
        let item: WatchlistItem = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": "Nvidia",
            "ticker": "NVDA",
            "notes": "Bei Rücksetzer kaufen",
            "created_at": "2026-07-01T12:00:00",
            "updated_at": "2026-07-01T12:00:00"
        }))
        .unwrap();

        assert_eq!(item.notes.as_deref(), Some("Bei Rücksetzer kaufen"));
        assert_eq!(item.isin, None);
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "eyJ...",
            "token_type": "bearer",
            "expires_in": 1800
        }))
        .unwrap();
        assert_eq!(token.access_token, "eyJ...");
    }

    #[test]
    fn health_payload_verdict() {
        let healthy: HealthPayload =
            serde_json::from_value(serde_json::json!({"status": "healthy"})).unwrap();
        let sick: HealthPayload =
            serde_json::from_value(serde_json::json!({"status": "degraded"})).unwrap();
        assert!(healthy.is_healthy());
        assert!(!sick.is_healthy());
    }
}
