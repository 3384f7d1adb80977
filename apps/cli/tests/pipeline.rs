//! End-to-end pipeline behavior with every external collaborator failing.

use std::sync::Arc;

use rust_decimal_macros::dec;

use carbonate_ai::{FakeAnalysisModel, SummaryService};
use carbonate_cli::{MarketReport, Pipeline, ReportStore};
use carbonate_market_data::{EastmoneyFuturesProvider, SmmSpotProvider};

// Closed local port: connection refused without leaving the machine.
const DEAD_SPOT_URL: &str = "http://127.0.0.1:9/li2co3";
const DEAD_FUTURES_URL: &str = "http://127.0.0.1:9/lcm";

#[tokio::test]
async fn test_report_is_complete_when_fetchers_and_model_all_fail() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("deep").join("market_data.json");

    let pipeline = Pipeline::new(
        SmmSpotProvider::with_url(DEAD_SPOT_URL),
        EastmoneyFuturesProvider::with_url(DEAD_FUTURES_URL),
        SummaryService::new(Arc::new(FakeAnalysisModel::failing())),
        ReportStore::new(&out),
    );

    let report = pipeline.run().await.expect("pipeline must complete");

    // Fallback constants all the way through.
    assert_eq!(report.spot_price.battery_grade, dec!(80500.0));
    assert_eq!(report.spot_price.industrial_grade, dec!(78300.0));
    assert_eq!(report.spot_price.daily_change_percent, dec!(-0.5));
    assert_eq!(report.futures_price.lc_main, dec!(79800.0));
    assert_eq!(report.futures_price.daily_change_percent, dec!(0.3));
    assert_eq!(report.price_history.len(), 30);

    // The negative placeholder change selects the cautious canned sentence.
    assert!(!report.ai_analysis.is_empty());
    assert!(report.ai_analysis.contains("下跌"));

    // The file landed under the freshly created nested directory and
    // round-trips structurally, summary text stored literally.
    let raw = std::fs::read_to_string(&out).unwrap();
    assert!(raw.contains("今日电池级碳酸锂"));
    let loaded: MarketReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(loaded, report);
}

#[tokio::test]
async fn test_model_text_reaches_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("market_data.json");

    let pipeline = Pipeline::new(
        SmmSpotProvider::with_url(DEAD_SPOT_URL),
        EastmoneyFuturesProvider::with_url(DEAD_FUTURES_URL),
        SummaryService::new(Arc::new(FakeAnalysisModel::with_response(
            "碳酸锂市场今日窄幅震荡。",
        ))),
        ReportStore::new(&out),
    );

    let report = pipeline.run().await.expect("pipeline must complete");
    assert_eq!(report.ai_analysis, "碳酸锂市场今日窄幅震荡。");
}
