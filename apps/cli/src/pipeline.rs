//! Sequential report pipeline.

use std::sync::Arc;

use chrono::{Local, Utc};
use tracing::info;

use carbonate_ai::{AnalysisModel, OpenAiAnalysisModel, SummaryInput, SummaryService};
use carbonate_market_data::{history, EastmoneyFuturesProvider, SmmSpotProvider};

use crate::config::Config;
use crate::report::MarketReport;
use crate::store::{ReportStore, StoreError};

/// The fetch -> summarize -> persist pipeline.
///
/// Collaborators are injected so tests can run the whole sequence against
/// dead endpoints and a fake model.
pub struct Pipeline {
    spot: SmmSpotProvider,
    futures: EastmoneyFuturesProvider,
    summary: SummaryService,
    store: ReportStore,
}

impl Pipeline {
    /// Pipeline against the live sources, per the given configuration.
    pub fn from_config(config: &Config) -> Self {
        let model: Arc<dyn AnalysisModel> = Arc::new(OpenAiAnalysisModel::new(&config.model_id));
        Self::new(
            SmmSpotProvider::new(),
            EastmoneyFuturesProvider::new(),
            SummaryService::new(model),
            ReportStore::new(&config.data_file),
        )
    }

    /// Pipeline over explicit collaborators.
    pub fn new(
        spot: SmmSpotProvider,
        futures: EastmoneyFuturesProvider,
        summary: SummaryService,
        store: ReportStore,
    ) -> Self {
        Self {
            spot,
            futures,
            summary,
            store,
        }
    }

    /// Run the full sequential pipeline and return the finished report.
    ///
    /// Fetch and summary failures degrade to their documented fallbacks;
    /// only persistence errors escape.
    pub async fn run(&self) -> Result<MarketReport, StoreError> {
        let today = Local::now().date_naive();

        info!("Fetching spot price...");
        let spot = self.spot.latest(today).await;

        info!("Fetching futures quote...");
        let futures = self.futures.latest().await;

        info!("Generating price history...");
        let price_history = history::synthesize(today);

        info!("Generating market summary...");
        let summary = self
            .summary
            .daily_summary(&SummaryInput {
                battery_grade: spot.value().battery_grade,
                change_percent: spot.value().change_percent,
                futures_price: futures.value().price,
            })
            .await;

        let report = MarketReport::assemble(
            Utc::now(),
            spot.value(),
            futures.value(),
            price_history,
            summary.into_text(),
        );

        self.store.save(&report)?;
        info!("Report saved to {}", self.store.path().display());

        Ok(report)
    }
}
