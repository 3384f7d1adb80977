//! Daily market summary generation with canned fallback.
//!
//! Builds the analyst prompt from the day's figures, runs it through the
//! configured [`AnalysisModel`], and falls back to one of three canned
//! sentences (chosen by the sign of the day change) when the model cannot
//! answer.

use std::sync::Arc;

use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::model::AnalysisModel;

/// Default completion model for the summary call.
pub const DEFAULT_MODEL_ID: &str = "gpt-4.1-mini";

/// Fixed system role for the completion call.
const SYSTEM_PROMPT: &str = "你是一位专业的大宗商品市场分析师，擅长用简洁的语言总结市场动向。";

/// Canned sentence for a rising day.
const RISING_SUMMARY: &str =
    "今日电池级碳酸锂价格小幅上涨，市场供需关系相对均衡。期货主力合约跟涨，显示市场情绪稳定。";

/// Canned sentence for a falling day.
const FALLING_SUMMARY: &str =
    "今日电池级碳酸锂价格小幅下跌，市场观望情绪浓厚。期货主力合约走势疲弱，建议关注下游备货节奏。";

/// Canned sentence for a flat day.
const FLAT_SUMMARY: &str =
    "今日电池级碳酸锂价格保持稳定，市场交投清淡。期货主力合约横盘整理，等待新的市场信号。";

/// Market figures embedded in the summary prompt.
#[derive(Clone, Debug)]
pub struct SummaryInput {
    /// Battery-grade spot price in yuan per tonne
    pub battery_grade: Decimal,

    /// Spot day-over-day change in percent
    pub change_percent: Decimal,

    /// Futures main-contract price in yuan per tonne
    pub futures_price: Decimal,
}

/// How the summary text was produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// Model-written text.
    Generated(String),

    /// Canned sentence keyed on the day-change sign.
    Canned {
        /// The sentence used in place of a completion
        text: String,
        /// Why the model path was abandoned
        reason: String,
    },
}

impl Summary {
    /// The summary text, model-written or canned.
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Canned { text, .. } => text,
        }
    }

    /// Consume the summary and take the text.
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Canned { text, .. } => text,
        }
    }

    /// Whether the canned fallback was used.
    pub fn is_canned(&self) -> bool {
        matches!(self, Self::Canned { .. })
    }
}

/// Summary generation service.
pub struct SummaryService {
    model: Arc<dyn AnalysisModel>,
}

impl SummaryService {
    /// Create a service over the given analysis model.
    pub fn new(model: Arc<dyn AnalysisModel>) -> Self {
        Self { model }
    }

    /// Produce the daily one-sentence market summary.
    ///
    /// Any model failure (network, auth, quota, empty completion) degrades
    /// to the canned sentence for the sign of `change_percent`.
    pub async fn daily_summary(&self, input: &SummaryInput) -> Summary {
        let prompt = build_prompt(input);
        match self.model.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(text) => Summary::Generated(text),
            Err(e) => {
                warn!("Summary generation failed, using canned sentence: {}", e);
                Summary::Canned {
                    text: canned_summary(input.change_percent).to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Build the analyst prompt. Prices are rounded to integers, the change to
/// one decimal with an explicit sign.
fn build_prompt(input: &SummaryInput) -> String {
    let battery = input.battery_grade.to_f64().unwrap_or_default();
    let change = input.change_percent.to_f64().unwrap_or_default();
    let futures = input.futures_price.to_f64().unwrap_or_default();
    format!(
        "你是一位专业的锂矿和碳酸锂市场分析师。基于以下市场数据，用一句话（不超过 50 字）总结今日市场情况和趋势判断：\n\
         \n\
         - 电池级碳酸锂现货均价：{battery:.0} 元/吨\n\
         - 日涨跌幅：{change:+.1}%\n\
         - 碳酸锂期货主力合约价：{futures:.0} 元/吨\n\
         \n\
         请用简洁、专业的语言进行总结，突出市场的关键特点和可能的短期趋势。"
    )
}

/// Canned sentence for the given day change.
fn canned_summary(change_percent: Decimal) -> &'static str {
    if change_percent > Decimal::ZERO {
        RISING_SUMMARY
    } else if change_percent < Decimal::ZERO {
        FALLING_SUMMARY
    } else {
        FLAT_SUMMARY
    }
}
