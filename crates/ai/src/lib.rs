//! Carbonate AI - daily market summary generation using rig-core.
//!
//! This crate turns the day's market figures into a one-sentence analyst
//! summary. The language model sits behind the [`AnalysisModel`] capability
//! trait so the pipeline and the tests never touch a concrete client
//! directly; model failures of any kind degrade to a canned sentence keyed
//! on the sign of the day change.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use carbonate_ai::{OpenAiAnalysisModel, SummaryInput, SummaryService, DEFAULT_MODEL_ID};
//!
//! let service = SummaryService::new(Arc::new(OpenAiAnalysisModel::new(DEFAULT_MODEL_ID)));
//! let summary = service.daily_summary(&input).await;
//! println!("{}", summary.text());
//! ```

pub mod error;
pub mod model;
pub mod summary;

pub use error::AiError;
pub use model::{AnalysisModel, FakeAnalysisModel, OpenAiAnalysisModel};
pub use summary::{Summary, SummaryInput, SummaryService, DEFAULT_MODEL_ID};
