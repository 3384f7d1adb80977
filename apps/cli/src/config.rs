//! Runtime configuration from the environment.

use std::path::PathBuf;

use carbonate_ai::DEFAULT_MODEL_ID;

/// Runtime configuration. Every key has a default; none is required.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the finished report is written.
    pub data_file: PathBuf,

    /// Reserved path for a historical price store. The current pipeline
    /// neither reads nor writes it; the history in the report is synthetic.
    pub history_file: PathBuf,

    /// Completion model id for the summary call.
    pub model_id: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The OpenAI credential stays ambient (`OPENAI_API_KEY`, read by the
    /// model client at call time) and is deliberately not part of this
    /// struct.
    pub fn from_env() -> Self {
        Self {
            data_file: std::env::var("CARBONATE_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/market_data.json")),
            history_file: std::env::var("CARBONATE_HISTORY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/price_history.json")),
            model_id: std::env::var("CARBONATE_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
        }
    }
}
