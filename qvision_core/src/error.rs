//! Error type shared by the serialization and producer boundaries.
//!
//! Controller transitions never fail; everything here comes from parsing
//! external input (session files, view names) or from the mock producers.

/// Errors raised at the edges of the core crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A survey record carried neither `timestamp` nor the legacy `date`.
    #[error("survey result `{id}` has neither `timestamp` nor `date`")]
    MissingTimestamp { id: String },

    /// A view name that is not one of the five shell views.
    #[error("unknown view `{0}` (expected one of: home, survey, upload, report, lab)")]
    UnknownView(String),

    /// The questionnaire was evaluated before every question had an answer.
    #[error("question `{question}` has not been answered")]
    IncompleteSurvey { question: String },

    /// An answer index outside the question's choice list.
    #[error("choice {choice} is out of range for question `{question}` ({available} choices)")]
    InvalidChoice {
        question: String,
        choice: usize,
        available: usize,
    },

    #[error("failed to parse session: {0}")]
    SessionParse(#[source] serde_json::Error),

    #[error("failed to serialize session: {0}")]
    SessionSerialize(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
