use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Failed to {step}. ERROR = {source}")]
    Initialize {
        step: &'static str,
        #[source]
        source: SqlxError,
    },

    #[error("Malformed name lookup `{query}`: {reason}")]
    MalformedLookup { query: String, reason: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for DemoError {
    fn from(e: figment::Error) -> Self {
        DemoError::Config(Box::new(e))
    }
}

impl DemoError {
    /// Wraps an engine error raised while preparing the `USERS` table.
    pub(crate) fn init(step: &'static str) -> impl FnOnce(SqlxError) -> Self {
        move |source| DemoError::Initialize { step, source }
    }
}
