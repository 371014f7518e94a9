mod http;
mod lexicon;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use http::{HttpEmotionClassifier, HttpSentimentClassifier};
pub use lexicon::{LexiconEmotionClassifier, LexiconSentimentClassifier};

/// How many ranked emotion labels a classifier retains per utterance.
pub const EMOTION_TOP_K: usize = 3;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Classifier confidence in [0, 1].
    pub score: f32,
}

/// One ranked entry of a multi-label emotion classification.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    #[error("classifier request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("classifier returned HTTP {status}: {details}")]
    Api { status: u16, details: String },

    #[error("classifier returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid classifier endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl ClassifyError {
    /// Transient failures worth retrying inside the integration layer. The
    /// core itself never retries; a surviving error aborts the request.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClassifyError::Network(e) => {
                e.is_timeout() || e.is_connect() || e.is_request()
            }
            ClassifyError::Api { status, .. } => crate::util::is_http_retryable(*status),
            ClassifyError::InvalidResponse(_) | ClassifyError::InvalidEndpoint(_) => false,
        }
    }
}

/// Binary sentiment collaborator: text in, label plus confidence out.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<SentimentResult, ClassifyError>>;
}

/// Multi-label emotion collaborator: text in, ranked top-k labels out.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<Vec<EmotionScore>, ClassifyError>>;
}
