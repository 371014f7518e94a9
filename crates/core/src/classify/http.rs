use crate::classify::{
    ClassifyError, EmotionClassifier, EmotionScore, SentimentClassifier, SentimentLabel,
    SentimentResult, EMOTION_TOP_K,
};
use crate::util::{retry_with_backoff, RetryConfig};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;
use url::Url;

pub const DEFAULT_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct RawScore {
    label: String,
    score: f32,
}

/// Shared plumbing for the two Hugging Face text-classification endpoints.
#[derive(Clone)]
struct InferenceEndpoint {
    client: Client,
    url: Url,
    api_token: Option<String>,
    retry: RetryConfig,
}

impl InferenceEndpoint {
    fn new(
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifyError> {
        let url = Url::parse(&format!("{DEFAULT_INFERENCE_BASE}/{model}"))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            api_token,
            retry: RetryConfig::default(),
        })
    }

    /// One request/response exchange. The inference API answers
    /// text-classification calls with a nested list: one ranked score list
    /// per input string.
    async fn scores(&self, text: &str) -> Result<Vec<RawScore>, ClassifyError> {
        let mut request = self
            .client
            .post(self.url.clone())
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            return Err(ClassifyError::Api { status, details });
        }

        let mut batches: Vec<Vec<RawScore>> = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(format!("bad json: {e}")))?;
        if batches.is_empty() {
            return Err(ClassifyError::InvalidResponse(
                "empty classification batch".to_owned(),
            ));
        }
        Ok(batches.swap_remove(0))
    }

    async fn scores_with_retry(&self, text: &str) -> Result<Vec<RawScore>, ClassifyError> {
        retry_with_backoff(&self.retry, || self.scores(text), ClassifyError::is_retryable).await
    }
}

/// Binary sentiment client for the Hugging Face Inference API. The default
/// model is `distilbert-base-uncased-finetuned-sst-2-english`, which labels
/// utterances POSITIVE or NEGATIVE with a confidence score.
#[derive(Clone)]
pub struct HttpSentimentClassifier {
    endpoint: InferenceEndpoint,
}

impl HttpSentimentClassifier {
    pub fn new(
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifyError> {
        Ok(Self {
            endpoint: InferenceEndpoint::new(model, api_token, timeout)?,
        })
    }
}

impl SentimentClassifier for HttpSentimentClassifier {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<SentimentResult, ClassifyError>> {
        async move {
            let scores = self.endpoint.scores_with_retry(&text).await?;
            let top = scores
                .into_iter()
                .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))
                .ok_or_else(|| {
                    ClassifyError::InvalidResponse("no sentiment scores".to_owned())
                })?;
            let label = match top.label.as_str() {
                "POSITIVE" => SentimentLabel::Positive,
                "NEGATIVE" => SentimentLabel::Negative,
                other => {
                    return Err(ClassifyError::InvalidResponse(format!(
                        "unexpected sentiment label: {other}"
                    )))
                }
            };
            tracing::debug!(label = ?label, score = top.score, "sentiment classified");
            Ok(SentimentResult {
                label,
                score: top.score,
            })
        }
        .boxed()
    }
}

/// Ranked emotion client for the Hugging Face Inference API. The default
/// model is `j-hartmann/emotion-english-distilroberta-base`; only the top
/// [`EMOTION_TOP_K`] labels are retained, descending by score.
#[derive(Clone)]
pub struct HttpEmotionClassifier {
    endpoint: InferenceEndpoint,
}

impl HttpEmotionClassifier {
    pub fn new(
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifyError> {
        Ok(Self {
            endpoint: InferenceEndpoint::new(model, api_token, timeout)?,
        })
    }
}

impl EmotionClassifier for HttpEmotionClassifier {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<Vec<EmotionScore>, ClassifyError>> {
        async move {
            let scores = self.endpoint.scores_with_retry(&text).await?;
            let mut ranked: Vec<EmotionScore> = scores
                .into_iter()
                .map(|s| EmotionScore {
                    label: s.label,
                    score: s.score,
                })
                .collect();
            ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            ranked.truncate(EMOTION_TOP_K);
            tracing::debug!(count = ranked.len(), "emotions classified");
            Ok(ranked)
        }
        .boxed()
    }
}
