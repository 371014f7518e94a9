use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub confidence: Option<f32>,
}

#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("transcription failed: {details}")]
    Failed { details: String },
}

/// External speech-to-text collaborator invoked on the voice path before the
/// text inferencer runs over the transcript.
pub trait Transcriber: Send + Sync {
    fn transcribe(
        &self,
        samples: Vec<f32>,
        sample_rate: u32,
    ) -> BoxFuture<'_, Result<Transcript, TranscribeError>>;
}

/// Transcriber double returning a fixed transcript regardless of input.
#[derive(Clone, Debug, Default)]
pub struct FixedTranscriber {
    text: String,
}

impl FixedTranscriber {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl Transcriber for FixedTranscriber {
    fn transcribe(
        &self,
        _samples: Vec<f32>,
        _sample_rate: u32,
    ) -> BoxFuture<'_, Result<Transcript, TranscribeError>> {
        async move {
            Ok(Transcript {
                text: self.text.clone(),
                confidence: None,
            })
        }
        .boxed()
    }
}
