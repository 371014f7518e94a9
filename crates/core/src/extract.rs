use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

/// Summary statistics computed over one decoded utterance.
///
/// Produced once per audio input by an external feature extractor and owned
/// by the voice inferencer for the duration of one request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    /// Mean of each of the 13 MFCC bands.
    pub mfcc_mean: Vec<f32>,
    /// Mean spectral centroid in Hz.
    pub centroid_mean: f32,
    /// Mean spectral contrast per band.
    pub contrast_mean: Vec<f32>,
    /// Mean zero-crossing rate, 0..1.
    pub zcr_mean: f32,
    /// Mean RMS energy.
    pub rms_mean: f32,
    /// Estimated tempo in BPM; [`FeatureVector::DEFAULT_TEMPO`] when the
    /// extractor could not detect one.
    pub tempo: f32,
}

impl FeatureVector {
    pub const MFCC_COUNT: usize = 13;
    pub const DEFAULT_TEMPO: f32 = 120.0;

    /// Rejects non-finite fields and a malformed MFCC block before any
    /// threshold in the voice cascade is evaluated.
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.mfcc_mean.len() != Self::MFCC_COUNT {
            return Err(FeatureError::MfccLength {
                got: self.mfcc_mean.len(),
            });
        }
        for (field, value) in [
            ("centroid_mean", self.centroid_mean),
            ("zcr_mean", self.zcr_mean),
            ("rms_mean", self.rms_mean),
            ("tempo", self.tempo),
        ] {
            if !value.is_finite() {
                return Err(FeatureError::NonFinite { field });
            }
        }
        if self.mfcc_mean.iter().any(|v| !v.is_finite()) {
            return Err(FeatureError::NonFinite { field: "mfcc_mean" });
        }
        if self.contrast_mean.iter().any(|v| !v.is_finite()) {
            return Err(FeatureError::NonFinite {
                field: "contrast_mean",
            });
        }
        Ok(())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            mfcc_mean: vec![0.0; Self::MFCC_COUNT],
            centroid_mean: 0.0,
            contrast_mean: Vec::new(),
            zcr_mean: 0.0,
            rms_mean: 0.0,
            tempo: Self::DEFAULT_TEMPO,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("invalid feature vector: {field} is not finite")]
    NonFinite { field: &'static str },

    #[error("invalid feature vector: expected {} mfcc means, got {got}", FeatureVector::MFCC_COUNT)]
    MfccLength { got: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("unreadable audio: {details}")]
    UnreadableAudio { details: String },
}

/// External collaborator turning a decoded waveform into a [`FeatureVector`].
/// Real DSP lives outside this crate; the core only consumes the vector.
pub trait FeatureExtractor: Send + Sync {
    fn extract(
        &self,
        samples: Vec<f32>,
        sample_rate: u32,
    ) -> BoxFuture<'_, Result<FeatureVector, ExtractError>>;
}

/// Extractor double that hands back a pre-computed vector. Used by the CLI
/// when features arrive as JSON and by pipeline tests.
#[derive(Clone, Debug)]
pub struct FixedFeatureExtractor {
    features: FeatureVector,
}

impl FixedFeatureExtractor {
    pub fn new(features: FeatureVector) -> Self {
        Self { features }
    }
}

impl FeatureExtractor for FixedFeatureExtractor {
    fn extract(
        &self,
        samples: Vec<f32>,
        _sample_rate: u32,
    ) -> BoxFuture<'_, Result<FeatureVector, ExtractError>> {
        async move {
            if samples.is_empty() {
                return Err(ExtractError::UnreadableAudio {
                    details: "no samples".to_owned(),
                });
            }
            Ok(self.features.clone())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vector_is_valid() {
        assert_eq!(FeatureVector::default().validate(), Ok(()));
    }

    #[test]
    fn non_finite_field_is_rejected() {
        let features = FeatureVector {
            rms_mean: f32::NAN,
            ..FeatureVector::default()
        };
        assert_eq!(
            features.validate(),
            Err(FeatureError::NonFinite { field: "rms_mean" })
        );

        let features = FeatureVector {
            tempo: f32::INFINITY,
            ..FeatureVector::default()
        };
        assert_eq!(
            features.validate(),
            Err(FeatureError::NonFinite { field: "tempo" })
        );
    }

    #[test]
    fn wrong_mfcc_length_is_rejected() {
        let features = FeatureVector {
            mfcc_mean: vec![0.0; 5],
            ..FeatureVector::default()
        };
        assert_eq!(features.validate(), Err(FeatureError::MfccLength { got: 5 }));
    }

    #[test]
    fn feature_vector_round_trips_through_json() {
        let json = r#"{
            "mfcc_mean": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            "centroid_mean": 1850.5,
            "contrast_mean": [20.1, 18.4],
            "zcr_mean": 0.07,
            "rms_mean": 0.12,
            "tempo": 132.0
        }"#;
        let features: FeatureVector = serde_json::from_str(json).expect("valid json");
        assert_eq!(features.validate(), Ok(()));
        assert_eq!(features.tempo, 132.0);

        let encoded = serde_json::to_string(&features).expect("serializable");
        let decoded: FeatureVector = serde_json::from_str(&encoded).expect("round trip");
        assert_eq!(decoded, features);
    }

    #[test]
    fn fixed_extractor_rejects_empty_audio() {
        let extractor = FixedFeatureExtractor::new(FeatureVector::default());
        let result = futures::executor::block_on(extractor.extract(Vec::new(), 16_000));
        assert!(matches!(result, Err(ExtractError::UnreadableAudio { .. })));
    }
}
