use crate::classify::{ClassifyError, EmotionClassifier, SentimentClassifier};
use crate::extract::{ExtractError, FeatureError, FeatureExtractor, FeatureVector};
use crate::fuse::{self, FusionInput};
use crate::mood::MoodAssessment;
use crate::recommend::{self, Catalog, GameRecommendation, Recommendation};
use crate::text;
use crate::transcribe::{TranscribeError, Transcriber};
use crate::voice;
use serde::{Deserialize, Serialize};

/// Request failure taxonomy. Any collaborator failure aborts the whole
/// request; partial results are never returned and nothing is retried here.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidFeatureVector(#[from] FeatureError),

    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(#[from] ClassifyError),

    #[error(transparent)]
    UnreadableAudio(#[from] ExtractError),

    #[error(transparent)]
    Transcription(#[from] TranscribeError),
}

/// Voice-path payload: the fused assessment plus the transcript it came from
/// and mood-matched game suggestions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VoiceAnalysis {
    pub assessment: MoodAssessment,
    pub transcript: Option<String>,
    pub game_recommendations: Vec<GameRecommendation>,
}

/// Stateless analysis engine over the four collaborator seams.
///
/// Each call is an independent request; the analyzer holds no per-request
/// state and the catalog is read-only, so one instance can serve many
/// concurrent requests without synchronization.
pub struct Analyzer<X, T, S, E> {
    pub extractor: X,
    pub transcriber: T,
    pub sentiment: S,
    pub emotion: E,
    pub catalog: Catalog,
}

impl<X, T, S, E> Analyzer<X, T, S, E>
where
    S: SentimentClassifier,
    E: EmotionClassifier,
{
    /// Text path: classify then infer. Blank input short-circuits to the
    /// fixed default without touching either classifier.
    pub async fn analyze_text(&self, input: &str) -> Result<MoodAssessment, AnalysisError> {
        if input.trim().is_empty() {
            tracing::debug!("blank input, returning default assessment");
            return Ok(text::default_assessment());
        }

        let (sentiment, emotions) = tokio::try_join!(
            self.sentiment.classify(input.to_owned()),
            self.emotion.classify(input.to_owned()),
        )?;

        Ok(text::infer(input, &sentiment, &emotions))
    }

    /// Voice path over already-extracted features. When a transcript is
    /// available the text assessment is fused in and stays authoritative for
    /// the categorical fields; otherwise the voice signal stands alone.
    pub async fn analyze_voice(
        &self,
        features: FeatureVector,
        transcript: Option<&str>,
    ) -> Result<VoiceAnalysis, AnalysisError> {
        let voice = voice::infer(&features)?;

        let fused = match transcript {
            Some(spoken) => {
                let text_assessment = self.analyze_text(spoken).await?;
                fuse::fuse(FusionInput::Both {
                    text: text_assessment,
                    voice,
                })
            }
            None => fuse::fuse(FusionInput::VoiceOnly(voice)),
        };

        let game_recommendations =
            recommend::select_games(&self.catalog, fused.mood, fused.energy);

        tracing::info!(
            mood = fused.mood.as_str(),
            energy = fused.energy,
            games = game_recommendations.len(),
            "voice analysis complete"
        );

        Ok(VoiceAnalysis {
            assessment: fused,
            transcript: transcript.map(str::to_owned),
            game_recommendations,
        })
    }

    /// Content suggestions for an assessment, with mood normalization
    /// applied before lookup.
    pub fn recommendations(
        &self,
        mood_label: &str,
        energy: u8,
        detected_emotions: &[String],
    ) -> Vec<Recommendation> {
        recommend::select(&self.catalog, mood_label, energy, detected_emotions)
    }
}

impl<X, T, S, E> Analyzer<X, T, S, E>
where
    X: FeatureExtractor,
    T: Transcriber,
    S: SentimentClassifier,
    E: EmotionClassifier,
{
    /// Full voice path from a decoded waveform: extract, transcribe, infer,
    /// fuse.
    pub async fn analyze_audio(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<VoiceAnalysis, AnalysisError> {
        let features = self.extractor.extract(samples.to_vec(), sample_rate).await?;
        let transcript = self
            .transcriber
            .transcribe(samples.to_vec(), sample_rate)
            .await?;
        self.analyze_voice(features, Some(&transcript.text)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{
        EmotionScore, LexiconEmotionClassifier, LexiconSentimentClassifier, SentimentLabel,
        SentimentResult,
    };
    use crate::extract::FixedFeatureExtractor;
    use crate::mood::Mood;
    use crate::transcribe::FixedTranscriber;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    /// Classifier doubles with canned outputs, and a failing pair for the
    /// error path.
    struct CannedSentiment(Result<SentimentResult, ()>);

    impl SentimentClassifier for CannedSentiment {
        fn classify(
            &self,
            _text: String,
        ) -> BoxFuture<'_, Result<SentimentResult, ClassifyError>> {
            let out = self.0.clone();
            async move {
                out.map_err(|_| ClassifyError::InvalidResponse("canned failure".to_owned()))
            }
            .boxed()
        }
    }

    struct CannedEmotions(Vec<EmotionScore>);

    impl EmotionClassifier for CannedEmotions {
        fn classify(
            &self,
            _text: String,
        ) -> BoxFuture<'_, Result<Vec<EmotionScore>, ClassifyError>> {
            let out = self.0.clone();
            async move { Ok(out) }.boxed()
        }
    }

    fn emotions(labels: &[&str]) -> Vec<EmotionScore> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| EmotionScore {
                label: (*label).to_owned(),
                score: 1.0 - i as f32 * 0.1,
            })
            .collect()
    }

    fn analyzer(
        sentiment: CannedSentiment,
        emotion: CannedEmotions,
        features: FeatureVector,
        transcript: &str,
    ) -> Analyzer<FixedFeatureExtractor, FixedTranscriber, CannedSentiment, CannedEmotions> {
        Analyzer {
            extractor: FixedFeatureExtractor::new(features),
            transcriber: FixedTranscriber::new(transcript),
            sentiment,
            emotion,
            catalog: Catalog::builtin(),
        }
    }

    fn loud_fast_features() -> FeatureVector {
        FeatureVector {
            rms_mean: 0.2,
            zcr_mean: 0.05,
            tempo: 140.0,
            centroid_mean: 1500.0,
            ..FeatureVector::default()
        }
    }

    #[tokio::test]
    async fn blank_text_never_touches_the_classifiers() {
        // A failing sentiment double proves the short circuit.
        let analyzer = analyzer(
            CannedSentiment(Err(())),
            CannedEmotions(Vec::new()),
            FeatureVector::default(),
            "",
        );
        let out = analyzer.analyze_text("   ").await.expect("default");
        assert_eq!(out, text::default_assessment());
    }

    #[tokio::test]
    async fn classifier_failure_aborts_the_request() {
        let analyzer = analyzer(
            CannedSentiment(Err(())),
            CannedEmotions(Vec::new()),
            FeatureVector::default(),
            "",
        );
        let err = analyzer.analyze_text("hello there").await.unwrap_err();
        assert!(matches!(err, AnalysisError::ClassifierUnavailable(_)));
    }

    #[tokio::test]
    async fn text_path_runs_classifiers_and_infers() {
        let analyzer = analyzer(
            CannedSentiment(Ok(SentimentResult {
                label: SentimentLabel::Positive,
                score: 0.9,
            })),
            CannedEmotions(emotions(&["joy", "optimism"])),
            FeatureVector::default(),
            "",
        );
        let out = analyzer.analyze_text("what a day").await.expect("ok");
        assert_eq!(out.mood, Mood::Happy);
        assert_eq!(out.emotional_state, "joy");
    }

    #[tokio::test]
    async fn voice_with_transcript_fuses_text_as_authority() {
        let analyzer = analyzer(
            CannedSentiment(Ok(SentimentResult {
                label: SentimentLabel::Negative,
                score: 0.9,
            })),
            CannedEmotions(emotions(&["sadness"])),
            loud_fast_features(),
            "",
        );
        // Voice says happy (excited); text says sad and wins the category.
        let out = analyzer
            .analyze_voice(loud_fast_features(), Some("everything went wrong"))
            .await
            .expect("ok");
        assert_eq!(out.assessment.mood, Mood::Sad);
        // Text energy 3 (sadness), voice energy 10: floor(13 / 2) = 6.
        assert_eq!(out.assessment.energy, 6);
        assert!(!out.game_recommendations.is_empty());
    }

    #[tokio::test]
    async fn voice_without_transcript_stands_alone() {
        let analyzer = analyzer(
            CannedSentiment(Err(())),
            CannedEmotions(Vec::new()),
            loud_fast_features(),
            "",
        );
        let out = analyzer
            .analyze_voice(loud_fast_features(), None)
            .await
            .expect("ok");
        assert_eq!(out.assessment.mood, Mood::Happy);
        assert_eq!(out.assessment.sentiment_score, None);
        assert!(out.assessment.detected_emotions.is_empty());
        assert_eq!(out.transcript, None);
    }

    #[tokio::test]
    async fn invalid_features_fail_before_any_classifier_call() {
        let analyzer = analyzer(
            CannedSentiment(Err(())),
            CannedEmotions(Vec::new()),
            FeatureVector::default(),
            "",
        );
        let bad = FeatureVector {
            centroid_mean: f32::NAN,
            ..FeatureVector::default()
        };
        let err = analyzer.analyze_voice(bad, Some("text")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidFeatureVector(_)));
    }

    #[tokio::test]
    async fn audio_path_extracts_transcribes_and_fuses() {
        let analyzer = Analyzer {
            extractor: FixedFeatureExtractor::new(loud_fast_features()),
            transcriber: FixedTranscriber::new("a wonderful happy day"),
            sentiment: LexiconSentimentClassifier::new(),
            emotion: LexiconEmotionClassifier::new(),
            catalog: Catalog::builtin(),
        };
        let out = analyzer.analyze_audio(&[0.1, -0.1, 0.2], 16_000).await.expect("ok");
        assert_eq!(out.transcript.as_deref(), Some("a wonderful happy day"));
        assert_eq!(out.assessment.emotional_state, "joy");
    }

    #[tokio::test]
    async fn audio_path_surfaces_unreadable_audio() {
        let analyzer = Analyzer {
            extractor: FixedFeatureExtractor::new(loud_fast_features()),
            transcriber: FixedTranscriber::new(""),
            sentiment: LexiconSentimentClassifier::new(),
            emotion: LexiconEmotionClassifier::new(),
            catalog: Catalog::builtin(),
        };
        let err = analyzer.analyze_audio(&[], 16_000).await.unwrap_err();
        assert!(matches!(err, AnalysisError::UnreadableAudio(_)));
    }

    #[test]
    fn recommendations_delegate_with_normalization() {
        let analyzer = analyzer(
            CannedSentiment(Err(())),
            CannedEmotions(Vec::new()),
            FeatureVector::default(),
            "",
        );
        let recs = analyzer.recommendations("excited", 5, &[]);
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| r.mood == Mood::Happy));
    }
}
