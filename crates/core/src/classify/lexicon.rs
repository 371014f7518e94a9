use crate::classify::{
    ClassifyError, EmotionClassifier, EmotionScore, SentimentClassifier, SentimentLabel,
    SentimentResult, EMOTION_TOP_K,
};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::cmp::Ordering;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "glad", "great", "good", "love", "wonderful", "excited", "joy", "amazing",
    "grateful", "calm", "hopeful", "proud",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "awful", "hate", "angry", "scared", "afraid", "tired",
    "worried", "anxious", "lonely", "upset",
];

const EMOTION_WORDS: &[(&str, &[&str])] = &[
    ("joy", &["happy", "glad", "joy", "delighted", "excited", "love"]),
    ("sadness", &["sad", "unhappy", "lonely", "miserable", "crying"]),
    ("anger", &["angry", "mad", "furious", "irritated", "hate"]),
    ("fear", &["scared", "afraid", "fear", "worried", "anxious", "nervous"]),
    ("surprise", &["surprised", "amazing", "wow", "unexpected"]),
    ("optimism", &["hopeful", "optimistic", "better", "improving"]),
];

/// Deterministic keyword-count sentiment fallback for offline runs and tests.
/// With no lexicon hit the score sits at 0.5, which the text inferencer maps
/// into the neutral band.
#[derive(Clone, Debug, Default)]
pub struct LexiconSentimentClassifier;

impl LexiconSentimentClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentClassifier for LexiconSentimentClassifier {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<SentimentResult, ClassifyError>> {
        async move {
            let lower = text.to_lowercase();
            let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
            let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
            let total = positive + negative;

            let (label, score) = if total == 0 {
                (SentimentLabel::Positive, 0.5)
            } else if positive >= negative {
                let lead = (positive - negative) as f32 / total as f32;
                (SentimentLabel::Positive, (0.5 + 0.5 * lead).min(1.0))
            } else {
                let lead = (negative - positive) as f32 / total as f32;
                (SentimentLabel::Negative, (0.5 + 0.5 * lead).min(1.0))
            };

            Ok(SentimentResult { label, score })
        }
        .boxed()
    }
}

/// Deterministic keyword emotion fallback. Scores are hit counts normalized
/// against the total, ranked descending, top-k retained; an utterance with no
/// hits reports a single "neutral" label.
#[derive(Clone, Debug, Default)]
pub struct LexiconEmotionClassifier;

impl LexiconEmotionClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl EmotionClassifier for LexiconEmotionClassifier {
    fn classify(&self, text: String) -> BoxFuture<'_, Result<Vec<EmotionScore>, ClassifyError>> {
        async move {
            let lower = text.to_lowercase();
            let mut hits: Vec<(&str, usize)> = EMOTION_WORDS
                .iter()
                .map(|(label, words)| {
                    (*label, words.iter().filter(|w| lower.contains(*w)).count())
                })
                .filter(|(_, count)| *count > 0)
                .collect();

            if hits.is_empty() {
                return Ok(vec![EmotionScore {
                    label: "neutral".to_owned(),
                    score: 1.0,
                }]);
            }

            let total: usize = hits.iter().map(|(_, count)| count).sum();
            hits.sort_by(|a, b| b.1.cmp(&a.1));
            let mut ranked: Vec<EmotionScore> = hits
                .into_iter()
                .map(|(label, count)| EmotionScore {
                    label: label.to_owned(),
                    score: count as f32 / total as f32,
                })
                .collect();
            ranked.truncate(EMOTION_TOP_K);
            ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            Ok(ranked)
        }
        .boxed()
    }
}
