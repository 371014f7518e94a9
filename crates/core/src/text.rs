use crate::classify::{EmotionScore, SentimentLabel, SentimentResult};
use crate::mood::{clamp_energy, clamp_mood_score, Mood, MoodAssessment};

/// Fixed assessment for empty or whitespace-only input. Callers must return
/// this without invoking either classifier.
pub fn default_assessment() -> MoodAssessment {
    MoodAssessment {
        mood: Mood::Neutral,
        score: 5,
        energy: 5,
        sentiment_score: Some(0.0),
        emotional_state: "neutral".to_owned(),
        detected_emotions: vec!["neutral".to_owned()],
    }
}

/// Maps classifier outputs to a mood assessment.
///
/// The sentiment score is signed by label, flattened into a coarse base mood
/// by a five-band cascade, then possibly overridden by detected anger or
/// fear. The middle three bands deliberately collapse to neutral; that
/// flattening is part of the contract, not a redundancy to clean up.
pub fn infer(text: &str, sentiment: &SentimentResult, emotions: &[EmotionScore]) -> MoodAssessment {
    if text.trim().is_empty() {
        return default_assessment();
    }

    let normalized = match sentiment.label {
        SentimentLabel::Positive => sentiment.score,
        SentimentLabel::Negative => -sentiment.score,
    };
    let score = clamp_mood_score(((normalized + 1.0) * 5.0).round() as i32);

    let detected_emotions: Vec<String> = emotions.iter().map(|e| e.label.clone()).collect();

    // First match wins; the two neutral bands are intentionally distinct.
    let base_mood = if normalized > 0.6 {
        Mood::Happy
    } else if normalized > 0.2 {
        Mood::Neutral
    } else if normalized > -0.2 {
        Mood::Neutral
    } else if normalized > -0.6 {
        Mood::Sad
    } else {
        Mood::Sad
    };

    // Anger wins over fear; at most one override applies.
    let mood = if detected_emotions.iter().any(|e| e == "anger") {
        Mood::Angry
    } else if detected_emotions.iter().any(|e| e == "fear") {
        Mood::Anxious
    } else {
        base_mood
    };

    let energy = if detected_emotions.is_empty() {
        5
    } else {
        let sum: i32 = detected_emotions.iter().map(|e| emotion_energy(e)).sum();
        clamp_energy(sum / detected_emotions.len() as i32)
    };

    let emotional_state = detected_emotions
        .first()
        .cloned()
        .unwrap_or_else(|| "neutral".to_owned());

    tracing::debug!(
        mood = mood.as_str(),
        score,
        energy,
        sentiment = normalized,
        "text inference"
    );

    MoodAssessment {
        mood,
        score,
        energy,
        sentiment_score: Some(normalized),
        emotional_state,
        detected_emotions,
    }
}

/// Fixed arousal weight per classifier emotion label; unlisted labels count
/// as a middling 5.
fn emotion_energy(label: &str) -> i32 {
    match label {
        "joy" => 8,
        "optimism" => 7,
        "neutral" => 5,
        "sadness" => 3,
        "anger" => 6,
        "fear" => 4,
        "surprise" => 7,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(label: SentimentLabel, score: f32) -> SentimentResult {
        SentimentResult { label, score }
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

    #[test]
    fn empty_input_yields_exact_default() {
        let expected = MoodAssessment {
            mood: Mood::Neutral,
            score: 5,
            energy: 5,
            sentiment_score: Some(0.0),
            emotional_state: "neutral".to_owned(),
            detected_emotions: vec!["neutral".to_owned()],
        };
        let s = sentiment(SentimentLabel::Positive, 0.9);
        assert_eq!(infer("", &s, &[]), expected);
        assert_eq!(infer("   \t\n", &s, &[]), expected);
    }

    #[test]
    fn strong_positive_sentiment_is_happy() {
        let out = infer("best day ever", &sentiment(SentimentLabel::Positive, 0.95), &[]);
        assert_eq!(out.mood, Mood::Happy);
        assert_eq!(out.sentiment_score, Some(0.95));
        // (0.95 + 1) * 5 = 9.75, rounds to 10
        assert_eq!(out.score, 10);
    }

    #[test]
    fn negative_label_flips_the_score_sign() {
        let out = infer("rough day", &sentiment(SentimentLabel::Negative, 0.9), &[]);
        assert_eq!(out.sentiment_score, Some(-0.9));
        assert_eq!(out.mood, Mood::Sad);
        // (-0.9 + 1) * 5 = 0.5, rounds to 1
        assert_eq!(out.score, 1);
    }

    #[test]
    fn middle_bands_collapse_to_neutral() {
        for value in [0.5, 0.2, 0.0, -0.1] {
            let (label, score) = if value >= 0.0 {
                (SentimentLabel::Positive, value)
            } else {
                (SentimentLabel::Negative, -value)
            };
            let out = infer("some words", &sentiment(label, score), &[]);
            assert_eq!(out.mood, Mood::Neutral, "normalized {value}");
        }
    }

    #[test]
    fn mildly_and_strongly_negative_are_both_sad() {
        let out = infer("not great", &sentiment(SentimentLabel::Negative, 0.4), &[]);
        assert_eq!(out.mood, Mood::Sad);
        let out = infer("everything is wrong", &sentiment(SentimentLabel::Negative, 0.99), &[]);
        assert_eq!(out.mood, Mood::Sad);
    }

    #[test]
    fn anger_overrides_any_sentiment_sign() {
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.99),
            &emotions(&["joy", "anger"]),
        );
        assert_eq!(out.mood, Mood::Angry);
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Negative, 0.99),
            &emotions(&["anger"]),
        );
        assert_eq!(out.mood, Mood::Angry);
    }

    #[test]
    fn fear_overrides_only_without_anger() {
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.9),
            &emotions(&["fear", "surprise"]),
        );
        assert_eq!(out.mood, Mood::Anxious);
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.9),
            &emotions(&["fear", "anger"]),
        );
        assert_eq!(out.mood, Mood::Angry);
    }

    #[test]
    fn energy_is_floored_average_of_the_emotion_table() {
        // joy(8) + fear(4) + sadness(3) = 15, 15 / 3 = 5
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.1),
            &emotions(&["joy", "fear", "sadness"]),
        );
        assert_eq!(out.energy, 5);
        // joy(8) + surprise(7) = 15, floor(15 / 2) = 7
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.1),
            &emotions(&["joy", "surprise"]),
        );
        assert_eq!(out.energy, 7);
        // Unlisted labels count as 5.
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.1),
            &emotions(&["boredom"]),
        );
        assert_eq!(out.energy, 5);
    }

    #[test]
    fn no_detected_emotions_defaults_energy_and_state() {
        let out = infer("words", &sentiment(SentimentLabel::Positive, 0.1), &[]);
        assert_eq!(out.energy, 5);
        assert_eq!(out.emotional_state, "neutral");
        assert!(out.detected_emotions.is_empty());
    }

    #[test]
    fn emotional_state_is_the_top_ranked_emotion() {
        let out = infer(
            "words",
            &sentiment(SentimentLabel::Positive, 0.9),
            &emotions(&["joy", "optimism", "surprise"]),
        );
        assert_eq!(out.emotional_state, "joy");
        assert_eq!(out.detected_emotions, vec!["joy", "optimism", "surprise"]);
    }
}
