use serde::{Deserialize, Serialize};

/// Closed mood category set used as the recommendation lookup key.
///
/// Every label produced elsewhere in the system (free-form emotional states,
/// classifier emotion labels, caller-supplied strings) is normalized into this
/// set before any catalog lookup. See [`crate::recommend::normalize_mood`].
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Angry,
    Neutral,
    Tired,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Neutral,
        Mood::Tired,
        Mood::Energetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Energetic => "energetic",
        }
    }

    /// Exact closed-set parse. Labels outside the set return `None` and must
    /// go through synonym normalization instead.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "anxious" => Some(Mood::Anxious),
            "angry" => Some(Mood::Angry),
            "neutral" => Some(Mood::Neutral),
            "tired" => Some(Mood::Tired),
            "energetic" => Some(Mood::Energetic),
            _ => None,
        }
    }
}

/// Canonical per-request assessment produced by the text inferencer and the
/// fusion layer. Never persisted; immutable once produced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodAssessment {
    pub mood: Mood,
    /// How positive, 0..=10.
    pub score: u8,
    /// Arousal proxy, 1..=10, independent of valence.
    pub energy: u8,
    /// Signed sentiment in [-1, 1]. Absent on the voice-only path.
    pub sentiment_score: Option<f32>,
    /// Finer-grained free-form label ("excited", "calm", ...), distinct from
    /// `mood` and never used as a lookup key.
    pub emotional_state: String,
    /// Top classifier emotion labels, descending by score.
    pub detected_emotions: Vec<String>,
}

pub(crate) fn clamp_energy(value: i32) -> u8 {
    value.clamp(1, 10) as u8
}

pub(crate) fn clamp_mood_score(value: i32) -> u8 {
    value.clamp(0, 10) as u8
}
