use crate::extract::{FeatureError, FeatureVector};
use crate::mood::{clamp_energy, Mood};
use serde::{Deserialize, Serialize};

/// Output of the voice-signal inferencer: a free-form emotional state, a
/// 1..=10 energy estimate and the mapped closed-set mood.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VoiceAssessment {
    pub emotional_state: String,
    pub energy: u8,
    pub mood: Mood,
}

/// Maps audio summary statistics to an emotional state via a fixed threshold
/// cascade. First match wins; the branch order is part of the contract.
///
/// Pure function; the only failure mode is a malformed feature vector.
pub fn infer(features: &FeatureVector) -> Result<VoiceAssessment, FeatureError> {
    features.validate()?;

    let rms = features.rms_mean;
    let zcr = features.zcr_mean;
    let tempo = features.tempo;
    let centroid = features.centroid_mean;

    let energy = clamp_energy((rms * 50.0).round() as i32);

    let emotional_state = if rms > 0.1 && tempo > 120.0 {
        if zcr < 0.1 {
            "excited"
        } else {
            "anxious"
        }
    } else if rms < 0.05 {
        if centroid < 2000.0 {
            "calm"
        } else {
            "sad"
        }
    } else if tempo < 100.0 {
        if rms < 0.08 {
            "tired"
        } else {
            "relaxed"
        }
    } else {
        "neutral"
    };

    let mood = map_state_to_mood(emotional_state);
    tracing::debug!(emotional_state, energy, mood = mood.as_str(), "voice inference");

    Ok(VoiceAssessment {
        emotional_state: emotional_state.to_owned(),
        energy,
        mood,
    })
}

/// Fixed emotional-state to mood table; anything unmapped lands on neutral.
fn map_state_to_mood(state: &str) -> Mood {
    match state {
        "excited" => Mood::Happy,
        "anxious" => Mood::Anxious,
        "calm" => Mood::Neutral,
        "sad" => Mood::Sad,
        "tired" => Mood::Tired,
        "relaxed" => Mood::Neutral,
        _ => Mood::Neutral,
    }
}
