use crate::mood::MoodAssessment;
use crate::voice::VoiceAssessment;

/// Per-modality inputs to fusion. At least one modality is always present,
/// which the enum encodes directly.
#[derive(Clone, Debug, PartialEq)]
pub enum FusionInput {
    TextOnly(MoodAssessment),
    VoiceOnly(VoiceAssessment),
    Both {
        text: MoodAssessment,
        voice: VoiceAssessment,
    },
}

/// Combines the per-modality assessments into one result.
///
/// Text is authoritative for the categorical fields. Fused energy is the
/// floor integer average of the two energies — deliberately floor division,
/// unlike the rounding used inside each modality. Pure; cannot fail.
pub fn fuse(input: FusionInput) -> MoodAssessment {
    match input {
        FusionInput::TextOnly(text) => text,
        FusionInput::VoiceOnly(voice) => MoodAssessment {
            mood: voice.mood,
            score: 5,
            energy: voice.energy,
            sentiment_score: None,
            emotional_state: voice.emotional_state,
            detected_emotions: Vec::new(),
        },
        FusionInput::Both { text, voice } => MoodAssessment {
            energy: (text.energy + voice.energy) / 2,
            ..text
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    fn text_assessment(energy: u8) -> MoodAssessment {
        MoodAssessment {
            mood: Mood::Happy,
            score: 9,
            energy,
            sentiment_score: Some(0.8),
            emotional_state: "joy".to_owned(),
            detected_emotions: vec!["joy".to_owned(), "optimism".to_owned()],
        }
    }

    fn voice_assessment(energy: u8) -> VoiceAssessment {
        VoiceAssessment {
            emotional_state: "anxious".to_owned(),
            energy,
            mood: Mood::Anxious,
        }
    }

    #[test]
    fn text_is_authoritative_when_both_present() {
        let fused = fuse(FusionInput::Both {
            text: text_assessment(8),
            voice: voice_assessment(5),
        });
        assert_eq!(fused.mood, Mood::Happy);
        assert_eq!(fused.score, 9);
        assert_eq!(fused.sentiment_score, Some(0.8));
        assert_eq!(fused.emotional_state, "joy");
        assert_eq!(fused.detected_emotions, vec!["joy", "optimism"]);
    }

    #[test]
    fn fused_energy_uses_floor_division() {
        // floor((8 + 5) / 2) = 6, not 7
        let fused = fuse(FusionInput::Both {
            text: text_assessment(8),
            voice: voice_assessment(5),
        });
        assert_eq!(fused.energy, 6);
    }

    #[test]
    fn text_only_passes_through_unchanged() {
        let text = text_assessment(7);
        assert_eq!(fuse(FusionInput::TextOnly(text.clone())), text);
    }

    #[test]
    fn voice_only_synthesizes_the_text_fields() {
        let fused = fuse(FusionInput::VoiceOnly(voice_assessment(4)));
        assert_eq!(fused.mood, Mood::Anxious);
        assert_eq!(fused.energy, 4);
        assert_eq!(fused.score, 5);
        assert_eq!(fused.sentiment_score, None);
        assert_eq!(fused.emotional_state, "anxious");
        assert!(fused.detected_emotions.is_empty());
    }
}
