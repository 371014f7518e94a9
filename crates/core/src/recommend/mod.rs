mod catalog;

use crate::mood::Mood;
use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, CatalogEntry, MoodShelf};

/// Content kinds, in selection order. The selector emits at most one
/// recommendation per kind, always in this order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Music,
    Video,
    Activity,
    Journal,
}

impl RecommendationKind {
    pub const ALL: [RecommendationKind; 4] = [
        RecommendationKind::Music,
        RecommendationKind::Video,
        RecommendationKind::Activity,
        RecommendationKind::Journal,
    ];
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    /// The normalized mood this entry was selected for.
    pub mood: Mood,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyRequired {
    Low,
    Medium,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameRecommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub suitable_for: Vec<String>,
    pub energy_required: EnergyRequired,
}

/// Normalizes an arbitrary mood label into the closed set.
///
/// Closed-set labels pass through; known synonyms map via a fixed table;
/// anything else falls back on energy: 7 or above reads as energetic,
/// otherwise neutral. Unknown labels are never an error.
pub fn normalize_mood(label: &str, energy: u8) -> Mood {
    if let Some(mood) = Mood::from_label(label) {
        return mood;
    }
    match label {
        "excited" | "joyful" => Mood::Happy,
        "depressed" | "melancholy" => Mood::Sad,
        "stressed" | "worried" | "fearful" => Mood::Anxious,
        "irritated" | "frustrated" => Mood::Angry,
        "fatigued" | "exhausted" => Mood::Tired,
        _ if energy >= 7 => Mood::Energetic,
        _ => Mood::Neutral,
    }
}

/// Picks the first curated entry for each content kind of the normalized
/// mood, in fixed kind order. A kind with no curated entries is omitted,
/// never an error. `detected_emotions` is accepted for interface parity but
/// does not influence selection today.
pub fn select(
    catalog: &Catalog,
    mood_label: &str,
    energy: u8,
    _detected_emotions: &[String],
) -> Vec<Recommendation> {
    let mood = normalize_mood(mood_label, energy);
    let Some(shelf) = catalog.shelf(mood) else {
        return Vec::new();
    };

    let mut recommendations = Vec::with_capacity(RecommendationKind::ALL.len());
    for kind in RecommendationKind::ALL {
        if let Some(entry) = shelf.for_kind(kind).first() {
            recommendations.push(Recommendation {
                kind,
                title: entry.title.clone(),
                description: entry.description.clone(),
                link: entry.link.clone(),
                mood,
            });
        }
    }
    recommendations
}

/// Selects the curated games for an already-normalized mood, ordered by how
/// well their energy requirement matches the caller's energy level. The sort
/// is stable, so ties keep catalog order.
pub fn select_games(catalog: &Catalog, mood: Mood, energy: u8) -> Vec<GameRecommendation> {
    const DEFAULT_GAME_IDS: &[&str] = &["breathing", "color-relax"];

    let ids = catalog.game_ids_for(mood).unwrap_or(DEFAULT_GAME_IDS);
    let mut games: Vec<GameRecommendation> = catalog
        .games()
        .iter()
        .filter(|g| ids.contains(&g.id.as_str()))
        .cloned()
        .collect();

    if energy < 4 {
        games.sort_by_key(|g| match g.energy_required {
            EnergyRequired::Low => 0,
            EnergyRequired::Medium => 1,
        });
    } else {
        games.sort_by_key(|g| match g.energy_required {
            EnergyRequired::Medium => 0,
            EnergyRequired::Low => 1,
        });
    }
    games
}
