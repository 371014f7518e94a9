//! Curated recommendation content. This is configuration data, not decision
//! logic: the selector only ever reads it.

use crate::mood::Mood;
use crate::recommend::{EnergyRequired, GameRecommendation, RecommendationKind};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

fn entry(title: &str, description: &str, link: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        title: title.to_owned(),
        description: description.to_owned(),
        link: link.map(str::to_owned),
    }
}

/// Per-mood curated lists, one per content kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoodShelf {
    pub music: Vec<CatalogEntry>,
    pub video: Vec<CatalogEntry>,
    pub activity: Vec<CatalogEntry>,
    pub journal: Vec<CatalogEntry>,
}

impl MoodShelf {
    pub fn for_kind(&self, kind: RecommendationKind) -> &[CatalogEntry] {
        match kind {
            RecommendationKind::Music => &self.music,
            RecommendationKind::Video => &self.video,
            RecommendationKind::Activity => &self.activity,
            RecommendationKind::Journal => &self.journal,
        }
    }
}

/// Read-only process-wide recommendation content, injected into the selector
/// at call time. Safe to share across concurrent requests without locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    shelves: BTreeMap<Mood, MoodShelf>,
    games: Vec<GameRecommendation>,
    game_ids: BTreeMap<Mood, Vec<&'static str>>,
}

impl Catalog {
    pub fn shelf(&self, mood: Mood) -> Option<&MoodShelf> {
        self.shelves.get(&mood)
    }

    pub fn games(&self) -> &[GameRecommendation] {
        &self.games
    }

    /// Game ids curated for a mood, in catalog order.
    pub fn game_ids_for(&self, mood: Mood) -> Option<&[&'static str]> {
        self.game_ids.get(&mood).map(Vec::as_slice)
    }

    /// The built-in curated content: two entries per kind for each of the
    /// seven moods, plus the three-game activity catalog.
    pub fn builtin() -> Self {
        let mut shelves = BTreeMap::new();

        shelves.insert(Mood::Happy, MoodShelf {
            music: vec![
                entry(
                    "Happy Upbeat Playlist",
                    "Energetic songs to match your positive mood",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX3rxVfibe1L0"),
                ),
                entry(
                    "Feel-Good Classics",
                    "Timeless songs that will keep your good mood going",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX9XIFQuFvzM4"),
                ),
            ],
            video: vec![
                entry(
                    "Funny Animal Compilations",
                    "Cute and funny animal videos to keep you smiling",
                    Some("https://www.youtube.com/results?search_query=funny+animal+compilation"),
                ),
                entry(
                    "Comedy Specials",
                    "Laugh out loud with these stand-up comedy shows",
                    Some("https://www.youtube.com/results?search_query=best+comedy+specials"),
                ),
            ],
            activity: vec![
                entry(
                    "Creative Expression",
                    "Channel your positive energy into a creative project like painting or crafting",
                    None,
                ),
                entry(
                    "Social Connection",
                    "Share your good mood with friends or family - plan a get-together",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Gratitude Reflection",
                    "Write down three things you're grateful for today",
                    None,
                ),
                entry(
                    "Positive Moments",
                    "Document what made you happy today so you can revisit these moments later",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Sad, MoodShelf {
            music: vec![
                entry(
                    "Calm & Comforting Playlist",
                    "Soothing music to help process your emotions",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX3Ogo9pFvBkY"),
                ),
                entry(
                    "Uplifting Melodies",
                    "Gently uplifting songs to improve your mood",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX9tPFwDMOaN1"),
                ),
            ],
            video: vec![
                entry(
                    "Heartwarming Stories",
                    "Videos that restore faith in humanity",
                    Some("https://www.youtube.com/results?search_query=heartwarming+stories+that+restore+faith+in+humanity"),
                ),
                entry(
                    "Relaxing Nature Documentaries",
                    "Immerse yourself in the beauty of nature",
                    Some("https://www.youtube.com/results?search_query=beautiful+nature+documentary"),
                ),
            ],
            activity: vec![
                entry(
                    "Gentle Movement",
                    "A short, gentle walk outdoors to get fresh air and shift your perspective",
                    None,
                ),
                entry(
                    "Self-Care Ritual",
                    "Take a warm bath or shower, make some tea, and wrap yourself in a cozy blanket",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Emotional Release",
                    "Write freely about what you're feeling without judgment",
                    None,
                ),
                entry(
                    "Self-Compassion Letter",
                    "Write to yourself with the same kindness you'd offer a good friend",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Anxious, MoodShelf {
            music: vec![
                entry(
                    "Calm Meditation Music",
                    "Peaceful sounds to help reduce anxiety",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX3Ogo9pFvBkY"),
                ),
                entry(
                    "Ambient Soundscapes",
                    "Ambient music to help you focus and calm your mind",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX3Ogo9pFvBkY"),
                ),
            ],
            video: vec![
                entry(
                    "Guided Breathing Exercises",
                    "Follow along with these calming breathing techniques",
                    Some("https://www.youtube.com/results?search_query=guided+breathing+exercises+for+anxiety"),
                ),
                entry(
                    "Gentle Yoga for Anxiety",
                    "Simple yoga poses to release tension",
                    Some("https://www.youtube.com/results?search_query=gentle+yoga+for+anxiety+relief"),
                ),
            ],
            activity: vec![
                entry(
                    "5-4-3-2-1 Grounding Exercise",
                    "Name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste",
                    None,
                ),
                entry(
                    "Progressive Muscle Relaxation",
                    "Tense and then release each muscle group in your body to release physical tension",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Worry Dump",
                    "Write down all your worries to get them out of your head",
                    None,
                ),
                entry(
                    "Evidence Challenging",
                    "List your anxious thoughts and then write evidence for and against them",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Angry, MoodShelf {
            music: vec![
                entry(
                    "Calming Classical",
                    "Soothing classical pieces to help you cool down",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DWWEJlAGA9gs0"),
                ),
                entry(
                    "Release Playlist",
                    "Music to help process and release anger",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX3YSRoSdA634"),
                ),
            ],
            video: vec![
                entry(
                    "Guided Anger Meditation",
                    "Meditation specifically designed to help with anger",
                    Some("https://www.youtube.com/results?search_query=guided+meditation+for+anger"),
                ),
                entry(
                    "Nature Time-lapses",
                    "Beautiful, slow-moving nature videos to shift your focus",
                    Some("https://www.youtube.com/results?search_query=beautiful+nature+time+lapse"),
                ),
            ],
            activity: vec![
                entry(
                    "Physical Release",
                    "Go for a run, hit a pillow, or do jumping jacks to release the physical energy of anger",
                    None,
                ),
                entry(
                    "Cool Down Strategy",
                    "Place a cool washcloth on your face or neck, or hold an ice cube - the cold sensation can help reset your nervous system",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Anger Letter (Don't Send)",
                    "Write an uncensored letter expressing your feelings, but don't send it",
                    None,
                ),
                entry(
                    "Needs Identification",
                    "What need isn't being met? Write about what you really need in this situation",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Neutral, MoodShelf {
            music: vec![
                entry(
                    "Discover Weekly",
                    "Explore new music tailored to your taste",
                    Some("https://open.spotify.com/playlist/37i9dQZEVXcQ9Aow7qH0GW"),
                ),
                entry(
                    "Focus Playlist",
                    "Background music to help you focus on tasks",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX8NTLI2TtZa6"),
                ),
            ],
            video: vec![
                entry(
                    "Fascinating Documentaries",
                    "Learn something new and interesting",
                    Some("https://www.youtube.com/results?search_query=best+short+documentaries"),
                ),
                entry(
                    "TED Talks",
                    "Inspiring talks on various topics",
                    Some("https://www.youtube.com/c/TED/videos"),
                ),
            ],
            activity: vec![
                entry(
                    "Skill Building",
                    "Use this neutral state to learn something new or practice a skill",
                    None,
                ),
                entry(
                    "Mindful Activity",
                    "Do a routine activity (like washing dishes) but with complete focus and attention to the sensory experience",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Goal Setting",
                    "Use this balanced state to think about your goals and what steps you can take toward them",
                    None,
                ),
                entry(
                    "Reflection Questions",
                    "What's been on your mind lately? What are you looking forward to?",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Tired, MoodShelf {
            music: vec![
                entry(
                    "Gentle Wake-Up Playlist",
                    "Soft, gradually energizing music",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX1n9whBbBKoL"),
                ),
                entry(
                    "Low-Fi Beats",
                    "Relaxing background music that won't overstimulate",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DWWQRwui0ExPn"),
                ),
            ],
            video: vec![
                entry(
                    "Gentle Morning Yoga",
                    "Easy stretches to wake up your body",
                    Some("https://www.youtube.com/results?search_query=gentle+morning+yoga"),
                ),
                entry(
                    "Motivational Short Videos",
                    "Brief inspiration to get you going",
                    Some("https://www.youtube.com/results?search_query=short+motivational+videos"),
                ),
            ],
            activity: vec![
                entry(
                    "Nature Reset",
                    "Spend 10 minutes outside in natural light to help reset your circadian rhythm",
                    None,
                ),
                entry(
                    "Micro-Exercise",
                    "Do just 5 minutes of movement - often that's enough to boost your energy",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Energy Audit",
                    "What's draining your energy lately? What gives you energy?",
                    None,
                ),
                entry(
                    "Rest Reflection",
                    "Are you getting enough quality rest? What could help improve your sleep?",
                    None,
                ),
            ],
        });

        shelves.insert(Mood::Energetic, MoodShelf {
            music: vec![
                entry(
                    "Workout Beats",
                    "High-energy music for maximum motivation",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX76Wlfdnj7AP"),
                ),
                entry(
                    "Dance Party Mix",
                    "Upbeat songs to match your energy",
                    Some("https://open.spotify.com/playlist/37i9dQZF1DX0BcQWzuB7ZO"),
                ),
            ],
            video: vec![
                entry(
                    "Dance Workouts",
                    "Fun dance routines to channel your energy",
                    Some("https://www.youtube.com/results?search_query=fun+dance+workout"),
                ),
                entry(
                    "DIY Project Tutorials",
                    "Productive ways to use your high energy",
                    Some("https://www.youtube.com/results?search_query=quick+DIY+projects"),
                ),
            ],
            activity: vec![
                entry(
                    "Creative Project",
                    "Start that project you've been thinking about - your energy will help you make progress",
                    None,
                ),
                entry(
                    "High Intensity Exercise",
                    "Channel your energy into a workout that will leave you feeling accomplished",
                    None,
                ),
            ],
            journal: vec![
                entry(
                    "Inspiration Capture",
                    "Write down all the ideas coming to you while your energy is high",
                    None,
                ),
                entry(
                    "Achievement Planning",
                    "What could you accomplish today with this energy? Make an action plan",
                    None,
                ),
            ],
        });

        let games = vec![
            GameRecommendation {
                id: "breathing".to_owned(),
                name: "Breathing Exercise".to_owned(),
                description: "A guided breathing exercise to help reduce stress and anxiety."
                    .to_owned(),
                suitable_for: vec![
                    "anxious".to_owned(),
                    "stressed".to_owned(),
                    "sad".to_owned(),
                    "angry".to_owned(),
                ],
                energy_required: EnergyRequired::Low,
            },
            GameRecommendation {
                id: "memory".to_owned(),
                name: "Memory Match".to_owned(),
                description:
                    "A fun memory matching game to help focus your mind on a pleasant task."
                        .to_owned(),
                suitable_for: vec![
                    "neutral".to_owned(),
                    "sad".to_owned(),
                    "bored".to_owned(),
                    "tired".to_owned(),
                ],
                energy_required: EnergyRequired::Medium,
            },
            GameRecommendation {
                id: "color-relax".to_owned(),
                name: "Color Relaxation".to_owned(),
                description: "A color-based relaxation exercise to calm your mind.".to_owned(),
                suitable_for: vec![
                    "anxious".to_owned(),
                    "angry".to_owned(),
                    "stressed".to_owned(),
                    "energetic".to_owned(),
                ],
                energy_required: EnergyRequired::Low,
            },
        ];

        let game_ids = BTreeMap::from([
            (Mood::Happy, vec!["memory", "color-relax"]),
            (Mood::Sad, vec!["breathing", "memory"]),
            (Mood::Anxious, vec!["breathing", "color-relax"]),
            (Mood::Angry, vec!["breathing", "color-relax"]),
            (Mood::Neutral, vec!["memory", "color-relax"]),
            (Mood::Tired, vec!["breathing"]),
            (Mood::Energetic, vec!["memory", "color-relax"]),
        ]);

        Self {
            shelves,
            games,
            game_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_a_full_shelf() {
        let catalog = Catalog::builtin();
        for mood in Mood::ALL {
            let shelf = catalog.shelf(mood).expect("shelf for every mood");
            for kind in RecommendationKind::ALL {
                assert!(
                    shelf.for_kind(kind).len() >= 2,
                    "{:?}/{:?} needs at least two entries",
                    mood,
                    kind
                );
            }
        }
    }

    #[test]
    fn every_mood_has_curated_games() {
        let catalog = Catalog::builtin();
        let known: Vec<&str> = catalog.games().iter().map(|g| g.id.as_str()).collect();
        for mood in Mood::ALL {
            let ids = catalog.game_ids_for(mood).expect("games for every mood");
            assert!(!ids.is_empty());
            for id in ids {
                assert!(known.contains(id), "unknown game id {id}");
            }
        }
    }
}
