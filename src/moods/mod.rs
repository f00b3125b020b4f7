//! Mood registry.
//!
//! Maps each mood to the persona prompt that governs the model for one
//! exchange, plus the display listing served by `GET /moods`. The registry is
//! built once at start-up and only read afterwards.

pub mod personas;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of moods a chat can be held in.
///
/// Parsing is exact and case-sensitive: `"happy"` is a mood, `"Happy"` is not.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Sad,
    #[default]
    Relaxed,
    Business,
    Tech,
    Happy,
    Funny,
}

impl Mood {
    /// Persona prompt shipped with the binary.
    pub fn builtin_persona(self) -> &'static str {
        match self {
            Mood::Sad => personas::SAD,
            Mood::Relaxed => personas::RELAXED,
            Mood::Business => personas::BUSINESS,
            Mood::Tech => personas::TECH,
            Mood::Happy => personas::HAPPY,
            Mood::Funny => personas::FUNNY,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mood::Sad => "Sad",
            Mood::Relaxed => "Relaxed",
            Mood::Business => "Business",
            Mood::Tech => "Tech",
            Mood::Happy => "Happy",
            Mood::Funny => "Funny",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Sad => "Compassionate and empathetic support",
            Mood::Relaxed => "Calm and peaceful interactions",
            Mood::Business => "Professional and efficient assistance",
            Mood::Tech => "Technical and knowledgeable guidance",
            Mood::Happy => "Enthusiastic and upbeat conversations",
            Mood::Funny => "Witty and humorous interactions",
        }
    }
}

/// One entry of the mood listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodInfo {
    /// Mood identifier (e.g., "happy")
    pub id: String,
    /// Display name (e.g., "Happy")
    pub name: String,
    pub description: String,
}

impl From<Mood> for MoodInfo {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood.to_string(),
            name: mood.display_name().to_string(),
            description: mood.description().to_string(),
        }
    }
}

/// Immutable mood -> persona mapping
#[derive(Debug, Clone)]
pub struct MoodRegistry {
    personas: IndexMap<Mood, String>,
    listing: Vec<MoodInfo>,
    default_mood: Mood,
}

impl MoodRegistry {
    /// Registry holding the built-in persona of every mood, `relaxed` as fallback.
    pub fn new() -> Self {
        let personas: IndexMap<Mood, String> = Mood::iter()
            .map(|mood| (mood, mood.builtin_persona().to_string()))
            .collect();
        let listing = personas.keys().copied().map(MoodInfo::from).collect();

        Self {
            personas,
            listing,
            default_mood: Mood::default(),
        }
    }

    /// Persona prompt for `mood`.
    ///
    /// Never fails: any string that is not a registered mood id resolves to the
    /// default mood's persona.
    pub fn lookup(&self, mood: &str) -> &str {
        let mood = Mood::from_str(mood).unwrap_or(self.default_mood);
        self.persona(mood)
    }

    /// Persona prompt for a typed mood.
    pub fn persona(&self, mood: Mood) -> &str {
        match self.personas.get(&mood) {
            Some(persona) => persona,
            None => &self.personas[&self.default_mood],
        }
    }

    /// Resolves `id` to a registered mood, without fallback.
    pub fn resolve(&self, id: &str) -> Option<Mood> {
        Mood::from_str(id)
            .ok()
            .filter(|mood| self.personas.contains_key(mood))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// The mood listing in its fixed order.
    pub fn list_moods(&self) -> &[MoodInfo] {
        &self.listing
    }
}

impl Default for MoodRegistry {
    fn default() -> Self {
        Self::new()
    }
}
