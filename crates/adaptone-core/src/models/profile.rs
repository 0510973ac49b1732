//! User profile model: tone preference enums, free-form communication style
//! and the per-user interaction counters persisted alongside them.
//!
//! Every tone attribute is a closed enum with a `#[serde(other)]` variant so
//! unrecognized wire values collapse onto a well-defined fallback instead of
//! being matched as free-form strings downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How formal the synthesized reply should read.
///
/// `Balanced` is the default when a profile carries no preference; it has no
/// reply template of its own and routes to the fixed fallback sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Casual,
    Professional,
    Formal,
    #[default]
    #[serde(other)]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enthusiasm {
    Low,
    High,
    #[default]
    #[serde(other)]
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Concise,
    Detailed,
    #[default]
    #[serde(other)]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Friendly,
    Witty,
    Professional,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Humor {
    Punny,
    #[default]
    #[serde(other)]
    None,
}

/// Baseline tone settings stored on a profile. Missing fields deserialize to
/// their defaults, so an empty object is a valid (all-default) preference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TonePreferences {
    pub formality: Formality,
    pub enthusiasm: Enthusiasm,
    pub verbosity: Verbosity,
    pub persona: Persona,
    pub humor: Humor,
}

/// Running counters updated on every persisted interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionHistory {
    pub total_interactions: u64,
    pub successful_tone_matches: u64,
    pub feedback_score: i64,
    pub last_interaction: Option<String>,
}

/// The full per-user profile persisted as one JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub tone_preferences: TonePreferences,
    #[serde(default)]
    pub communication_style: Map<String, Value>,
    #[serde(default)]
    pub interaction_history: InteractionHistory,
}

/// Partial preference payload from `POST /api/profile`. A supplied sub-map
/// replaces the stored one wholesale; an absent sub-map leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesUpdate {
    pub tone_preferences: Option<TonePreferences>,
    pub communication_style: Option<Map<String, Value>>,
}

impl PreferencesUpdate {
    /// True when the payload carries neither sub-map.
    pub fn is_empty(&self) -> bool {
        self.tone_preferences.is_none() && self.communication_style.is_none()
    }
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, preferences: PreferencesUpdate) -> Self {
        Self {
            user_id: user_id.into(),
            tone_preferences: preferences.tone_preferences.unwrap_or_default(),
            communication_style: preferences.communication_style.unwrap_or_default(),
            interaction_history: InteractionHistory::default(),
        }
    }

    /// Merge a partial update into this profile (no deep per-field merge).
    pub fn apply_preferences(&mut self, preferences: PreferencesUpdate) {
        if let Some(tone) = preferences.tone_preferences {
            self.tone_preferences = tone;
        }
        if let Some(style) = preferences.communication_style {
            self.communication_style = style;
        }
    }

    /// Declared technical level from the communication style map.
    pub fn technical_level(&self) -> &str {
        self.communication_style
            .get("technical_level")
            .and_then(Value::as_str)
            .unwrap_or("intermediate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: TonePreferences = serde_json::from_value(json!({})).unwrap();
        assert_eq!(prefs.formality, Formality::Balanced);
        assert_eq!(prefs.enthusiasm, Enthusiasm::Medium);
        assert_eq!(prefs.verbosity, Verbosity::Balanced);
        assert_eq!(prefs.persona, Persona::Neutral);
        assert_eq!(prefs.humor, Humor::None);
    }

    #[test]
    fn test_unrecognized_values_collapse_to_fallback() {
        let prefs: TonePreferences = serde_json::from_value(json!({
            "formality": "sarcastic",
            "humor": "slapstick"
        }))
        .unwrap();
        assert_eq!(prefs.formality, Formality::Balanced);
        assert_eq!(prefs.humor, Humor::None);
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        let prefs = TonePreferences {
            formality: Formality::Formal,
            enthusiasm: Enthusiasm::High,
            verbosity: Verbosity::Detailed,
            persona: Persona::Witty,
            humor: Humor::Punny,
        };
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            value,
            json!({
                "formality": "formal",
                "enthusiasm": "high",
                "verbosity": "detailed",
                "persona": "witty",
                "humor": "punny"
            })
        );
    }

    #[test]
    fn test_partial_update_retains_other_submap() {
        let mut style = Map::new();
        style.insert("technical_level".into(), json!("expert"));
        let mut profile = UserProfile::new(
            "alex",
            PreferencesUpdate {
                tone_preferences: Some(TonePreferences {
                    formality: Formality::Casual,
                    ..TonePreferences::default()
                }),
                communication_style: Some(style),
            },
        );

        // Only tone supplied: communication style must survive.
        profile.apply_preferences(PreferencesUpdate {
            tone_preferences: Some(TonePreferences {
                formality: Formality::Formal,
                ..TonePreferences::default()
            }),
            communication_style: None,
        });
        assert_eq!(profile.tone_preferences.formality, Formality::Formal);
        assert_eq!(profile.technical_level(), "expert");

        // Only style supplied: tone must survive.
        let mut style = Map::new();
        style.insert("technical_level".into(), json!("beginner"));
        profile.apply_preferences(PreferencesUpdate {
            tone_preferences: None,
            communication_style: Some(style),
        });
        assert_eq!(profile.tone_preferences.formality, Formality::Formal);
        assert_eq!(profile.technical_level(), "beginner");
    }

    #[test]
    fn test_technical_level_defaults_to_intermediate() {
        let profile = UserProfile::new("alex", PreferencesUpdate::default());
        assert_eq!(profile.technical_level(), "intermediate");
    }
}
