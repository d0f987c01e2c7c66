//! Core domain types

use serde::{Deserialize, Serialize};

/// A selectable mood: what the user sees and what the backend receives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodOption {
    /// Display label, may contain Urdu script
    pub label: String,
    /// Canonical lowercase key sent to the guidance endpoint
    pub value: String,
}

impl MoodOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive substring match against the label
    pub fn matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Guidance returned for a mood.
///
/// Decoded as-is from the endpoint: absent fields become empty strings,
/// nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceResult {
    #[serde(default)]
    pub arabic: String,

    #[serde(default)]
    pub urdu: String,

    #[serde(default)]
    pub reference: String,

    #[serde(default)]
    pub explanation: String,

    /// `"verse"` or `"hadith"` when the backend says which it is
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl GuidanceResult {
    /// Human label for the `type` field, if any
    pub fn kind_label(&self) -> Option<&'static str> {
        match self.kind.as_deref()?.to_lowercase().as_str() {
            "verse" => Some("Quran"),
            "hadith" => Some("Hadith"),
            _ => None,
        }
    }

    /// Explanation split on newlines, preserving blank lines
    pub fn explanation_lines(&self) -> impl Iterator<Item = &str> {
        self.explanation.split('\n')
    }
}
