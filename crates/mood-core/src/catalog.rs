//! The fixed mood catalog offered in the picker.
//!
//! Urdu-labelled moods come first, then the English ones. Filtering keeps
//! catalog order.

use crate::types::MoodOption;

/// Urdu moods as `(label, value)` pairs
pub const URDU_MOODS: &[(&str, &str)] = &[
    ("دُکھی (Dukhi - Sad)", "dukhi"),
    ("پریشان (Pareshan - Worried)", "pareshan"),
    ("خوش (Khush - Happy)", "khush"),
    ("گصہ (Gussa - Angry)", "gussa"),
    ("ڈر (Dar - Fear)", "dar"),
    ("امید (Umeed - Hope)", "umeed"),
    ("تنہا (Tanha - Lonely)", "tanha"),
    ("بے چین (Be-chain - Restless)", "be-chain"),
    ("شکر گزار (Shukar Guzaar - Grateful)", "shukar-guzaar"),
    ("مایوس (Mayoos - Hopeless)", "mayoos"),
];

/// English moods; the value is the lowercased label
pub const ENGLISH_MOODS: &[&str] = &[
    "Sad",
    "Worried",
    "Happy",
    "Angry",
    "Fearful",
    "Hopeful",
    "Lonely",
    "Anxious",
    "Grateful",
    "Hopeless",
    "Confused",
    "Peaceful",
    "Stressed",
    "Content",
    "Depressed",
];

/// Merged, ordered set of every selectable mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCatalog {
    options: Vec<MoodOption>,
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodCatalog {
    pub fn new() -> Self {
        let urdu = URDU_MOODS
            .iter()
            .map(|(label, value)| MoodOption::new(*label, *value));
        let english = ENGLISH_MOODS
            .iter()
            .map(|label| MoodOption::new(*label, label.to_lowercase()));

        Self {
            options: urdu.chain(english).collect(),
        }
    }

    pub fn options(&self) -> &[MoodOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options whose label contains `query`, case-insensitively.
    ///
    /// An empty query returns the whole catalog.
    pub fn filter(&self, query: &str) -> Vec<&MoodOption> {
        self.options.iter().filter(|opt| opt.matches(query)).collect()
    }

    pub fn find_by_value(&self, value: &str) -> Option<&MoodOption> {
        self.options.iter().find(|opt| opt.value == value)
    }
}
