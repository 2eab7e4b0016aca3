use serde::{Deserialize, Serialize};

/// Relationship category of a candidate word.
/// `Other` is the layout bucket for anything the word source left untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Synonym,
    Antonym,
    Related,
    Other,
}

impl Category {
    /// Fallback definition text when the word source supplies none.
    pub fn default_definition(&self) -> &'static str {
        match self {
            Category::Synonym => "Synonym",
            Category::Antonym => "Antonym",
            Category::Related | Category::Other => "Related word",
        }
    }
}

/// Lifecycle state of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Won,
    Quit,
}

/// Inert placeholder shown when a fetch returned no words.
pub const NO_WORDS_FOUND: &str = "No words found";
/// Inert placeholder shown when a fetch failed.
pub const ERROR_LOADING_WORDS: &str = "Error loading words";

/// Neutral proximity on the canonical 0.0..=1.0 scale.
/// Presentation maps proximity to percent as `round(p * 100)`.
pub const NEUTRAL_PROXIMITY: f32 = 0.5;

/// A word offered as a next move from the current word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub definition: String,
    pub category: Category,
}

impl Candidate {
    pub fn new(word: impl Into<String>, category: Category) -> Self {
        Self {
            word: word.into(),
            definition: category.default_definition().to_string(),
            category,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Build one of the inert sentinel entries.
    pub fn placeholder(text: &str) -> Self {
        Self {
            word: text.to_string(),
            definition: String::new(),
            category: Category::Synonym,
        }
    }

    /// Placeholders are displayed but never selectable or remembered.
    pub fn is_placeholder(&self) -> bool {
        is_placeholder(&self.word)
    }
}

/// Whether a word is one of the inert sentinel entries.
pub fn is_placeholder(word: &str) -> bool {
    word == NO_WORDS_FOUND || word == ERROR_LOADING_WORDS
}

/// Normalized form used for all word identity checks and table keys.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Case-insensitive word equality.
pub fn words_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
