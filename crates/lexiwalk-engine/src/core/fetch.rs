use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{Candidate, Category};

/// Tag attached to every outbound word-source request.
///
/// The host performs the fetch however it likes (JS `fetch`, a test mock, a
/// synchronous `WordSource`) and hands the result back together with `seq`.
/// The session only applies results whose tag still matches its latest
/// request, so a slow response for an abandoned word is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    /// Monotonically increasing request sequence number.
    pub seq: u64,
    /// The word the candidates and similarity were requested for.
    pub word: String,
}

/// Categorized candidate words for one word, as returned by the word source.
/// All fields are optional on the wire; absent lists default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateBatch {
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
    /// Optional word -> definition lookup. Best-effort; missing entries fall
    /// back to the category's default definition text.
    #[serde(default)]
    pub definitions: HashMap<String, String>,
}

impl CandidateBatch {
    /// Parse a batch from a JSON response body.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.antonyms.is_empty() && self.related.is_empty()
    }

    /// Flatten into candidate entries, synonyms first, preserving list order.
    pub fn into_candidates(self) -> Vec<Candidate> {
        let definitions = self.definitions;
        let mut out = Vec::with_capacity(
            self.synonyms.len() + self.antonyms.len() + self.related.len(),
        );
        for (words, category) in [
            (self.synonyms, Category::Synonym),
            (self.antonyms, Category::Antonym),
            (self.related, Category::Related),
        ] {
            for word in words {
                let definition = definitions
                    .get(&word)
                    .cloned()
                    .unwrap_or_else(|| category.default_definition().to_string());
                out.push(Candidate::new(word, category).with_definition(definition));
            }
        }
        out
    }
}
