use serde::{Deserialize, Serialize};

use crate::api::types::{
    is_placeholder, words_match, Candidate, GameStatus, ERROR_LOADING_WORDS, NEUTRAL_PROXIMITY,
    NO_WORDS_FOUND,
};
use crate::core::fetch::{CandidateBatch, FetchRequest};

/// Data a round is started with, produced by the out-of-scope `/start` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    pub session_id: String,
    pub player_name: String,
    pub start_word: String,
    pub target_word: String,
}

/// The authoritative game record for one round.
///
/// Mutated only through the transition operations below. Fetch results are
/// applied through `apply_*` calls tagged with the `FetchRequest` they answer;
/// tags that no longer match the latest request are dropped, which is what
/// keeps a slow response for an abandoned word from overwriting newer state.
#[derive(Debug, Clone)]
pub struct Session {
    session_id: String,
    player_name: String,
    /// Ordered path from start word (index 0) to current word (last).
    /// Invariant: non-empty, no two adjacent entries equal.
    path: Vec<String>,
    target_word: String,
    /// Candidate set for the current word only, replaced wholesale per fetch.
    candidates: Vec<Candidate>,
    /// Similarity of current word to target on the canonical 0.0..=1.0 scale.
    proximity: f32,
    /// Accepted player transitions (selects + reverts), not path length.
    move_count: u32,
    status: GameStatus,
    /// True while the latest candidate fetch is unanswered.
    loading: bool,
    /// Sequence number of the latest issued fetch.
    fetch_seq: u64,
    /// Word the latest fetch was issued for.
    fetch_word: String,
}

impl Session {
    /// Start a new round. Returns the session together with the implicit
    /// candidate fetch for the start word.
    pub fn start(config: RoundConfig) -> (Self, FetchRequest) {
        let RoundConfig {
            session_id,
            player_name,
            start_word,
            target_word,
        } = config;
        let mut session = Self {
            session_id,
            player_name,
            path: vec![start_word.clone()],
            target_word,
            candidates: Vec::new(),
            proximity: NEUTRAL_PROXIMITY,
            move_count: 0,
            status: GameStatus::InProgress,
            loading: false,
            fetch_seq: 0,
            fetch_word: String::new(),
        };
        let request = session.issue_fetch(&start_word);
        (session, request)
    }

    // -- Accessors --

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Always the last path entry; the path is never empty.
    pub fn current_word(&self) -> &str {
        self.path.last().expect("path is never empty")
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn proximity(&self) -> f32 {
        self.proximity
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // -- Transitions --

    /// Player clicked a candidate. Returns the follow-up fetch, or `None`
    /// when the click was rejected or the round was won.
    pub fn select_word(&mut self, word: &str) -> Option<FetchRequest> {
        if self.status != GameStatus::InProgress {
            log::debug!("select '{}' ignored: round is over", word);
            return None;
        }
        if is_placeholder(word) || words_match(word, self.current_word()) {
            return None;
        }

        self.path.push(word.to_string());
        self.move_count += 1;

        if words_match(word, &self.target_word) {
            self.status = GameStatus::Won;
            // No fetch will answer for the target word; don't leave the
            // presentation spinning.
            self.loading = false;
            log::info!("round won in {} moves", self.move_count);
            return None;
        }
        Some(self.issue_fetch(word))
    }

    /// Player clicked a node earlier on the path. Valid only for a strict
    /// prefix position whose word matches; truncates the path, un-wins or
    /// un-quits the round, and refetches candidates for the revert target.
    pub fn revert_to(&mut self, word: &str, index: usize) -> Option<FetchRequest> {
        if index + 1 >= self.path.len() {
            return None;
        }
        if !words_match(&self.path[index], word) {
            return None;
        }

        self.path.truncate(index + 1);
        self.status = GameStatus::InProgress;
        self.move_count += 1;
        let target = self.current_word().to_string();
        Some(self.issue_fetch(&target))
    }

    /// Player abandoned the round. Path and move count are left as-is so the
    /// end-of-round report can still show them.
    pub fn quit(&mut self) {
        self.status = GameStatus::Quit;
        self.loading = false;
    }

    // -- Fetch results --

    /// Apply a candidate response. Returns whether it was applied; stale
    /// responses (tag no longer matches the latest request for the current
    /// word) are dropped.
    pub fn apply_candidates(&mut self, seq: u64, batch: CandidateBatch) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.loading = false;
        let candidates = batch.into_candidates();
        self.candidates = if candidates.is_empty() {
            vec![Candidate::placeholder(NO_WORDS_FOUND)]
        } else {
            candidates
        };
        true
    }

    /// Record a failed candidate fetch: the set collapses to a single inert
    /// error entry, everything else is left untouched so the player can
    /// still revert.
    pub fn candidates_failed(&mut self, seq: u64) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.loading = false;
        self.candidates = vec![Candidate::placeholder(ERROR_LOADING_WORDS)];
        true
    }

    /// Apply a similarity response, clamped to the canonical scale.
    pub fn apply_similarity(&mut self, seq: u64, value: f32) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.proximity = value.clamp(0.0, 1.0);
        true
    }

    /// A failed similarity fetch falls back to the neutral value.
    pub fn similarity_failed(&mut self, seq: u64) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.proximity = NEUTRAL_PROXIMITY;
        true
    }

    fn issue_fetch(&mut self, word: &str) -> FetchRequest {
        self.fetch_seq += 1;
        self.fetch_word = word.to_string();
        self.loading = true;
        FetchRequest {
            seq: self.fetch_seq,
            word: word.to_string(),
        }
    }

    /// Ordering guarantee: a result is applied only if it answers the latest
    /// request *and* that request was for the word that is still current.
    /// The word check matters on its own because a winning move issues no
    /// new request, yet must shadow responses for the previous word.
    fn accepts(&self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            log::debug!(
                "dropping stale fetch result (seq {} != latest {})",
                seq,
                self.fetch_seq
            );
            return false;
        }
        if !words_match(&self.fetch_word, self.current_word()) {
            log::debug!(
                "dropping fetch result for '{}': current word is '{}'",
                self.fetch_word,
                self.current_word()
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Category;

    fn round() -> RoundConfig {
        RoundConfig {
            session_id: "s-1".to_string(),
            player_name: "ada".to_string(),
            start_word: "happy".to_string(),
            target_word: "sad".to_string(),
        }
    }

    fn batch(synonyms: &[&str]) -> CandidateBatch {
        CandidateBatch {
            synonyms: synonyms.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn start_issues_fetch_for_start_word() {
        let (session, request) = Session::start(round());
        assert_eq!(session.path(), ["happy"]);
        assert_eq!(session.current_word(), "happy");
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.proximity(), NEUTRAL_PROXIMITY);
        assert!(session.is_loading());
        assert_eq!(request.word, "happy");
    }

    #[test]
    fn current_word_tracks_path_end() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["sorrowful", "glad"]));

        let req = session.select_word("sorrowful").unwrap();
        assert_eq!(session.current_word(), "sorrowful");
        assert_eq!(session.path(), ["happy", "sorrowful"]);
        assert_eq!(session.move_count(), 1);

        session.apply_candidates(req.seq, batch(&["sad"]));
        session.revert_to("happy", 0).unwrap();
        assert_eq!(session.current_word(), "happy");
        assert_eq!(session.path(), ["happy"]);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn selecting_target_wins_without_fetch() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["SAD"]));

        let request = session.select_word("SAD");
        assert!(request.is_none());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.path(), ["happy", "SAD"]);
        assert_eq!(session.move_count(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn select_rejects_placeholders_and_current_word() {
        let (mut session, req) = Session::start(round());
        session.candidates_failed(req.seq);

        assert!(session.select_word(ERROR_LOADING_WORDS).is_none());
        assert!(session.select_word(NO_WORDS_FOUND).is_none());
        assert!(session.select_word("Happy").is_none());
        assert_eq!(session.path(), ["happy"]);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn select_rejected_after_round_ends() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["sad", "glad"]));
        session.select_word("sad");
        assert_eq!(session.status(), GameStatus::Won);

        assert!(session.select_word("glad").is_none());
        assert_eq!(session.path(), ["happy", "sad"]);
    }

    #[test]
    fn revert_to_last_index_is_rejected() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["sorrowful"]));
        session.select_word("sorrowful");

        assert!(session.revert_to("sorrowful", 1).is_none());
        assert!(session.revert_to("happy", 5).is_none());
        // Word/index mismatch is also a no-op.
        assert!(session.revert_to("sorrowful", 0).is_none());
        assert_eq!(session.path(), ["happy", "sorrowful"]);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn revert_unwins_and_counts_as_move() {
        let (mut session, mut req) = Session::start(round());
        // Five moves total, the fifth landing on the target.
        for word in ["blue", "melancholy", "gloomy", "dismal"] {
            session.apply_candidates(req.seq, batch(&[word]));
            req = session.select_word(word).unwrap();
        }
        session.apply_candidates(req.seq, batch(&["sad"]));
        assert!(session.select_word("sad").is_none());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.move_count(), 5);
        assert_eq!(session.path().len(), 6);

        let request = session.revert_to("blue", 1).unwrap();
        assert_eq!(session.path(), ["happy", "blue"]);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.move_count(), 6);
        assert_eq!(request.word, "blue");
    }

    #[test]
    fn revert_unquits() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["sorrowful"]));
        session.select_word("sorrowful");
        session.quit();
        assert_eq!(session.status(), GameStatus::Quit);

        session.revert_to("happy", 0).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn quit_preserves_path_and_moves() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, batch(&["sorrowful"]));
        session.select_word("sorrowful");

        session.quit();
        assert_eq!(session.status(), GameStatus::Quit);
        assert_eq!(session.path(), ["happy", "sorrowful"]);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn stale_candidate_response_is_dropped() {
        let (mut session, first) = Session::start(round());
        session.apply_candidates(first.seq, batch(&["sorrowful", "glad"]));

        // Move to "sorrowful"; its fetch is outstanding.
        let second = session.select_word("sorrowful").unwrap();
        // A late duplicate of the fetch for "happy" arrives now.
        assert!(!session.apply_candidates(first.seq, batch(&["stale"])));
        assert!(session.is_loading());

        // The in-order response still applies.
        assert!(session.apply_candidates(second.seq, batch(&["sad"])));
        assert_eq!(session.candidates()[0].word, "sad");
        assert!(!session.is_loading());
    }

    #[test]
    fn similarity_after_winning_move_is_dropped() {
        let (mut session, first) = Session::start(round());
        session.apply_candidates(first.seq, batch(&["sorrowful"]));
        let second = session.select_word("sorrowful").unwrap();
        session.apply_candidates(second.seq, batch(&["sad"]));
        assert!(session.apply_similarity(second.seq, 0.8));
        assert_eq!(session.proximity(), 0.8);

        // Winning bumps no sequence number, but the request word no longer
        // matches the current word, so a straggler must not apply.
        session.select_word("sad");
        assert!(!session.apply_similarity(second.seq, 0.1));
        assert_eq!(session.proximity(), 0.8);
    }

    #[test]
    fn failed_fetch_leaves_state_intact() {
        let (mut session, req) = Session::start(round());
        assert!(session.candidates_failed(req.seq));
        assert_eq!(session.candidates().len(), 1);
        assert_eq!(session.candidates()[0].word, ERROR_LOADING_WORDS);
        assert!(session.candidates()[0].is_placeholder());
        assert_eq!(session.path(), ["happy"]);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);

        assert!(session.similarity_failed(req.seq));
        assert_eq!(session.proximity(), NEUTRAL_PROXIMITY);
    }

    #[test]
    fn empty_batch_becomes_placeholder() {
        let (mut session, req) = Session::start(round());
        session.apply_candidates(req.seq, CandidateBatch::default());
        assert_eq!(session.candidates().len(), 1);
        assert_eq!(session.candidates()[0].word, NO_WORDS_FOUND);
    }

    #[test]
    fn similarity_is_clamped() {
        let (mut session, req) = Session::start(round());
        session.apply_similarity(req.seq, 1.7);
        assert_eq!(session.proximity(), 1.0);
        session.apply_similarity(req.seq, -0.3);
        assert_eq!(session.proximity(), 0.0);
    }

    #[test]
    fn categories_survive_into_candidates() {
        let (mut session, req) = Session::start(round());
        let batch = CandidateBatch {
            synonyms: vec!["glad".into()],
            antonyms: vec!["sad".into()],
            related: vec!["smile".into()],
            ..Default::default()
        };
        session.apply_candidates(req.seq, batch);
        let categories: Vec<Category> =
            session.candidates().iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            [Category::Synonym, Category::Antonym, Category::Related]
        );
    }
}
