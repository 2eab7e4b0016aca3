use std::fmt;

use crate::api::types::GameStatus;
use crate::bridge::snapshot::{LayoutSnapshot, RoundSummary, SessionSnapshot};
use crate::core::fetch::{CandidateBatch, FetchRequest};
use crate::core::session::{RoundConfig, Session};
use crate::core::timer::RoundTimer;
use crate::input::queue::{Command, CommandQueue};
use crate::layout::config::LayoutConfig;
use crate::layout::engine::LayoutEngine;
use crate::layout::node::LayoutFrame;

/// Why a word-source fetch failed. All failures are recovered locally
/// (placeholder candidates, neutral proximity); none are fatal.
#[derive(Debug)]
pub enum SourceError {
    /// The source could not be reached or answered with an error status.
    Unavailable(String),
    /// The source rejected the word or session.
    InvalidWord(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "word source unavailable: {}", msg),
            SourceError::InvalidWord(word) => write!(f, "word source rejected '{}'", word),
        }
    }
}

impl std::error::Error for SourceError {}

/// The external lexical collaborator: categorized candidates for a word and
/// a similarity signal against the session's target. Consumed, not
/// implemented, by the engine; the web bridge leaves the actual fetching to
/// JavaScript and only routes tagged results back in.
pub trait WordSource {
    fn fetch_candidates(&mut self, word: &str) -> Result<CandidateBatch, SourceError>;
    fn fetch_similarity(&mut self, word: &str, session_id: &str) -> Result<f32, SourceError>;
}

/// Owns one round end to end: the session state machine, the layout engine
/// with its position memory, the round clock, and the command queue. Every
/// mutation recomputes the cached layout frame so the presentation layer
/// always reads a consistent snapshot pair.
pub struct Engine {
    session: Session,
    layout: LayoutEngine,
    timer: RoundTimer,
    commands: CommandQueue,
    frame: LayoutFrame,
}

impl Engine {
    /// Start a round with default layout policy. Returns the engine and the
    /// implicit candidate fetch for the start word.
    pub fn start(round: RoundConfig) -> (Self, FetchRequest) {
        Self::with_layout_config(round, LayoutConfig::default())
    }

    pub fn with_layout_config(round: RoundConfig, config: LayoutConfig) -> (Self, FetchRequest) {
        log::info!(
            "starting round {}: '{}' -> '{}'",
            round.session_id,
            round.start_word,
            round.target_word
        );
        let (session, request) = Session::start(round);
        let mut layout = LayoutEngine::new(config);
        let frame = layout.compute(&session);
        (
            Self {
                session,
                layout,
                timer: RoundTimer::new(),
                commands: CommandQueue::new(),
                frame,
            },
            request,
        )
    }

    // -- Commands --

    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Drain and apply all queued commands. Returns the fetches the accepted
    /// transitions issued, in order; rejected commands issue nothing.
    pub fn process_commands(&mut self) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        for command in self.commands.drain() {
            if let Some(request) = self.handle(command) {
                requests.push(request);
            }
        }
        requests
    }

    /// Apply a single command immediately.
    pub fn handle(&mut self, command: Command) -> Option<FetchRequest> {
        let request = match command {
            Command::Select { word } => self.session.select_word(&word),
            Command::Revert { index, word } => self.session.revert_to(&word, index),
            Command::Quit => {
                self.session.quit();
                None
            }
        };
        self.recompute();
        request
    }

    // -- Fetch results (tagged; stale tags are dropped by the session) --

    pub fn apply_candidates(&mut self, seq: u64, batch: CandidateBatch) -> bool {
        let applied = self.session.apply_candidates(seq, batch);
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn candidates_failed(&mut self, seq: u64) -> bool {
        let applied = self.session.candidates_failed(seq);
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn apply_similarity(&mut self, seq: u64, value: f32) -> bool {
        self.session.apply_similarity(seq, value)
    }

    pub fn similarity_failed(&mut self, seq: u64) -> bool {
        self.session.similarity_failed(seq)
    }

    /// Drive a synchronous word source through one request: fetch candidates
    /// and similarity, mapping failures to their local recoveries.
    pub fn resolve_with<S: WordSource>(&mut self, source: &mut S, request: &FetchRequest) {
        match source.fetch_candidates(&request.word) {
            Ok(batch) => {
                self.apply_candidates(request.seq, batch);
            }
            Err(err) => {
                log::warn!("candidate fetch for '{}' failed: {}", request.word, err);
                self.candidates_failed(request.seq);
            }
        }
        let session_id = self.session.session_id().to_string();
        match source.fetch_similarity(&request.word, &session_id) {
            Ok(value) => {
                self.apply_similarity(request.seq, value);
            }
            Err(err) => {
                log::warn!("similarity fetch for '{}' failed: {}", request.word, err);
                self.similarity_failed(request.seq);
            }
        }
    }

    /// Advance the round clock. The clock only runs while the round is in
    /// progress, so won/quit rounds report the time they actually took.
    pub fn tick(&mut self, dt: f32) {
        if self.session.status() == GameStatus::InProgress {
            self.timer.tick(dt);
        }
    }

    // -- Read-only views --

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frame(&self) -> &LayoutFrame {
        &self.frame
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        self.layout.config()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.seconds()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::of(&self.session, &self.timer)
    }

    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::of(&self.frame)
    }

    /// End-of-round record for the reporting collaborator.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary::of(&self.session, self.timer.seconds())
    }

    fn recompute(&mut self) {
        self.frame = self.layout.compute(&self.session);
    }
}
