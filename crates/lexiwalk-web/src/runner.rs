use lexiwalk_engine::{CandidateBatch, Command, Engine, FetchRequest, RoundConfig};

/// Wires the engine to the browser event flow.
///
/// JavaScript owns the network: it drains the pending fetch list, performs
/// the `/next` and `/similarity` requests, and hands the tagged results back.
/// Stale results are dropped inside the engine, so the bridge stays dumb.
pub struct EngineRunner {
    engine: Engine,
    /// Fetches issued by accepted transitions, awaiting pickup by JS.
    pending: Vec<FetchRequest>,
}

impl EngineRunner {
    pub fn start(round: RoundConfig) -> Self {
        let (engine, first) = Engine::start(round);
        Self {
            engine,
            pending: vec![first],
        }
    }

    /// Advance the round clock by one frame.
    pub fn tick(&mut self, dt: f32) {
        self.engine.tick(dt);
    }

    /// Queue a player command and process the queue immediately.
    pub fn push_command(&mut self, command: Command) {
        self.engine.push_command(command);
        let issued = self.engine.process_commands();
        self.pending.extend(issued);
    }

    /// Drain the fetches JS still has to perform, as a JSON array of
    /// `{seq, word}` tags.
    pub fn take_pending_json(&mut self) -> String {
        let pending = std::mem::take(&mut self.pending);
        serde_json::to_string(&pending).unwrap_or_else(|err| {
            log::error!("failed to serialize pending fetches: {}", err);
            "[]".to_string()
        })
    }

    /// Apply a candidate response body for the request tagged `seq`.
    /// An unparseable body counts as a failed fetch.
    pub fn apply_candidates_json(&mut self, seq: u64, json: &str) -> bool {
        match CandidateBatch::from_json(json) {
            Ok(batch) => self.engine.apply_candidates(seq, batch),
            Err(err) => {
                log::warn!("bad candidate response: {}", err);
                self.engine.candidates_failed(seq)
            }
        }
    }

    pub fn candidates_failed(&mut self, seq: u64) -> bool {
        self.engine.candidates_failed(seq)
    }

    pub fn apply_similarity(&mut self, seq: u64, value: f32) -> bool {
        self.engine.apply_similarity(seq, value)
    }

    pub fn similarity_failed(&mut self, seq: u64) -> bool {
        self.engine.similarity_failed(seq)
    }

    pub fn session_json(&self) -> String {
        self.engine.snapshot().to_json().unwrap_or_else(|err| {
            log::error!("failed to serialize session snapshot: {}", err);
            "{}".to_string()
        })
    }

    pub fn layout_json(&self) -> String {
        self.engine.layout_snapshot().to_json().unwrap_or_else(|err| {
            log::error!("failed to serialize layout snapshot: {}", err);
            "{}".to_string()
        })
    }

    pub fn summary_json(&self) -> String {
        self.engine.summary().to_json().unwrap_or_else(|err| {
            log::error!("failed to serialize round summary: {}", err);
            "{}".to_string()
        })
    }
}
