//! JSON contract with the presentation layer.
//! Field names mirror the TypeScript client state (`currentWord`,
//! `isLoading`, ...), so the front end consumes snapshots directly.

use serde::Serialize;

use crate::api::types::{Candidate, Category, GameStatus};
use crate::core::session::Session;
use crate::core::timer::RoundTimer;
use crate::layout::node::{EdgeKind, LayoutFrame, NodeRole};

/// Read-only view of the session after a transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub player_name: String,
    pub path: Vec<String>,
    pub current_word: String,
    pub target_word: String,
    pub candidates: Vec<Candidate>,
    /// Canonical 0.0..=1.0 scale; presentation shows `round(p * 100)`%.
    pub proximity: f32,
    pub move_count: u32,
    pub status: GameStatus,
    pub is_loading: bool,
    pub elapsed_seconds: u32,
    /// Clock display, `m:ss`.
    pub elapsed_display: String,
}

impl SessionSnapshot {
    pub fn of(session: &Session, timer: &RoundTimer) -> Self {
        Self {
            session_id: session.session_id().to_string(),
            player_name: session.player_name().to_string(),
            path: session.path().to_vec(),
            current_word: session.current_word().to_string(),
            target_word: session.target_word().to_string(),
            candidates: session.candidates().to_vec(),
            proximity: session.proximity(),
            move_count: session.move_count(),
            status: session.status(),
            is_loading: session.is_loading(),
            elapsed_seconds: timer.seconds(),
            elapsed_display: timer.formatted(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One placed node, flattened for the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub word: String,
    pub role: NodeRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// One directed edge, flattened for the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeView {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub active: bool,
}

/// Read-only view of the layout after a recompute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl LayoutSnapshot {
    pub fn of(frame: &LayoutFrame) -> Self {
        Self {
            nodes: frame
                .nodes
                .iter()
                .map(|n| NodeView {
                    id: n.id.clone(),
                    word: n.word.clone(),
                    role: n.role,
                    category: n.category,
                    x: n.position.x,
                    y: n.position.y,
                    definition: n.definition.clone(),
                })
                .collect(),
            edges: frame
                .edges
                .iter()
                .map(|e| EdgeView {
                    id: e.id.clone(),
                    source: e.source.clone(),
                    target: e.target.clone(),
                    kind: e.kind,
                    active: e.active,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// End-of-round record handed to the reporting collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub player_name: String,
    pub path: Vec<String>,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub proximity: f32,
    pub status: GameStatus,
}

impl RoundSummary {
    pub fn of(session: &Session, elapsed_seconds: u32) -> Self {
        Self {
            player_name: session.player_name().to_string(),
            path: session.path().to_vec(),
            move_count: session.move_count(),
            elapsed_seconds,
            proximity: session.proximity(),
            status: session.status(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::CandidateBatch;
    use crate::core::session::RoundConfig;
    use crate::layout::engine::LayoutEngine;

    fn session() -> Session {
        let (mut session, req) = Session::start(RoundConfig {
            session_id: "s-1".to_string(),
            player_name: "ada".to_string(),
            start_word: "happy".to_string(),
            target_word: "sad".to_string(),
        });
        session.apply_candidates(
            req.seq,
            CandidateBatch {
                synonyms: vec!["glad".into()],
                ..Default::default()
            },
        );
        session
    }

    #[test]
    fn session_snapshot_uses_client_field_names() {
        let mut timer = RoundTimer::new();
        timer.tick(125.0);
        let json = SessionSnapshot::of(&session(), &timer).to_json().unwrap();
        assert!(json.contains("\"currentWord\":\"happy\""));
        assert!(json.contains("\"targetWord\":\"sad\""));
        assert!(json.contains("\"isLoading\":false"));
        assert!(json.contains("\"moveCount\":0"));
        assert!(json.contains("\"elapsedSeconds\":125"));
        assert!(json.contains("\"elapsedDisplay\":\"2:05\""));
        assert!(json.contains("\"status\":\"in-progress\""));
    }

    #[test]
    fn layout_snapshot_flattens_positions() {
        let session = session();
        let mut layout = LayoutEngine::default();
        let frame = layout.compute(&session);
        let snapshot = LayoutSnapshot::of(&frame);
        assert_eq!(snapshot.nodes.len(), frame.nodes.len());

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"role\":\"path\""));
        assert!(json.contains("\"role\":\"liveCandidate\""));
        assert!(json.contains("\"x\":"));
        assert!(json.contains("\"kind\":\"candidate\""));
    }

    #[test]
    fn summary_carries_the_reporting_fields() {
        let summary = RoundSummary::of(&session(), 7);
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"playerName\":\"ada\""));
        assert!(json.contains("\"path\":[\"happy\"]"));
        assert!(json.contains("\"elapsedSeconds\":7"));
    }
}
