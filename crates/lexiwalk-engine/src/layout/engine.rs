use glam::Vec2;

use crate::api::types::{is_placeholder, normalize, Candidate, Category};
use crate::core::session::Session;
use crate::layout::collision;
use crate::layout::config::LayoutConfig;
use crate::layout::node::{EdgeKind, LayoutEdge, LayoutFrame, LayoutNode, NodeRole};
use crate::layout::sector::{ring_len, ring_of, sector_for, slot_of};

/// Remembered placement for a word. Flat storage with linear lookup; word
/// counts stay in the dozens, and insertion order keeps recomputes
/// deterministic.
#[derive(Debug, Clone)]
struct MemoryEntry {
    /// Normalized word key.
    word: String,
    pos: Vec2,
}

/// Metadata for a word that was a live candidate at some point, so it can be
/// re-shown as a historical node without re-querying the word source.
#[derive(Debug, Clone)]
struct HistoryEntry {
    /// Normalized word key.
    word: String,
    /// Word as first surfaced, for display.
    display: String,
    definition: String,
    category: Category,
}

/// Places every word ever surfaced in the session: path nodes along a
/// horizontal progression, live candidates on category sector rings around
/// the current word, and retired candidates at their remembered spots.
///
/// Owns the position-memory and historical tables exclusively; the session
/// has no visibility into geometry. A position, once assigned, is reused on
/// every later recompute unless a collision forces a nudge.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    positions: Vec<MemoryEntry>,
    history: Vec<HistoryEntry>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            positions: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Recompute the full node/edge set for the session's current state.
    /// Not re-entrant; the single-threaded event model runs one pass at a
    /// time.
    pub fn compute(&mut self, session: &Session) -> LayoutFrame {
        let mut nodes: Vec<LayoutNode> = Vec::new();
        let mut placed: Vec<Vec2> = Vec::new();

        // 1. Path placement: remembered position or the default horizontal
        // progression keyed by path index. A revisited word prefers the spot
        // its earlier occurrence holds, so it gets nudged like any other
        // collision; only the first occurrence writes memory, which keeps
        // the nudge reproducible across recomputes.
        let path_keys: Vec<String> = session.path().iter().map(|w| normalize(w)).collect();
        for (index, word) in session.path().iter().enumerate() {
            let key = &path_keys[index];
            let preferred = self.remembered(key).unwrap_or_else(|| {
                Vec2::new(
                    index as f32 * self.config.path_spacing,
                    self.config.path_y,
                )
            });
            let step_anchor = placed.last().copied().unwrap_or(preferred);
            let pos = collision::resolve(preferred, step_anchor, &placed, &self.config);
            if !path_keys[..index].contains(key) {
                self.remember(key, pos);
            }
            placed.push(pos);
            nodes.push(LayoutNode {
                id: LayoutNode::path_id(word, index),
                word: word.clone(),
                role: NodeRole::Path,
                category: None,
                position: pos,
                definition: None,
            });
        }
        let anchor = *placed.last().expect("path is never empty");
        let current_id = nodes.last().expect("path is never empty").id.clone();

        // 2. Candidate placement, grouped into category sectors. Path role
        // wins when a word is both on the path and suggested again; one node
        // per distinct word.
        let mut live: Vec<&Candidate> = Vec::new();
        let mut live_keys: Vec<String> = Vec::new();
        for candidate in session.candidates() {
            let key = normalize(&candidate.word);
            if path_keys.contains(&key) || live_keys.contains(&key) {
                continue;
            }
            live_keys.push(key);
            live.push(candidate);
        }

        for category in [
            Category::Synonym,
            Category::Antonym,
            Category::Related,
            Category::Other,
        ] {
            let group: Vec<&&Candidate> =
                live.iter().filter(|c| c.category == category).collect();
            let total = group.len();
            if total == 0 {
                continue;
            }
            let sector = sector_for(category);
            let capacity = self.config.ring_capacity;
            for (index, candidate) in group.into_iter().enumerate() {
                let key = normalize(&candidate.word);
                let preferred = self.remembered(&key).unwrap_or_else(|| {
                    let ring = ring_of(index, capacity);
                    let angle =
                        sector.slot_angle(slot_of(index, capacity), ring_len(total, ring, capacity));
                    let radius = self.config.base_radius + ring as f32 * self.config.ring_gap;
                    anchor + Vec2::from_angle(angle) * radius
                });
                let pos = collision::resolve(preferred, anchor, &placed, &self.config);
                placed.push(pos);
                if !candidate.is_placeholder() {
                    self.remember(&key, pos);
                    self.record_history(candidate);
                }
                nodes.push(LayoutNode {
                    id: LayoutNode::word_id(&candidate.word),
                    word: candidate.word.clone(),
                    role: NodeRole::LiveCandidate,
                    category: Some(category),
                    position: pos,
                    definition: Some(candidate.definition.clone()),
                });
            }
        }

        // 3. Historical retention: every remembered candidate that is neither
        // on the path nor live comes back at reduced emphasis, re-resolved
        // against everything placed this pass.
        let retired: Vec<HistoryEntry> = self
            .history
            .iter()
            .filter(|h| !path_keys.contains(&h.word) && !live_keys.contains(&h.word))
            .cloned()
            .collect();
        for entry in retired {
            let preferred = self
                .remembered(&entry.word)
                .expect("historical words always have a remembered position");
            let pos = collision::resolve(preferred, anchor, &placed, &self.config);
            placed.push(pos);
            self.remember(&entry.word, pos);
            nodes.push(LayoutNode {
                id: LayoutNode::word_id(&entry.display),
                word: entry.display.clone(),
                role: NodeRole::Historical,
                category: Some(entry.category),
                position: pos,
                definition: Some(entry.definition.clone()),
            });
        }

        // 4. Edges: consecutive path edges (latest one active), current word
        // to each live candidate, current word to each historical node.
        let mut edges: Vec<LayoutEdge> = Vec::new();
        let path_len = session.path().len();
        for i in 0..path_len.saturating_sub(1) {
            let edge = LayoutEdge::new(
                LayoutNode::path_id(&session.path()[i], i),
                LayoutNode::path_id(&session.path()[i + 1], i + 1),
                EdgeKind::Path,
            );
            edges.push(if i + 2 == path_len { edge.active() } else { edge });
        }
        for node in &nodes {
            match node.role {
                NodeRole::LiveCandidate if !is_placeholder(&node.word) => {
                    edges.push(LayoutEdge::new(
                        current_id.clone(),
                        node.id.clone(),
                        EdgeKind::Candidate,
                    ));
                }
                NodeRole::Historical => {
                    edges.push(LayoutEdge::new(
                        current_id.clone(),
                        node.id.clone(),
                        EdgeKind::Historical,
                    ));
                }
                _ => {}
            }
        }

        log::debug!(
            "layout pass: {} nodes, {} edges, {} remembered",
            nodes.len(),
            edges.len(),
            self.positions.len()
        );
        LayoutFrame { nodes, edges }
    }

    fn remembered(&self, key: &str) -> Option<Vec2> {
        self.positions.iter().find(|e| e.word == key).map(|e| e.pos)
    }

    fn remember(&mut self, key: &str, pos: Vec2) {
        if let Some(entry) = self.positions.iter_mut().find(|e| e.word == key) {
            entry.pos = pos;
        } else {
            self.positions.push(MemoryEntry {
                word: key.to_string(),
                pos,
            });
        }
    }

    fn record_history(&mut self, candidate: &Candidate) {
        let key = normalize(&candidate.word);
        if self.history.iter().any(|h| h.word == key) {
            return;
        }
        self.history.push(HistoryEntry {
            word: key,
            display: candidate.word.clone(),
            definition: candidate.definition.clone(),
            category: candidate.category,
        });
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
