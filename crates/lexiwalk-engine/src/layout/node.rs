use glam::Vec2;
use serde::Serialize;

use crate::api::types::{normalize, Category};

/// Visual role of a placed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    /// On the current path.
    Path,
    /// In the current candidate set and not on the path.
    LiveCandidate,
    /// Was a candidate in a previous turn; kept at reduced emphasis.
    Historical,
}

/// Kind of a directed edge between two placed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    Path,
    Candidate,
    Historical,
}

/// A placed visual entity, one per distinct word surfaced in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Stable identity derived from the word and its role.
    pub id: String,
    pub word: String,
    pub role: NodeRole,
    pub category: Option<Category>,
    pub position: Vec2,
    pub definition: Option<String>,
}

impl LayoutNode {
    /// Id for a path node: word plus path position, like `happy-0`.
    pub fn path_id(word: &str, index: usize) -> String {
        format!("{}-{}", normalize(word), index)
    }

    /// Id for a candidate or historical node.
    pub fn word_id(word: &str) -> String {
        normalize(word)
    }
}

/// A directed edge between two placed nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    /// True for the most recent path edge, for emphasis.
    pub active: bool,
}

impl LayoutEdge {
    pub fn new(source: String, target: String, kind: EdgeKind) -> Self {
        Self {
            id: format!("{}->{}", source, target),
            source,
            target,
            kind,
            active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Full node/edge set for one recompute, handed to the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct LayoutFrame {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl LayoutFrame {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
