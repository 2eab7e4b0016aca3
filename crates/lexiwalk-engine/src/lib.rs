pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod layout;

// Re-export key types at crate root for convenience
pub use api::game::{Engine, SourceError, WordSource};
pub use api::types::{
    is_placeholder, normalize, words_match, Candidate, Category, GameStatus,
    ERROR_LOADING_WORDS, NEUTRAL_PROXIMITY, NO_WORDS_FOUND,
};
pub use bridge::snapshot::{EdgeView, LayoutSnapshot, NodeView, RoundSummary, SessionSnapshot};
pub use crate::core::fetch::{CandidateBatch, FetchRequest};
pub use crate::core::session::{RoundConfig, Session};
pub use crate::core::timer::RoundTimer;
pub use input::queue::{Command, CommandQueue};
pub use layout::config::LayoutConfig;
pub use layout::engine::LayoutEngine;
pub use layout::node::{EdgeKind, LayoutEdge, LayoutFrame, LayoutNode, NodeRole};
pub use layout::sector::{sector_for, Sector};
