pub mod collision;
pub mod config;
pub mod engine;
pub mod node;
pub mod sector;
