//! Trigger detection and liminal exploration engine

mod cluster;
mod concepts;
mod config;
mod error;
mod explorer;
mod monitor;
mod types;

pub use cluster::{ConceptClusterCache, Connection};
pub use concepts::ConceptExtractor;
pub use config::{ConceptCategory, Config, ExplorerConfig, Thresholds, Vocabulary};
pub use error::{Error, Result};
pub use explorer::ExplorationEngine;
pub use monitor::SegmentMonitor;
pub use types::{
    Depth, Exploration, MonitorSignal, Segment, SegmentAnalysis, TriggerReason, TriggerState,
};
