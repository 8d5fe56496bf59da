#![allow(dead_code)]

use liminal_core::{ExplorationEngine, ExplorerConfig, SegmentMonitor, Thresholds, Vocabulary};

pub fn sample_thresholds() -> Thresholds {
    Thresholds {
        segments_between_exploration: 5,
        concept_density_trigger: 4,
        complexity_trigger: 7,
        task_completion_trigger: 2,
    }
}

pub fn sample_monitor() -> SegmentMonitor {
    SegmentMonitor::new(sample_thresholds(), Vocabulary::default())
}

pub fn sample_engine() -> ExplorationEngine {
    ExplorationEngine::new(ExplorerConfig::default()).unwrap()
}

/// Mentions architecture, pattern and workflow: three distinct concept words
pub const DENSE_SEGMENT: &str = "The architecture follows a clear pattern for each workflow";
