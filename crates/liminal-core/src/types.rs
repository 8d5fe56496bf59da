//! Core types for segment monitoring and exploration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One unit of conversational text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    /// Milliseconds since the Unix epoch at ingestion
    pub timestamp: i64,
    /// Set once the segment's signals are folded into the counters
    pub analyzed: bool,
}

impl Segment {
    pub fn new(content: String) -> Self {
        Self {
            content,
            timestamp: chrono::Utc::now().timestamp_millis(),
            analyzed: false,
        }
    }
}

/// Rolling heuristic counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerState {
    pub concept_density: u32,
    pub task_completions: u32,
    /// Tracked for observability only; never consulted when firing
    pub natural_pauses: u32,
    pub complexity_score: u32,
}

/// Result of adding a segment to the monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSignal {
    pub should_explore: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,
}

impl MonitorSignal {
    pub fn quiet() -> Self {
        Self::default()
    }
}

/// Exploration depth; each level does a superset of the previous level's work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Surface,
    #[default]
    Medium,
    Deep,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Surface => "surface",
            Depth::Medium => "medium",
            Depth::Deep => "deep",
        }
    }

    /// Parse a depth token, falling back to `Medium` for anything unknown
    pub fn parse_lenient(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            tracing::warn!(token, "unknown exploration depth, using medium");
            Depth::Medium
        })
    }

    /// Pick a depth from the amount of text available
    pub fn for_context(context: &str) -> Self {
        let words = context.split_whitespace().count();
        if words < 100 {
            Depth::Surface
        } else if words < 500 {
            Depth::Medium
        } else {
            Depth::Deep
        }
    }
}

impl FromStr for Depth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "surface" => Ok(Depth::Surface),
            "medium" => Ok(Depth::Medium),
            "deep" => Ok(Depth::Deep),
            _ => Err(Error::UnknownDepth(s.to_string())),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured exploration output. All four fields are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exploration {
    pub unspoken_observations: Vec<String>,
    pub adjacent_possibilities: Vec<String>,
    pub underlying_themes: Vec<String>,
    pub generative_thoughts: Vec<String>,
}

impl Exploration {
    /// Sections in display order, paired with their headings
    pub fn sections(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Unspoken Observations", self.unspoken_observations.as_slice()),
            ("Adjacent Possibilities", self.adjacent_possibilities.as_slice()),
            ("Underlying Themes", self.underlying_themes.as_slice()),
            ("Generative Thoughts", self.generative_thoughts.as_slice()),
        ]
    }

    /// Headings of the sections that have content
    pub fn populated_sections(&self) -> Vec<&'static str> {
        self.sections()
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(title, _)| *title)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections().iter().all(|(_, items)| items.is_empty())
    }
}

/// Why trigger analysis suggests exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerReason {
    TaskCompletion,
    ConceptDensity,
    UnexploredConnections,
}

impl TriggerReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerReason::TaskCompletion => "task-completion",
            TriggerReason::ConceptDensity => "concept-density",
            TriggerReason::UnexploredConnections => "unexplored-connections",
        }
    }
}

impl fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger-analysis result for a single piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentAnalysis {
    pub should_explore: bool,
    pub reasons: Vec<TriggerReason>,
    pub themes: Vec<String>,
}

impl SegmentAnalysis {
    pub fn has_reason(&self, reason: TriggerReason) -> bool {
        self.reasons.contains(&reason)
    }
}
