//! Configuration for segment monitoring and exploration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trigger thresholds, fixed for the lifetime of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Segments that must be added after a fire before the next one
    pub segments_between_exploration: usize,

    /// Concept-dense segments needed to fire
    pub concept_density_trigger: u32,

    /// Accumulated complexity score needed to fire
    pub complexity_trigger: u32,

    /// Task completions needed to fire
    pub task_completion_trigger: u32,
}

impl Thresholds {
    pub fn new() -> Self {
        Self {
            segments_between_exploration: 5,
            concept_density_trigger: 4,
            complexity_trigger: 7,
            task_completion_trigger: 2,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new()
    }
}

/// Word lists and window sizes used by the segment monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// A segment with more than two distinct hits counts as concept-dense
    pub concept_words: Vec<String>,

    /// Phrases that mark a natural pause in the conversation
    pub pause_phrases: Vec<String>,

    /// Words that mark a task as completed
    pub completion_words: Vec<String>,

    /// Number of trailing segments returned as context on fire
    pub context_window: usize,

    /// Average words per sentence above which a segment scores as complex
    pub long_sentence_words: usize,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            concept_words: to_strings(&[
                "system",
                "pattern",
                "architecture",
                "design",
                "structure",
                "tool",
                "service",
                "component",
                "integration",
                "workflow",
                "process",
                "algorithm",
                "framework",
                "model",
                "interface",
            ]),
            pause_phrases: to_strings(&[
                "what else",
                "anything else",
                "next",
                "now",
                "let's",
                "should we",
                "could we",
                "?",
            ]),
            completion_words: to_strings(&["completed", "finished", "done"]),
            context_window: 5,
            long_sentence_words: 15,
        }
    }

    /// Copy with every word lowercased, matching the lowercased segment text
    pub(crate) fn normalized(mut self) -> Self {
        for list in [
            &mut self.concept_words,
            &mut self.pause_phrases,
            &mut self.completion_words,
        ] {
            for word in list.iter_mut() {
                *word = word.to_lowercase();
            }
        }
        self
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// A named group of terms matched as whole words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptCategory {
    pub name: String,
    pub terms: Vec<String>,
}

impl ConceptCategory {
    pub fn new(name: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            terms: to_strings(terms),
        }
    }
}

/// Exploration engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Concept categories, matched in order
    pub concept_categories: Vec<ConceptCategory>,

    /// Distinct concepts in one segment that count as concept-dense
    pub exploration_threshold: usize,

    /// Phrases that mark task completion during trigger analysis
    pub completion_phrases: Vec<String>,
}

impl ExplorerConfig {
    pub fn new() -> Self {
        Self {
            concept_categories: vec![
                ConceptCategory::new(
                    "structural",
                    &["system", "architecture", "design", "pattern", "structure"],
                ),
                ConceptCategory::new("process", &["process", "flow", "pipeline", "workflow"]),
                ConceptCategory::new("relational", &["integration", "connection", "relationship"]),
                ConceptCategory::new("component", &["tool", "service", "component", "module"]),
            ],
            exploration_threshold: 3,
            completion_phrases: to_strings(&["completed", "finished"]),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level configuration file (`liminal.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub vocabulary: Vocabulary,
    pub explorer: ExplorerConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            _ => Ok(Self::default()),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
