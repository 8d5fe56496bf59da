//! Exploration engine: concept extraction, depth-tiered synthesis, trigger analysis
//!
//! Synthesis is templated. Only the surface observations and the focus-derived
//! possibilities depend on the input; every other tier returns fixed statements.

use crate::cluster::ConceptClusterCache;
use crate::concepts::ConceptExtractor;
use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::types::{Depth, Exploration, SegmentAnalysis, TriggerReason};

const DEEP_PATTERNS: &[&str] = &[
    "Recursive patterns in problem-solving approach",
    "Implicit assumptions about system boundaries",
    "Tension between local and global optimization",
    "Meta-level patterns in how we're approaching the problem",
];

const ADJACENT_IDEAS: &[&str] = &[
    "Alternative architectural patterns not yet considered",
    "Cross-cutting concerns that could be unified",
    "Automation opportunities in discussed workflows",
    "Parallels with other domains or systems",
];

const THEMES: &[&str] = &[
    "Emergence of patterns from iterative refinement",
    "Balance between explicitness and flexibility",
    "Meta-cognitive aspects of tool design",
    "The interplay between structure and evolution",
];

const NEW_DIRECTIONS: &[&str] = &[
    "Explore self-modifying conversation patterns",
    "Design feedback loops for continuous improvement",
    "Consider conversational memory across sessions",
    "Build tools that learn from their own usage patterns",
];

const QUESTIONS_RAISED: &str = "Questions raised but not fully explored";

#[derive(Debug, Clone)]
pub struct ExplorationEngine {
    config: ExplorerConfig,
    extractor: ConceptExtractor,
    clusters: ConceptClusterCache,
}

impl ExplorationEngine {
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        let extractor = ConceptExtractor::new(&config.concept_categories)?;
        Ok(Self {
            config,
            extractor,
            clusters: ConceptClusterCache::new(),
        })
    }

    pub fn extract_concepts(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// Build an exploration of `context` at the requested depth.
    /// Reads the engine but never changes it, so equal inputs give equal output.
    pub fn perform_deep_exploration(
        &self,
        context: &str,
        depth: Depth,
        focus: &[String],
    ) -> Exploration {
        let mut insights = Exploration::default();

        match depth {
            Depth::Surface => {
                insights.unspoken_observations = self.surface_patterns(context);
            }
            Depth::Medium => {
                insights.unspoken_observations = owned(DEEP_PATTERNS);
                insights.adjacent_possibilities = adjacent_ideas(focus);
                insights.underlying_themes = owned(THEMES);
            }
            Depth::Deep => {
                insights.unspoken_observations = owned(DEEP_PATTERNS);
                insights.adjacent_possibilities = adjacent_ideas(focus);
                insights.underlying_themes = owned(THEMES);
                insights.generative_thoughts = owned(NEW_DIRECTIONS);
            }
        }

        tracing::debug!(
            %depth,
            focus = focus.len(),
            sections = ?insights.populated_sections(),
            "exploration generated"
        );
        insights
    }

    /// Classify text for exploration. Concepts seen together are added to the
    /// cluster cache after the connection lookup, so they surface on later calls.
    pub fn analyze_segment(&mut self, text: &str) -> SegmentAnalysis {
        let mut analysis = SegmentAnalysis::default();
        let lowered = text.to_lowercase();

        if self
            .config
            .completion_phrases
            .iter()
            .any(|p| lowered.contains(&p.to_lowercase()))
        {
            analysis.reasons.push(TriggerReason::TaskCompletion);
        }

        let concepts = self.extract_concepts(text);
        if concepts.len() >= self.config.exploration_threshold {
            analysis.reasons.push(TriggerReason::ConceptDensity);
            analysis.themes.extend(concepts.iter().cloned());
        }

        let connections = self.clusters.unexplored_connections(&concepts);
        if !connections.is_empty() {
            analysis.reasons.push(TriggerReason::UnexploredConnections);
            analysis
                .themes
                .extend(connections.iter().map(|c| c.to_string()));
        }

        self.clusters.record_cooccurrence(&concepts);

        analysis.should_explore = !analysis.reasons.is_empty();
        tracing::debug!(
            concepts = concepts.len(),
            connections = connections.len(),
            reasons = ?analysis.reasons,
            "segment classified"
        );
        analysis
    }

    /// Templated exploration keyed by the analysis reasons
    pub fn generate_exploration(&self, analysis: &SegmentAnalysis) -> Exploration {
        let mut exploration = Exploration::default();

        if analysis.has_reason(TriggerReason::TaskCompletion) {
            exploration.unspoken_observations.extend(owned(&[
                "Task completed but implications unexplored",
                "Potential ripple effects on system architecture",
            ]));
        }
        if analysis.has_reason(TriggerReason::ConceptDensity) {
            exploration.adjacent_possibilities.extend(owned(&[
                "Integration patterns between mentioned concepts",
                "Higher-order abstractions emerging from discussion",
            ]));
        }
        if analysis.has_reason(TriggerReason::UnexploredConnections) {
            exploration.underlying_themes.extend(owned(&[
                "Latent relationships between components",
                "Systemic patterns across implementation",
            ]));
        }

        exploration.generative_thoughts = owned(&[
            "Consider meta-tooling for conversation enhancement",
            "Explore recursive self-improvement patterns",
        ]);

        exploration
    }

    /// Analyze `text` and, if it warrants it, generate an exploration.
    /// Connections surfaced here are marked explored.
    pub fn should_trigger_exploration(&mut self, text: &str) -> Option<Exploration> {
        let concepts = self.extract_concepts(text);
        let surfaced = self.clusters.unexplored_connections(&concepts);
        let analysis = self.analyze_segment(text);

        if !analysis.should_explore {
            return None;
        }

        for connection in &surfaced {
            self.clusters
                .mark_explored(&connection.concept, &connection.related);
        }
        Some(self.generate_exploration(&analysis))
    }

    pub fn clusters(&self) -> &ConceptClusterCache {
        &self.clusters
    }

    pub fn clusters_mut(&mut self) -> &mut ConceptClusterCache {
        &mut self.clusters
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    fn surface_patterns(&self, context: &str) -> Vec<String> {
        let mut patterns = Vec::new();

        if let Some(first) = self.extract_concepts(context).first() {
            patterns.push(format!(
                "Multiple {} concepts discussed without explicit connection",
                first
            ));
        }
        if context.contains('?') {
            patterns.push(QUESTIONS_RAISED.to_string());
        }

        patterns
    }
}

fn adjacent_ideas(focus: &[String]) -> Vec<String> {
    let mut ideas = owned(ADJACENT_IDEAS);
    ideas.extend(
        focus
            .iter()
            .map(|f| format!("{}-specific patterns and opportunities", f)),
    );
    ideas
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
