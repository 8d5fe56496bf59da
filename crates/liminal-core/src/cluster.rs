//! Concept cluster cache and unexplored-connection tracking

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A candidate link between an extracted concept and one of its relatives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub concept: String,
    pub related: String,
}

impl Connection {
    /// Order-independent key, e.g. `architecture-pattern`
    pub fn key(&self) -> String {
        pair_key(&self.concept, &self.related)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.concept, self.related)
    }
}

/// Concept -> related concepts, plus the set of explored pair keys.
/// Only ever grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptClusterCache {
    clusters: HashMap<String, Vec<String>>,
    explored: HashSet<String>,
}

impl ConceptClusterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `a` and `b` as related in both directions
    pub fn relate(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        push_unique(self.clusters.entry(a.to_string()).or_default(), b);
        push_unique(self.clusters.entry(b.to_string()).or_default(), a);
    }

    /// Relate every pair of concepts that appeared together
    pub fn record_cooccurrence(&mut self, concepts: &[String]) {
        for (i, a) in concepts.iter().enumerate() {
            for b in concepts.iter().skip(i + 1) {
                self.relate(a, b);
            }
        }
    }

    pub fn related(&self, concept: &str) -> &[String] {
        self.clusters
            .get(concept)
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    pub fn mark_explored(&mut self, a: &str, b: &str) {
        self.explored.insert(pair_key(a, b));
    }

    pub fn is_explored(&self, a: &str, b: &str) -> bool {
        self.explored.contains(&pair_key(a, b))
    }

    /// Related concepts whose pair with the source concept is not yet explored
    pub fn unexplored_connections(&self, concepts: &[String]) -> Vec<Connection> {
        let mut connections = Vec::new();
        for concept in concepts {
            for related in self.related(concept) {
                if !self.is_explored(concept, related) {
                    connections.push(Connection {
                        concept: concept.clone(),
                        related: related.clone(),
                    });
                }
            }
        }
        connections
    }

    /// Number of concepts with at least one relative
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }
}

fn pair_key(a: &str, b: &str) -> String {
    let mut pair = [a, b];
    pair.sort_unstable();
    pair.join("-")
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_pair_key_sorted() {
        assert_eq!(pair_key("pattern", "architecture"), "architecture-pattern");
        assert_eq!(pair_key("architecture", "pattern"), "architecture-pattern");
    }

    #[test]
    fn test_relate_is_symmetric_and_deduplicated() {
        let mut cache = ConceptClusterCache::new();
        cache.relate("system", "pipeline");
        cache.relate("pipeline", "system");
        cache.relate("system", "system");

        assert_eq!(cache.related("system"), &["pipeline".to_string()]);
        assert_eq!(cache.related("pipeline"), &["system".to_string()]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_unexplored_connections_skip_explored_pairs() {
        let mut cache = ConceptClusterCache::new();
        cache.record_cooccurrence(&strings(&["system", "pipeline", "tool"]));
        cache.mark_explored("tool", "system");

        let connections = cache.unexplored_connections(&strings(&["system"]));
        let rendered: Vec<String> = connections.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["system-pipeline"]);
        assert!(cache.is_explored("system", "tool"));
    }

    #[test]
    fn test_unknown_concept_has_no_connections() {
        let cache = ConceptClusterCache::new();
        assert!(cache.related("ghost").is_empty());
        assert!(cache.unexplored_connections(&strings(&["ghost"])).is_empty());
    }

    #[test]
    fn test_connection_key_matches_explored_key() {
        let connection = Connection {
            concept: "workflow".to_string(),
            related: "design".to_string(),
        };
        assert_eq!(connection.to_string(), "workflow-design");
        assert_eq!(connection.key(), "design-workflow");
    }
}
