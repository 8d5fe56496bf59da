//! Category-based concept extraction

use crate::config::ConceptCategory;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Extracts distinct lowercase concepts using one whole-word pattern per category
#[derive(Debug, Clone)]
pub struct ConceptExtractor {
    patterns: Vec<(String, Regex)>,
}

impl ConceptExtractor {
    pub fn new(categories: &[ConceptCategory]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(categories.len());

        for category in categories {
            let terms: Vec<String> = category
                .terms
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(regex::escape)
                .collect();
            if terms.is_empty() {
                continue;
            }

            let pattern = format!(r"\b(?:{})\b", terms.join("|"));
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| Error::Pattern {
                    category: category.name.clone(),
                    source,
                })?;
            patterns.push((category.name.clone(), regex));
        }

        Ok(Self { patterns })
    }

    /// Distinct concepts, ordered by category and then by first occurrence
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut concepts = Vec::new();

        for (_, regex) in &self.patterns {
            for m in regex.find_iter(text) {
                let concept = m.as_str().to_lowercase();
                if seen.insert(concept.clone()) {
                    concepts.push(concept);
                }
            }
        }

        concepts
    }

    /// Category names in match order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(name, _)| name.as_str())
    }
}
