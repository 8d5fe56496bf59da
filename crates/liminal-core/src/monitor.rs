//! Segment monitor: rolling trigger signals with an index-based cooldown

use crate::config::{Thresholds, Vocabulary};
use crate::types::{MonitorSignal, Segment, TriggerState};
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_END_RE: OnceLock<Regex> = OnceLock::new();

/// Watches a stream of conversation segments and decides when an exploration should fire.
///
/// Counters only grow between [`SegmentMonitor::reset_triggers`] calls. Firing does not
/// reset them; the caller resets after acting on a fire signal.
#[derive(Debug, Clone)]
pub struct SegmentMonitor {
    thresholds: Thresholds,
    vocabulary: Vocabulary,
    segments: Vec<Segment>,
    triggers: TriggerState,
    /// First segment whose signals have not been folded in yet
    next_unanalyzed: usize,
    /// Segment count at the most recent fire
    last_fire_at: Option<usize>,
}

impl SegmentMonitor {
    pub fn new(thresholds: Thresholds, vocabulary: Vocabulary) -> Self {
        Self {
            thresholds,
            vocabulary: vocabulary.normalized(),
            segments: Vec::new(),
            triggers: TriggerState::default(),
            next_unanalyzed: 0,
            last_fire_at: None,
        }
    }

    /// Append a segment, fold its signals in, and decide whether to fire
    pub fn add_segment(&mut self, text: &str) -> MonitorSignal {
        self.segments.push(Segment::new(text.to_string()));
        self.analyze_pending();

        if self.in_cooldown() {
            tracing::debug!(
                segments = self.segments.len(),
                last_fire_at = self.last_fire_at,
                "exploration suppressed by cooldown"
            );
            return MonitorSignal::quiet();
        }

        if !self.should_fire() {
            return MonitorSignal::quiet();
        }

        self.last_fire_at = Some(self.segments.len());
        let triggers = self.trigger_reasons();
        tracing::info!(
            segment = self.segments.len() - 1,
            reasons = ?triggers,
            "liminal exploration triggered"
        );

        MonitorSignal {
            should_explore: true,
            context: Some(self.recent_context()),
            triggers,
        }
    }

    /// Zero all counters at once
    pub fn reset_triggers(&mut self) {
        tracing::debug!(before = ?self.triggers, "resetting trigger counters");
        self.triggers = TriggerState::default();
    }

    /// Content of the last `context_window` segments, separated by blank lines
    pub fn recent_context(&self) -> String {
        let start = self
            .segments
            .len()
            .saturating_sub(self.vocabulary.context_window);
        self.segments[start..]
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn triggers(&self) -> &TriggerState {
        &self.triggers
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    fn analyze_pending(&mut self) {
        for idx in self.next_unanalyzed..self.segments.len() {
            if self.segments[idx].analyzed {
                continue;
            }
            let content = self.segments[idx].content.to_lowercase();
            self.fold_signals(&content);
            self.segments[idx].analyzed = true;
        }
        self.next_unanalyzed = self.segments.len();
    }

    fn fold_signals(&mut self, content: &str) {
        let vocab = &self.vocabulary;

        let completed = contains_any(content, &vocab.completion_words);
        let concept_hits = vocab
            .concept_words
            .iter()
            .filter(|w| content.contains(w.as_str()))
            .count();
        let paused = contains_any(content, &vocab.pause_phrases);
        let complexity = complexity(content, vocab.long_sentence_words);

        if completed {
            self.triggers.task_completions += 1;
        }
        if concept_hits > 2 {
            self.triggers.concept_density += 1;
        }
        if paused {
            self.triggers.natural_pauses += 1;
        }
        self.triggers.complexity_score += complexity;

        tracing::debug!(
            completed,
            concept_hits,
            paused,
            complexity,
            state = ?self.triggers,
            "segment analyzed"
        );
    }

    fn in_cooldown(&self) -> bool {
        match self.last_fire_at {
            Some(fired_at) => {
                self.segments.len() - fired_at < self.thresholds.segments_between_exploration
            }
            None => false,
        }
    }

    fn should_fire(&self) -> bool {
        let t = &self.triggers;
        let th = &self.thresholds;
        t.concept_density >= th.concept_density_trigger
            || t.complexity_score >= th.complexity_trigger
            || t.task_completions >= th.task_completion_trigger
    }

    fn trigger_reasons(&self) -> Vec<String> {
        let t = &self.triggers;
        let th = &self.thresholds;
        let mut reasons = Vec::new();

        if t.concept_density >= th.concept_density_trigger {
            reasons.push(format!(
                "High concept density ({} segments)",
                t.concept_density
            ));
        }
        if t.complexity_score >= th.complexity_trigger {
            reasons.push(format!(
                "Complex discussion patterns (score: {})",
                t.complexity_score
            ));
        }
        if t.task_completions >= th.task_completion_trigger {
            reasons.push(format!(
                "Multiple task completions ({})",
                t.task_completions
            ));
        }

        reasons
    }
}

impl Default for SegmentMonitor {
    fn default() -> Self {
        Self::new(Thresholds::default(), Vocabulary::default())
    }
}

fn contains_any(content: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| content.contains(n.as_str()))
}

/// 2 for long average sentences, otherwise 1.
/// Pieces are counted the way `split` reports them, so a trailing terminator adds one.
fn complexity(content: &str, long_sentence_words: usize) -> u32 {
    let re = SENTENCE_END_RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap());
    let sentences = re.split(content).count().max(1);
    let words = content.split_whitespace().count();
    let avg = words as f64 / sentences as f64;

    if avg > long_sentence_words as f64 {
        2
    } else {
        1
    }
}
