//! One conversation: a monitor, an exploration engine and the command registry

use crate::render::{format_dot_prompt, format_exploration};
use liminal_commands::CommandRegistry;
use liminal_core::{Config, Depth, ExplorationEngine, SegmentMonitor};
use std::path::{Path, PathBuf};

pub struct Session {
    pub monitor: SegmentMonitor,
    pub engine: ExplorationEngine,
    pub commands: CommandRegistry,
}

impl Session {
    pub fn new(config: &Config) -> liminal_core::Result<Self> {
        Ok(Self {
            monitor: SegmentMonitor::new(config.thresholds, config.vocabulary.clone()),
            engine: ExplorationEngine::new(config.explorer.clone())?,
            commands: CommandRegistry::with_builtins(),
        })
    }

    pub fn explore(&self, context: &str, depth: Depth, focus: &[String]) -> String {
        let exploration = self.engine.perform_deep_exploration(context, depth, focus);
        format_exploration(&exploration)
    }

    /// Explore the monitor's recent context
    pub fn dot_prompt(&self, auto_depth: bool) -> String {
        let context = self.monitor.recent_context();
        let depth = if auto_depth {
            Depth::for_context(&context)
        } else {
            Depth::Medium
        };
        let exploration = self.engine.perform_deep_exploration(&context, depth, &[]);
        format_dot_prompt(&exploration)
    }

    /// Add a segment; on fire, explore the fired context at medium depth and reset the counters
    pub fn monitor_segment(&mut self, segment: &str) -> String {
        let signal = self.monitor.add_segment(segment);
        if !signal.should_explore {
            return "Segment added to monitor. No exploration triggered yet.".to_string();
        }

        let context = signal.context.unwrap_or_default();
        let exploration = self
            .engine
            .perform_deep_exploration(&context, Depth::Medium, &[]);
        self.monitor.reset_triggers();

        format!(
            "Liminal exploration triggered:\n{}",
            format_exploration(&exploration)
        )
    }
}

/// Resolve configuration: an explicit path must load, the default location may be absent
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Ok(Config::load(path)?);
    }
    let config = Config::load_or_default(default_config_path().as_deref())?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("liminal").join("liminal.json"))
}
