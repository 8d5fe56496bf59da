mod common;

use common::sample_engine;
use liminal_core::{Depth, Exploration};

#[test]
fn test_surface_question_scenario() {
    let engine = sample_engine();
    let result =
        engine.perform_deep_exploration("What else should we consider?", Depth::Surface, &[]);

    assert!(result
        .unspoken_observations
        .contains(&"Questions raised but not fully explored".to_string()));
    assert!(result.adjacent_possibilities.is_empty());
    assert!(result.underlying_themes.is_empty());
}

#[test]
fn test_deep_empty_context_with_focus_scenario() {
    let engine = sample_engine();
    let result = engine.perform_deep_exploration("", Depth::Deep, &["security".to_string()]);

    assert!(!result.adjacent_possibilities.is_empty());
    assert!(result
        .adjacent_possibilities
        .contains(&"security-specific patterns and opportunities".to_string()));
}

#[test]
fn test_depth_superset_across_contexts() {
    let engine = sample_engine();
    let contexts = ["", "plain words", "Which workflow?", "the service and the module"];

    for context in contexts {
        let surface = engine.perform_deep_exploration(context, Depth::Surface, &[]);
        let medium = engine.perform_deep_exploration(context, Depth::Medium, &[]);
        let deep = engine.perform_deep_exploration(context, Depth::Deep, &[]);

        for section in surface.populated_sections() {
            assert!(medium.populated_sections().contains(&section), "{}", context);
        }
        for section in medium.populated_sections() {
            assert!(deep.populated_sections().contains(&section), "{}", context);
        }
    }
}

#[test]
fn test_repeat_calls_identical() {
    let engine = sample_engine();
    let focus = vec!["latency".to_string()];
    let first: Vec<Exploration> = [Depth::Surface, Depth::Medium, Depth::Deep]
        .iter()
        .map(|&d| engine.perform_deep_exploration("Is the pipeline a pattern?", d, &focus))
        .collect();
    let second: Vec<Exploration> = [Depth::Surface, Depth::Medium, Depth::Deep]
        .iter()
        .map(|&d| engine.perform_deep_exploration("Is the pipeline a pattern?", d, &focus))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_trigger_analysis_does_not_affect_direct_generation() {
    let mut engine = sample_engine();
    let before = engine.perform_deep_exploration("the tool and the service", Depth::Deep, &[]);
    engine.analyze_segment("the tool and the service");
    engine.analyze_segment("the tool again");
    let after = engine.perform_deep_exploration("the tool and the service", Depth::Deep, &[]);
    assert_eq!(before, after);
    assert!(!engine.clusters().is_empty());
}
