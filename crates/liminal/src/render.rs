//! Markdown rendering for explorations

use liminal_core::Exploration;

/// Render non-empty sections as `## Heading` blocks of bullet points
pub fn format_exploration(exploration: &Exploration) -> String {
    exploration
        .sections()
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| {
            let bullets: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
            format!("## {}\n{}\n", title, bullets.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_dot_prompt(exploration: &Exploration) -> String {
    format!(
        "[Exploring liminal space...]\n\n{}",
        format_exploration(exploration)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_omitted() {
        let exploration = Exploration {
            unspoken_observations: vec!["Questions raised but not fully explored".to_string()],
            ..Default::default()
        };
        let text = format_exploration(&exploration);
        assert_eq!(
            text,
            "## Unspoken Observations\n- Questions raised but not fully explored\n"
        );
    }

    #[test]
    fn test_sections_in_order_with_blank_line_between() {
        let exploration = Exploration {
            unspoken_observations: vec!["a".to_string()],
            adjacent_possibilities: vec!["b".to_string(), "c".to_string()],
            underlying_themes: vec![],
            generative_thoughts: vec!["d".to_string()],
        };
        let text = format_exploration(&exploration);
        assert_eq!(
            text,
            "## Unspoken Observations\n- a\n\n## Adjacent Possibilities\n- b\n- c\n\n## Generative Thoughts\n- d\n"
        );
    }

    #[test]
    fn test_empty_exploration_renders_nothing() {
        assert_eq!(format_exploration(&Exploration::default()), "");
    }

    #[test]
    fn test_dot_prompt_prefix() {
        let text = format_dot_prompt(&Exploration::default());
        assert!(text.starts_with("[Exploring liminal space...]"));
    }
}
