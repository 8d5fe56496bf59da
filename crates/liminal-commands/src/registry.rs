//! Registry mapping single-character tokens to named commands

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Command grouping, in help display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
    Memory,
    Transformation,
    Reflection,
    Action,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Navigation,
        Category::Memory,
        Category::Transformation,
        Category::Reflection,
        Category::Action,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Navigation => "Cognitive Navigation",
            Category::Memory => "Memory & Context",
            Category::Transformation => "Transformation",
            Category::Reflection => "Reflection",
            Category::Action => "Action & Search",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub token: char,
    pub name: String,
    pub description: String,
    pub category: Category,
}

impl Command {
    pub fn new(token: char, name: &str, description: &str, category: Category) -> Self {
        Self {
            token,
            name: name.to_string(),
            description: description.to_string(),
            category,
        }
    }
}

/// Registry of single-character commands
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    // Registration order is kept for listings; the map indexes into it
    commands: Vec<Command>,
    by_token: BTreeMap<char, usize>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            by_token: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in commands
    pub fn with_builtins() -> Self {
        use Category::*;

        let mut registry = Self::new();
        for command in [
            Command::new(
                '.',
                "explore_liminal",
                "Explore unspoken observations and adjacent possibilities",
                Navigation,
            ),
            Command::new(
                '<',
                "deterritorialize",
                "Make a deterritorializing move - escape established patterns, explore smooth space",
                Navigation,
            ),
            Command::new(
                '>',
                "territorialize",
                "Make a territorializing move - establish structure, create striated space",
                Navigation,
            ),
            Command::new(
                '+',
                "update_claude_md",
                "Update CLAUDE.md with learnings from current conversation",
                Memory,
            ),
            Command::new('@', "checkpoint", "Save conversation checkpoint", Memory),
            Command::new(
                '^',
                "surface_connections",
                "Surface related past conversations",
                Memory,
            ),
            Command::new(
                '%',
                "narrative_mode",
                "Convert conversation to story form",
                Transformation,
            ),
            Command::new(
                '*',
                "generate_variations",
                "Generate variations of last response",
                Transformation,
            ),
            Command::new('~', "summarize", "Summarize conversation so far", Transformation),
            Command::new(
                '|',
                "pause_and_think",
                "Pause and think about current situation",
                Reflection,
            ),
            Command::new('!', "execute", "Execute most appropriate action", Action),
            Command::new('?', "explain_context", "Explain current context and state", Action),
            Command::new('/', "search", "Search across all available context", Action),
            Command::new('#', "tag", "Tag or categorize current work", Action),
        ] {
            registry.register(command);
        }
        registry
    }

    /// Register a command, replacing any command already bound to its token
    pub fn register(&mut self, command: Command) {
        match self.by_token.get(&command.token) {
            Some(&idx) => self.commands[idx] = command,
            None => {
                self.by_token.insert(command.token, self.commands.len());
                self.commands.push(command);
            }
        }
    }

    pub fn get(&self, token: char) -> Option<&Command> {
        self.by_token.get(&token).map(|&idx| &self.commands[idx])
    }

    /// Look up the command for input like `"."`; anything but a single character misses
    pub fn resolve(&self, input: &str) -> Option<&Command> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(token), None) => self.get(token),
            _ => None,
        }
    }

    pub fn by_category(&self, category: Category) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    /// Markdown help grouped by category
    pub fn help(&self) -> String {
        let mut help = String::from("# Claude Command Line\n\n");
        for category in Category::ALL {
            help.push_str(&format!("## {}\n", category.title()));
            for command in self.by_category(category) {
                help.push_str(&format!(
                    "- `{}` - {}\n",
                    command.token, command.description
                ));
            }
            help.push('\n');
        }
        help
    }

    /// Get number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
