use clap::{Parser, Subcommand};
use liminal_core::Depth;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liminal")]
#[command(version)]
#[command(about = "Liminal exploration for conversational assistants")]
pub struct Cli {
    /// Path to liminal.json (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explore the liminal space of a context (reads stdin if omitted)
    Explore {
        context: Option<String>,

        /// surface, medium or deep
        #[arg(short, long, default_value = "medium", value_parser = parse_depth)]
        depth: Depth,

        /// Themes or concepts to focus on (repeatable)
        #[arg(short, long)]
        focus: Vec<String>,

        /// Print the exploration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Period prompt: explore stdin at a depth chosen from its length
    Dot {
        /// Always explore at medium depth
        #[arg(long)]
        no_auto_depth: bool,
    },

    /// Classify each input line for exploration triggers
    Analyze {
        /// Text to classify (reads stdin lines if omitted)
        text: Option<String>,
    },

    /// Feed segments (one per line) through the monitor
    Monitor {
        /// Segment file (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Serve tool calls as line-delimited JSON on stdin/stdout
    Serve,

    /// List single-character commands
    Commands {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}

fn parse_depth(s: &str) -> Result<Depth, String> {
    s.parse::<Depth>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["liminal", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_explore() {
        let cli = Cli::try_parse_from([
            "liminal", "explore", "what next?", "--depth", "deep", "-f", "security", "-f", "cost",
        ])
        .unwrap();
        if let Commands::Explore {
            context,
            depth,
            focus,
            json,
        } = cli.command
        {
            assert_eq!(context.as_deref(), Some("what next?"));
            assert_eq!(depth, Depth::Deep);
            assert_eq!(focus, vec!["security", "cost"]);
            assert!(!json);
        } else {
            panic!("Expected Explore command");
        }
    }

    #[test]
    fn test_cli_explore_defaults_to_medium() {
        let cli = Cli::try_parse_from(["liminal", "explore", "ctx"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Explore {
                depth: Depth::Medium,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_depth() {
        let cli = Cli::try_parse_from(["liminal", "explore", "ctx", "--depth", "abyssal"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["liminal", "serve", "--config", "/tmp/liminal.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/liminal.json")));
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn test_cli_parse_monitor_file() {
        let cli = Cli::try_parse_from(["liminal", "monitor", "--file", "talk.txt"]).unwrap();
        if let Commands::Monitor { file } = cli.command {
            assert_eq!(file, Some(PathBuf::from("talk.txt")));
        } else {
            panic!("Expected Monitor command");
        }
    }
}
