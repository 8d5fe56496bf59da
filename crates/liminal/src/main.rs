mod cli;
mod commands;
mod render;
mod session;

use clap::Parser;
use cli::{Cli, Commands};
use session::Session;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries tool output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = session::load_config(cli.config.as_deref())?;
    let mut session = Session::new(&config)?;

    match cli.command {
        Commands::Explore {
            context,
            depth,
            focus,
            json,
        } => commands::explore::run(&session, context, depth, &focus, json),
        Commands::Dot { no_auto_depth } => commands::dot::run(&mut session, !no_auto_depth),
        Commands::Analyze { text } => commands::analyze::run(&mut session, text),
        Commands::Monitor { file } => commands::monitor::run(&mut session, file.as_deref()),
        Commands::Serve => commands::serve::run(&mut session),
        Commands::Commands { json } => commands::list::run(&session.commands, json),
        Commands::Version => commands::version::run(),
    }
}
