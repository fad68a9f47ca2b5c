use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eventdesk_tui::{App, DeskConfig, desk_default, install_panic_hook, theme_by_name};

#[derive(Parser)]
#[command(name = "eventdesk", about = "Browse the events portal from the terminal")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme name, overriding the config file
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DeskConfig::load(cli.config.as_deref())?;

    let theme = match cli.theme.or(config.theme).as_deref() {
        Some(name) => theme_by_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, falling back to default");
            desk_default()
        }),
        None => desk_default(),
    };

    install_panic_hook();

    let mut app = App::with_theme(theme);
    app.run()?;

    Ok(())
}
