use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{BrowseCommand, PagesCommand};
use crate::config::Config;

/// Roster - page through a school roster from your terminal
#[derive(Parser)]
#[command(
    name = "roster-pager",
    version,
    about = "Page through a school roster from your terminal",
    long_about = r#"Browse students page by page with a sliding window of page buttons.

Examples:
  roster-pager                                  # Browse a generated roster
  roster-pager browse --file students.json      # Browse a JSON roster
  roster-pager pages --total 20 --current 15    # Print the page-button window"#
)]
pub struct Cli {
    /// Current working directory
    #[arg(short = 'c', long = "cwd", global = true)]
    pub cwd: Option<PathBuf>,

    /// Configuration file (defaults to ./.roster.json, ./roster.json, then the user config dir)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the roster interactively (default)
    Browse(BrowseCommand),
    /// Print the page-button window for a page count
    Pages(PagesCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        // Change working directory if specified
        if let Some(cwd) = &self.cwd {
            std::env::set_current_dir(cwd)
                .with_context(|| format!("Failed to change directory to {}", cwd.display()))?;
            info!("Changed working directory to: {}", cwd.display());
        }

        let config = Config::init(self.config.as_deref()).await?;
        debug!(?config, "Configuration initialized");

        match self.command {
            Some(Commands::Pages(pages_cmd)) => pages_cmd.execute(&config).await,
            Some(Commands::Browse(browse_cmd)) => browse_cmd.execute(&config).await,
            None => BrowseCommand::default().execute(&config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages_command() {
        let cli = Cli::try_parse_from([
            "roster-pager",
            "pages",
            "--total",
            "20",
            "--current",
            "15",
            "--advance",
            "next",
            "--advance",
            "previous",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Pages(cmd)) => {
                assert_eq!(cmd.total, 20);
                assert_eq!(cmd.current, 15);
                assert_eq!(cmd.start, 1);
                assert_eq!(cmd.advance.len(), 2);
            }
            _ => panic!("expected pages command"),
        }
    }

    #[test]
    fn test_default_is_browse() {
        let cli = Cli::try_parse_from(["roster-pager", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_browse_style_flag() {
        let cli = Cli::try_parse_from(["roster-pager", "browse", "--style", "condensed"]).unwrap();
        match cli.command {
            Some(Commands::Browse(cmd)) => {
                assert_eq!(cmd.style, Some(crate::tui::PaginationStyle::Condensed));
            }
            _ => panic!("expected browse command"),
        }
    }
}
