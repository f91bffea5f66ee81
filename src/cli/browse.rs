use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::roster::Roster;
use crate::tui::{self, PaginationStyle};

/// Browse the roster interactively
#[derive(Debug, Default, Args)]
pub struct BrowseCommand {
    /// JSON roster file to browse instead of the configured one
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Pagination bar layout
    #[arg(short = 's', long = "style", value_enum)]
    pub style: Option<PaginationStyle>,
}

impl BrowseCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let mut config = config.clone();
        if let Some(style) = self.style {
            config.display_style = style;
        }

        let roster = match self.file.as_ref().or(config.data_file.as_ref()) {
            Some(path) => Roster::load(path).await?,
            None => Roster::sample(config.sample_size),
        };
        info!(students = roster.len(), style = ?config.display_style, "Starting roster browser");

        tui::run(&config, roster).await?;

        info!("Roster browser closed");
        Ok(())
    }
}
