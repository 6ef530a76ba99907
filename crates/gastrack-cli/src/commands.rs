use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use super::logging;
use crate::types::OutputFormat;
use anyhow::Result;
use gastrack_engine::NumberFormat;
use gastrack_runtime::{Workspace, resolve_workspace_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Bare `gastrack` shows the dashboard
    let command = cli.command.unwrap_or(Commands::Dashboard { today: None });

    match command {
        Commands::Init => {
            let ctx = HandlerContext::new(cli.format, NumberFormat::default());
            handlers::init::handle(&data_dir, &ctx)
        }

        Commands::Add { entry } => {
            let (workspace, ctx) = open(&data_dir, cli.format)?;
            handlers::add::handle(&workspace, &ctx, &entry)
        }

        Commands::Edit { id, entry } => {
            let (workspace, ctx) = open(&data_dir, cli.format)?;
            handlers::edit::handle(&workspace, &ctx, &id, &entry)
        }

        Commands::Delete { id } => {
            let (workspace, ctx) = open(&data_dir, cli.format)?;
            handlers::delete::handle(&workspace, &ctx, &id)
        }

        Commands::History => {
            let (workspace, ctx) = open(&data_dir, cli.format)?;
            handlers::history::handle(&workspace, &ctx)
        }

        Commands::Dashboard { today } => {
            let (workspace, ctx) = open(&data_dir, cli.format)?;
            handlers::dashboard::handle(&workspace, &ctx, today)
        }
    }
}

fn open(data_dir: &Path, format: OutputFormat) -> Result<(Workspace, HandlerContext)> {
    let workspace = Workspace::open(data_dir)?;
    let ctx = HandlerContext::new(format, workspace.config().display.clone());
    Ok((workspace, ctx))
}
