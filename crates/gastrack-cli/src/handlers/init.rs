use super::HandlerContext;
use crate::presentation::views::{InitSummary, InitView};
use anyhow::Result;
use gastrack_runtime::Workspace;
use std::path::Path;

pub fn handle(data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let (workspace, created) = Workspace::init(data_dir)?;

    let summary = InitSummary {
        data_dir: workspace.data_dir().to_path_buf(),
        config_path: workspace.config_path(),
        database_path: workspace.database_path(),
        created,
    };

    ctx.render(&summary, InitView::new(&summary, &ctx.options))
}
