use super::HandlerContext;
use crate::presentation::views::HistoryView;
use anyhow::Result;
use gastrack_runtime::Workspace;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    let timeline = workspace.ledger()?.timeline()?;
    ctx.render(&timeline, HistoryView::new(&timeline, &ctx.options))
}
