use super::HandlerContext;
use crate::presentation::views::{EntryAction, EntryView};
use anyhow::Result;
use gastrack_runtime::Workspace;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext, id: &str) -> Result<()> {
    let ledger = workspace.ledger()?;
    let removed = ledger.delete(id)?;

    ctx.render(
        &removed,
        EntryView::plain(EntryAction::Deleted, &removed, &ctx.options),
    )
}
