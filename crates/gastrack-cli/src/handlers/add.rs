use super::HandlerContext;
use crate::args::EntryArgs;
use crate::presentation::views::{EntryAction, EntryView};
use anyhow::Result;
use chrono::Local;
use gastrack_runtime::Workspace;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext, args: &EntryArgs) -> Result<()> {
    let ledger = workspace.ledger()?;
    let today = Local::now().date_naive();

    let entry = ledger.add(args.to_draft(), today)?;
    let computed = ledger
        .timeline()?
        .into_iter()
        .find(|c| c.entry.id == entry.id);

    match computed {
        Some(computed) => ctx.render(
            &computed,
            EntryView::computed(EntryAction::Added, &computed, &ctx.options),
        ),
        None => ctx.render(
            &entry,
            EntryView::plain(EntryAction::Added, &entry, &ctx.options),
        ),
    }
}
