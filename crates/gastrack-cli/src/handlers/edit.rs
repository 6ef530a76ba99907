use super::HandlerContext;
use crate::args::EntryArgs;
use crate::presentation::views::{EntryAction, EntryView};
use anyhow::{Result, bail};
use gastrack_runtime::{EntryDraft, Workspace};

pub fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    id: &str,
    args: &EntryArgs,
) -> Result<()> {
    let draft = args.to_draft();
    if draft == EntryDraft::default() {
        bail!("Nothing to change: pass at least one of --date, --odometer, --price, --liters, --total");
    }

    let ledger = workspace.ledger()?;
    let entry = ledger.update(id, draft)?;
    let computed = ledger
        .timeline()?
        .into_iter()
        .find(|c| c.entry.id == entry.id);

    match computed {
        Some(computed) => ctx.render(
            &computed,
            EntryView::computed(EntryAction::Updated, &computed, &ctx.options),
        ),
        None => ctx.render(
            &entry,
            EntryView::plain(EntryAction::Updated, &entry, &ctx.options),
        ),
    }
}
