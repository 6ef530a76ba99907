use super::HandlerContext;
use crate::presentation::views::DashboardView;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use gastrack_runtime::Workspace;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext, today: Option<NaiveDate>) -> Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    // One snapshot for both the count and the stats
    let entries = workspace.ledger()?.entries()?;
    let stats = gastrack_engine::calculate_stats(&entries, today);

    ctx.render(
        &stats,
        DashboardView::new(&stats, today, entries.len(), &ctx.options),
    )
}
