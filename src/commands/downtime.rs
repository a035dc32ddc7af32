use super::{list, Context, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::record::DowntimeEntry;
use crate::libs::stats::DowntimeStats;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DowntimeArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Print severity counters and totals for the visible machines
    #[arg(short, long)]
    stats: bool,
}

pub fn cmd(ctx: &Context, args: DowntimeArgs) -> Result<()> {
    let session = list::session::<DowntimeEntry>(ctx, &args.filter)?;
    list::show(ctx, &session)?;

    if args.stats {
        msg_print!(Message::StatsHeader("downtime".to_string()), true);
        View::downtime_stats(&DowntimeStats::from_records(session.visible().iter(), &ctx.rules))?;
    }
    Ok(())
}
