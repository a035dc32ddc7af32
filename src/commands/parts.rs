use super::{list, Context, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::record::SparePart;
use crate::libs::stats::InventoryStats;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PartsArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Print inventory value and low-stock counters
    #[arg(short, long)]
    stats: bool,
}

pub fn cmd(ctx: &Context, args: PartsArgs) -> Result<()> {
    let session = list::session::<SparePart>(ctx, &args.filter)?;
    list::show(ctx, &session)?;

    if args.stats {
        msg_print!(Message::StatsHeader("inventory".to_string()), true);
        View::inventory_stats(&InventoryStats::from_records(session.visible().iter(), &ctx.rules))?;
    }
    Ok(())
}
