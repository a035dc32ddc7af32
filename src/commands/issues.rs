use super::{list, Context, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::record::Issue;
use crate::libs::stats::IssueStats;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct IssuesArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Print status counters for the visible issues
    #[arg(short, long)]
    stats: bool,
}

pub fn cmd(ctx: &Context, args: IssuesArgs) -> Result<()> {
    let session = list::session::<Issue>(ctx, &args.filter)?;
    list::show(ctx, &session)?;

    if args.stats {
        msg_print!(Message::StatsHeader("issues".to_string()), true);
        View::issue_stats(&IssueStats::from_records(session.visible().iter()))?;
    }
    Ok(())
}
