use super::{list, Context, FilterArgs};
use crate::libs::catalog::ALL_CHANNELS;
use crate::libs::messages::Message;
use crate::libs::ordering::ForumSort;
use crate::libs::record::ForumQuestion;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ForumArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Channel to show, `all` for every channel
    #[arg(short, long, default_value = ALL_CHANNELS)]
    channel: String,

    #[arg(long, value_enum, default_value = "recent")]
    sort: ForumSort,
}

pub fn cmd(ctx: &Context, args: ForumArgs) -> Result<()> {
    let session = list::session::<ForumQuestion>(ctx, &args.filter)?.in_channel(&args.channel);

    if !args.channel.eq_ignore_ascii_case(ALL_CHANNELS) {
        msg_print!(Message::ActiveChannel(args.channel.clone()));
    }
    list::print_filter(session.filter());

    let listing = args.sort.apply(session.visible());
    View::listing(&listing, session.records().len(), &ctx.rules)
}
