use super::{with_record_type, Context};
use crate::libs::messages::Message;
use crate::libs::record::ViewKind;
use crate::libs::session::ViewSession;
use crate::libs::view::{TableRow, View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[arg(value_enum)]
    view: ViewKind,
}

pub fn cmd(ctx: &Context, args: TagsArgs) -> Result<()> {
    with_record_type!(args.view, R => list_tags::<R>(ctx))
}

fn list_tags<R: TableRow>(ctx: &Context) -> Result<()> {
    let source = ctx.open_source()?;
    let session = ViewSession::<R>::open(source.as_ref(), &ctx.thresholds)?;
    let spec = session.spec();

    if spec.tags.is_empty() {
        msg_info!(Message::NoTagsForView(R::KIND.to_string()));
        return Ok(());
    }

    let counts: Vec<usize> = spec
        .tags
        .iter()
        .map(|tag| session.records().iter().filter(|record| tag.predicate.evaluate(*record)).count())
        .collect();

    msg_print!(Message::TagsHeader(R::KIND.noun().to_string()), true);
    View::tags(spec, &counts)
}
