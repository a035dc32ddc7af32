use super::{list, Context, FilterArgs};
use crate::libs::record::Machine;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MachinesArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(ctx: &Context, args: MachinesArgs) -> Result<()> {
    let session = list::session::<Machine>(ctx, &args.filter)?;
    list::show(ctx, &session)
}
