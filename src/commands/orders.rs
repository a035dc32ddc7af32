use super::{list, Context, FilterArgs};
use crate::libs::record::PurchaseOrder;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(ctx: &Context, args: OrdersArgs) -> Result<()> {
    let session = list::session::<PurchaseOrder>(ctx, &args.filter)?;
    list::show(ctx, &session)
}
