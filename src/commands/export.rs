use super::{list, with_record_type, Context, FilterArgs};
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::record::ViewKind;
use crate::libs::view::TableRow;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    view: ViewKind,

    #[command(flatten)]
    filter: FilterArgs,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(ctx: &Context, args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.format, args.view, args.output.clone());
    with_record_type!(args.view, R => export::<R>(ctx, &args.filter, &exporter))
}

fn export<R: TableRow>(ctx: &Context, filter: &FilterArgs, exporter: &Exporter) -> Result<()> {
    let session = list::session::<R>(ctx, filter)?;
    exporter.export(&session.visible(), &ctx.rules)?;
    Ok(())
}
