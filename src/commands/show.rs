use super::{with_record_type, Context};
use crate::libs::messages::Message;
use crate::libs::profile::MachineProfile;
use crate::libs::record::{Issue, Machine, Record, ViewKind};
use crate::libs::session::ViewSession;
use crate::libs::source::load;
use crate::libs::view::{TableRow, View};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_enum)]
    view: ViewKind,

    id: String,
}

pub fn cmd(ctx: &Context, args: ShowArgs) -> Result<()> {
    match args.view {
        ViewKind::Machines => show_machine(ctx, &args.id),
        view => with_record_type!(view, R => show::<R>(ctx, &args.id)),
    }
}

fn show<R: TableRow>(ctx: &Context, id: &str) -> Result<()> {
    let source = ctx.open_source()?;
    let mut session = ViewSession::<R>::open(source.as_ref(), &ctx.thresholds)?;

    let Some(record) = session.select_by_id(id) else {
        msg_bail_anyhow!(Message::RecordNotFound(R::KIND.to_string(), id.to_string()));
    };

    msg_print!(Message::RecordSelected(record.display_name().to_string()), true);
    View::detail(record, &ctx.rules)
}

/// Machine detail plus the issues reported against it.
fn show_machine(ctx: &Context, id: &str) -> Result<()> {
    let source = ctx.open_source()?;
    let mut session = ViewSession::<Machine>::open(source.as_ref(), &ctx.thresholds)?;
    let issues = load::<Issue>(source.as_ref())?;

    let Some(machine) = session.select_by_id(id) else {
        msg_bail_anyhow!(Message::RecordNotFound(ViewKind::Machines.to_string(), id.to_string()));
    };

    msg_print!(Message::RecordSelected(machine.display_name().to_string()), true);
    View::detail(machine, &ctx.rules)?;

    let profile = MachineProfile::new(machine, &issues, &ctx.thresholds);
    msg_print!(Message::MachineIssuesHeader(machine.code.clone(), profile.open_issues()), true);
    View::listing(&profile.issues, issues.len(), &ctx.rules)?;
    View::issue_stats(&profile.stats)
}
