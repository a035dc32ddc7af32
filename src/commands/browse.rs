use super::{list, with_record_type, Context, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::record::ViewKind;
use crate::libs::view::{TableRow, View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[arg(value_enum)]
    view: ViewKind,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(ctx: &Context, args: BrowseArgs) -> Result<()> {
    with_record_type!(args.view, R => browse::<R>(ctx, &args.filter))
}

/// Refine query and tags, list the matches, open one record; repeat until declined.
fn browse<R: TableRow>(ctx: &Context, filter: &FilterArgs) -> Result<()> {
    let mut session = list::session::<R>(ctx, filter)?;
    let theme = ColorfulTheme::default();
    msg_print!(Message::BrowseHeader(R::KIND.noun().to_string()), true);

    loop {
        let query: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptSearchQuery.to_string())
            .with_initial_text(session.filter().query())
            .allow_empty(true)
            .interact_text()?;
        session.set_query(query.trim());

        let spec = session.spec().clone();
        if !spec.tags.is_empty() {
            let labels: Vec<&str> = spec.tags.iter().map(|tag| tag.label.as_str()).collect();
            let defaults: Vec<bool> = spec.tags.iter().map(|tag| session.filter().is_selected(&tag.value)).collect();
            let chosen = MultiSelect::with_theme(&theme)
                .with_prompt(Message::PromptSelectTags.to_string())
                .items(&labels)
                .defaults(&defaults)
                .interact()?;
            session.set_tags(chosen.iter().map(|&index| spec.tags[index].value.as_str()));
        }

        list::show(ctx, &session)?;

        let visible = session.visible().cloned();
        if visible.is_empty() {
            msg_info!(Message::BrowseNothingToSelect);
        } else {
            let names: Vec<String> = visible
                .iter()
                .map(|record| format!("{} - {}", record.id(), record.display_name()))
                .collect();
            if let Some(index) = Select::with_theme(&theme)
                .with_prompt(Message::PromptSelectRecord.to_string())
                .items(&names)
                .default(0)
                .interact_opt()?
            {
                let record = visible[index].clone();
                let title = record.display_name().to_string();
                if let Some(previous) = session.select(record) {
                    msg_info!(Message::SelectionReplaced(previous.display_name().to_string(), title.clone()));
                }
                if let Some(selected) = session.selected() {
                    msg_print!(Message::RecordSelected(title), true);
                    View::detail(selected, &ctx.rules)?;
                }
            }
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptBrowseAgain.to_string())
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}
