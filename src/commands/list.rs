use super::{Context, FilterArgs};
use crate::libs::filter::{FilterState, TagMode};
use crate::libs::messages::Message;
use crate::libs::session::ViewSession;
use crate::libs::view::{TableRow, View};
use crate::{msg_print, msg_warning};
use anyhow::Result;

/// Loads a view from the configured source and applies the filter options.
pub fn session<R: TableRow>(ctx: &Context, filter: &FilterArgs) -> Result<ViewSession<R>> {
    let source = ctx.open_source()?;
    let session = ViewSession::<R>::open(source.as_ref(), &ctx.thresholds)?.with_filter(filter.state());
    warn_unknown_tags(&session);
    Ok(session)
}

pub fn warn_unknown_tags<R: TableRow>(session: &ViewSession<R>) {
    for tag in session.filter().tags() {
        if !session.spec().is_known_tag(tag) {
            msg_warning!(Message::UnknownTag(tag.to_string(), R::KIND.to_string()));
        }
    }
}

pub fn print_filter(state: &FilterState) {
    if !state.query().is_empty() {
        msg_print!(Message::ActiveQuery(state.query().to_string()));
    }
    let tags: Vec<&str> = state.tags().collect();
    if !tags.is_empty() {
        let mode = match state.mode() {
            TagMode::Any => "any",
            TagMode::All => "all",
        };
        msg_print!(Message::ActiveTags(tags.join(", "), mode.to_string()));
    }
}

/// Prints the filtered table of a session.
pub fn show<R: TableRow>(ctx: &Context, session: &ViewSession<R>) -> Result<()> {
    print_filter(session.filter());
    View::listing(&session.visible(), session.records().len(), &ctx.rules)
}
