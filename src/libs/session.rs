//! Per-view state owned by one list view.
//!
//! A [`ViewSession`] bundles the immutable records of a view with its
//! [`FilterState`] and [`Selection`]. Every mutation goes through the session
//! and the visible list is recomputed from scratch on each call to
//! [`ViewSession::visible`], so nothing can go stale.

use super::catalog::{channel_scope, view_spec};
use super::config::ThresholdConfig;
use super::filter::{FilterState, Listing, TagMode, ViewSpec};
use super::record::{ForumQuestion, Record};
use super::selection::Selection;
use super::source::{load, RecordSource, SourceError};

#[derive(Debug, Clone)]
pub struct ViewSession<R> {
    spec: ViewSpec,
    records: Vec<R>,
    filter: FilterState,
    selection: Selection<R>,
}

impl<R: Record> ViewSession<R> {
    pub fn new(spec: ViewSpec, records: Vec<R>) -> Self {
        Self {
            spec,
            records,
            filter: FilterState::new(),
            selection: Selection::new(),
        }
    }

    /// Loads the view's records from a source with the configured tag catalog.
    pub fn open(source: &dyn RecordSource, thresholds: &ThresholdConfig) -> Result<Self, SourceError> {
        Ok(Self::new(view_spec(R::KIND, thresholds), load(source)?))
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn spec(&self) -> &ViewSpec {
        &self.spec
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> Listing<'_, R> {
        self.spec.filter(&self.records, &self.filter)
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle(tag)
    }

    pub fn set_mode(&mut self, mode: TagMode) {
        self.filter.set_mode(mode);
    }

    /// Replaces the tag selection as a whole.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.clear_tags();
        for tag in tags {
            self.filter.select_tag(tag.as_ref());
        }
    }

    pub fn select(&mut self, record: R) -> Option<R> {
        self.selection.select(record)
    }

    pub fn select_by_id(&mut self, id: &str) -> Option<&R> {
        self.selection.select_by_id(&self.records, id)
    }

    pub fn selected(&self) -> Option<&R> {
        self.selection.current()
    }
}

impl ViewSession<ForumQuestion> {
    /// Restricts the forum to one channel; `all` lifts the restriction.
    pub fn in_channel(mut self, channel: &str) -> Self {
        if let Some(scope) = channel_scope(channel) {
            self.filter = self.filter.restrict(scope);
        }
        self
    }
}
