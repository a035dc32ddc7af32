use super::filter::Listing;
use super::record::ForumQuestion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort modes of the forum list. Applied after filtering; ties keep the
/// source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ForumSort {
    /// Newest question first.
    #[default]
    Recent,
    /// Highest vote count first.
    Votes,
    /// Most recent activity first.
    Active,
    /// Questions without answers first, then newest.
    Unanswered,
}

impl ForumSort {
    pub fn compare(self, a: &ForumQuestion, b: &ForumQuestion) -> Ordering {
        match self {
            ForumSort::Recent => b.timestamp.cmp(&a.timestamp),
            ForumSort::Votes => b.votes.cmp(&a.votes),
            ForumSort::Active => b.last_activity.cmp(&a.last_activity),
            ForumSort::Unanswered => (a.answers > 0)
                .cmp(&(b.answers > 0))
                .then_with(|| b.timestamp.cmp(&a.timestamp)),
        }
    }

    pub fn apply<'a>(self, listing: Listing<'a, ForumQuestion>) -> Listing<'a, ForumQuestion> {
        listing.sort_by(|a, b| self.compare(a, b))
    }
}
