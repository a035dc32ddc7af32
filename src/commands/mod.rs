//! Command-line interface.
//!
//! One subcommand per list view plus record lookup, interactive browsing,
//! export, import into the local store and configuration. The global
//! `--source`/`--file` flags override the configured record source for a
//! single invocation.

pub mod browse;
pub mod downtime;
pub mod export;
pub mod forum;
pub mod import;
pub mod init;
pub mod issues;
pub mod list;
pub mod machines;
pub mod orders;
pub mod parts;
pub mod show;
pub mod tags;

use crate::libs::classify::Rules;
use crate::libs::config::{Config, ThresholdConfig};
use crate::libs::filter::{FilterState, TagMode};
use crate::libs::messages::Message;
use crate::libs::source::{self, RecordSource, SourceKind};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Runs `$body` with `$r` bound to the record type of a [`ViewKind`](crate::libs::record::ViewKind).
macro_rules! with_record_type {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            $crate::libs::record::ViewKind::Machines => {
                type $r = $crate::libs::record::Machine;
                $body
            }
            $crate::libs::record::ViewKind::Issues => {
                type $r = $crate::libs::record::Issue;
                $body
            }
            $crate::libs::record::ViewKind::Forum => {
                type $r = $crate::libs::record::ForumQuestion;
                $body
            }
            $crate::libs::record::ViewKind::Downtime => {
                type $r = $crate::libs::record::DowntimeEntry;
                $body
            }
            $crate::libs::record::ViewKind::Parts => {
                type $r = $crate::libs::record::SparePart;
                $body
            }
            $crate::libs::record::ViewKind::Orders => {
                type $r = $crate::libs::record::PurchaseOrder;
                $body
            }
        }
    };
}
pub(crate) use with_record_type;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List machines")]
    Machines(machines::MachinesArgs),
    #[command(about = "List maintenance issues")]
    Issues(issues::IssuesArgs),
    #[command(about = "List forum questions")]
    Forum(forum::ForumArgs),
    #[command(about = "Downtime analysis per machine")]
    Downtime(downtime::DowntimeArgs),
    #[command(about = "Spare parts inventory")]
    Parts(parts::PartsArgs),
    #[command(about = "Purchase orders")]
    Orders(orders::OrdersArgs),
    #[command(about = "Show one record by id", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Filter and inspect records interactively")]
    Browse(browse::BrowseArgs),
    #[command(about = "List the tags a view can be filtered by")]
    Tags(tags::TagsArgs),
    #[command(about = "Export a filtered view to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Import a catalog into the local database")]
    Import(import::ImportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Record source, overriding the configuration
    #[arg(long, global = true, value_enum)]
    source: Option<SourceKind>,

    /// Catalog file; implies `--source json` unless a source is given
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        if let Commands::Init(args) = cli.command {
            return init::cmd(args);
        }

        let ctx = Context::new(cli.source, cli.file)?;
        match cli.command {
            Commands::Machines(args) => machines::cmd(&ctx, args),
            Commands::Issues(args) => issues::cmd(&ctx, args),
            Commands::Forum(args) => forum::cmd(&ctx, args),
            Commands::Downtime(args) => downtime::cmd(&ctx, args),
            Commands::Parts(args) => parts::cmd(&ctx, args),
            Commands::Orders(args) => orders::cmd(&ctx, args),
            Commands::Show(args) => show::cmd(&ctx, args),
            Commands::Browse(args) => browse::cmd(&ctx, args),
            Commands::Tags(args) => tags::cmd(&ctx, args),
            Commands::Export(args) => export::cmd(&ctx, args),
            Commands::Import(args) => import::cmd(&ctx, args),
            Commands::Init(_) => Ok(()),
        }
    }
}

/// Query and tag options shared by every list view.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Tag to filter by; repeat for several
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// How several tags combine
    #[arg(short = 'm', long = "match", value_enum, default_value = "any")]
    pub mode: TagMode,
}

impl FilterArgs {
    pub fn state(&self) -> FilterState {
        FilterState::new()
            .with_query(self.query.as_deref().unwrap_or_default())
            .with_tags(&self.tags)
            .with_mode(self.mode)
    }
}

/// Resolved configuration and source selection of one invocation.
pub struct Context {
    pub config: Config,
    pub thresholds: ThresholdConfig,
    pub rules: Rules,
    pub source_kind: SourceKind,
    pub source_path: Option<PathBuf>,
}

impl Context {
    pub fn new(source: Option<SourceKind>, file: Option<PathBuf>) -> Result<Self> {
        let config = Config::read()?;
        let data = config.data();
        let source_kind = match (source, &file) {
            (Some(kind), _) => kind,
            (None, Some(_)) => SourceKind::Json,
            (None, None) => data.source,
        };
        let source_path = file.or(data.path);

        let thresholds = config.thresholds();
        thresholds.validate()?;
        let rules = Rules::new(&thresholds);

        Ok(Self {
            config,
            thresholds,
            rules,
            source_kind,
            source_path,
        })
    }

    pub fn open_source(&self) -> Result<Box<dyn RecordSource>> {
        msg_debug!(Message::SourceOpened(self.source_kind.to_string()));
        source::open(self.source_kind, self.source_path.clone())
            .map_err(|e| msg_error_anyhow!(Message::SourceUnavailable(e.to_string())))
    }
}
