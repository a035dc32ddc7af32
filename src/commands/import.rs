use super::Context;
use crate::db::db::DB_FILE_NAME;
use crate::db::records::SqliteStore;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::record::ViewKind;
use crate::libs::source::{Catalog, SourceKind};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Remove stored records of each view before importing
    #[arg(short, long)]
    replace: bool,
}

/// Copies every view of the selected source into the SQLite store.
pub fn cmd(ctx: &Context, args: ImportArgs) -> Result<()> {
    if ctx.source_kind == SourceKind::Sqlite {
        msg_bail_anyhow!(Message::ImportSourceIsStore);
    }

    let source = ctx.open_source()?;
    let catalog = Catalog::collect(source.as_ref())?;
    let mut store = SqliteStore::new()?;

    if args.replace {
        for kind in ViewKind::ALL {
            let removed = store.clear(kind)?;
            if removed > 0 {
                msg_info!(Message::StoreCleared(removed, kind.noun().to_string()));
            }
        }
    }

    let total = store.import_catalog(&catalog)?;
    let path = DataStorage::new().get_path(DB_FILE_NAME)?;
    msg_success!(Message::ImportCompleted(total, path.display().to_string()));
    Ok(())
}
