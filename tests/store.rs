#[cfg(test)]
mod tests {
    use machmon::db::db::Db;
    use machmon::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use machmon::db::records::SqliteStore;
    use machmon::libs::record::{DowntimeEntry, RecordSet, ViewKind};
    use machmon::libs::source::{load, SampleSource};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        sample: SampleSource,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("machmon.db");
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
                sample: SampleSource::new().unwrap(),
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut StoreTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut StoreTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        MigrationManager::new().run_migrations(&mut db.conn).unwrap();

        let applied: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_import_and_list(ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::open(&ctx.db_path).unwrap();
        let written = store.import_catalog(ctx.sample.catalog()).unwrap();
        assert_eq!(written, 20);
        assert_eq!(store.count(ViewKind::Machines).unwrap(), 3);

        let stored = load::<DowntimeEntry>(&store).unwrap();
        assert_eq!(stored, ctx.sample.catalog().downtime);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_reimport_replaces_rows(ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::open(&ctx.db_path).unwrap();
        store.import_catalog(ctx.sample.catalog()).unwrap();

        let mut changed = ctx.sample.catalog().downtime.clone();
        changed[0].total_downtime = 30;
        store.import(&RecordSet::Downtime(changed)).unwrap();

        let stored = load::<DowntimeEntry>(&store).unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0].id, "M1");
        assert_eq!(stored[0].total_downtime, 30);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_one_kind(ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::open(&ctx.db_path).unwrap();
        store.import_catalog(ctx.sample.catalog()).unwrap();

        assert_eq!(store.clear(ViewKind::Parts).unwrap(), 4);
        assert_eq!(store.count(ViewKind::Parts).unwrap(), 0);
        assert_eq!(store.count(ViewKind::Orders).unwrap(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_store_survives_reopen(ctx: &mut StoreTestContext) {
        {
            let mut store = SqliteStore::open(&ctx.db_path).unwrap();
            store.import_catalog(ctx.sample.catalog()).unwrap();
        }
        let store = SqliteStore::open(&ctx.db_path).unwrap();
        assert_eq!(store.count(ViewKind::Forum).unwrap(), 2);
    }
}
