#[cfg(test)]
mod tests {
    use machmon::libs::record::{DowntimeEntry, Machine, RecordSet, SparePart, ViewKind};
    use machmon::libs::source::{load, open, Catalog, JsonSource, RecordSource, SampleSource, SourceError, SourceKind};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const SMALL_CATALOG: &str = r#"{
        "machines": [
            { "id": 7, "code": "LTH-007", "name": "Lathe Delta", "status": "operational",
              "location": "Hall C", "manufacturer": "Acme", "type": "Lathe" }
        ],
        "downtime": [
            { "id": "L7", "name": "Lathe Delta", "totalDowntime": 130, "incidents": 1,
              "mtbf": 500, "lastIncident": "2025-02-01", "type": "Breakdown" }
        ]
    }"#;

    struct CatalogContext {
        temp_dir: TempDir,
    }

    impl TestContext for CatalogContext {
        fn setup() -> Self {
            CatalogContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    /// Always answers with machines, whatever was asked for.
    struct MachinesOnly;

    impl RecordSource for MachinesOnly {
        fn list_records(&self, _kind: ViewKind) -> Result<RecordSet, SourceError> {
            Ok(RecordSet::Machines(Vec::new()))
        }
    }

    #[test]
    fn test_sample_catalog_counts() {
        let source = SampleSource::new().unwrap();
        let counts: Vec<usize> = ViewKind::ALL
            .iter()
            .map(|kind| source.list_records(*kind).unwrap().len())
            .collect();
        assert_eq!(counts, vec![3, 3, 2, 5, 4, 3]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let text = r#"{ "downtime": [
            { "id": "M1", "name": "A", "totalDowntime": 10, "lastIncident": "2025-01-01", "type": "Breakdown" },
            { "id": "M1", "name": "B", "totalDowntime": 20, "lastIncident": "2025-01-02", "type": "Preventive" }
        ] }"#;

        match Catalog::from_json(text) {
            Err(SourceError::DuplicateId { kind, id }) => {
                assert_eq!(kind, ViewKind::Downtime);
                assert_eq!(id, "M1");
            }
            other => panic!("expected duplicate id error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_collections_are_empty() {
        let catalog = Catalog::from_json(r#"{ "machines": [] }"#).unwrap();
        assert!(catalog.records(ViewKind::Orders).is_empty());
        assert!(load::<SparePart>(&catalog).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(Catalog::from_json("{ \"machines\": 3 }"), Err(SourceError::Malformed(_))));
        assert!(matches!(Catalog::from_json("not json"), Err(SourceError::Malformed(_))));
    }

    #[test_context(CatalogContext)]
    #[test]
    fn test_missing_file_is_not_found(ctx: &mut CatalogContext) {
        let path = ctx.temp_dir.path().join("absent.json");
        let source = JsonSource::new(&path);

        match source.list_records(ViewKind::Machines) {
            Err(SourceError::NotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected not found, got {:?}", other.map(|set| set.len())),
        }
    }

    #[test_context(CatalogContext)]
    #[test]
    fn test_json_source_reads_catalog_file(ctx: &mut CatalogContext) {
        let path = ctx.temp_dir.path().join("plant.json");
        fs::write(&path, SMALL_CATALOG).unwrap();

        let source = open(SourceKind::Json, Some(path)).unwrap();
        let machines = load::<Machine>(source.as_ref()).unwrap();
        assert_eq!(machines.len(), 1);
        assert_eq!(machines[0].code, "LTH-007");
        assert_eq!(machines[0].machine_type.as_str(), "Lathe");

        let downtime = load::<DowntimeEntry>(source.as_ref()).unwrap();
        assert_eq!(downtime[0].total_downtime, 130);
        assert_eq!(downtime[0].incidents, 1);
        assert!(downtime[0].status.is_empty());
    }

    #[test]
    fn test_json_source_needs_path() {
        assert!(matches!(
            open(SourceKind::Json, None),
            Err(SourceError::PathRequired(SourceKind::Json))
        ));
    }

    #[test]
    fn test_kind_mismatch_is_reported() {
        match load::<DowntimeEntry>(&MachinesOnly) {
            Err(SourceError::KindMismatch { expected, found }) => {
                assert_eq!(expected, ViewKind::Downtime);
                assert_eq!(found, ViewKind::Machines);
            }
            other => panic!("expected kind mismatch, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_collect_copies_every_view() {
        let sample = SampleSource::new().unwrap();
        let catalog = Catalog::collect(&sample).unwrap();
        assert_eq!(catalog.machines, sample.catalog().machines);
        assert_eq!(catalog.purchase_orders.len(), 3);
    }
}
