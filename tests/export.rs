#[cfg(test)]
mod tests {
    use machmon::libs::catalog::view_spec;
    use machmon::libs::classify::Rules;
    use machmon::libs::config::ThresholdConfig;
    use machmon::libs::export::{ExportFormat, Exporter};
    use machmon::libs::filter::{FilterState, ViewSpec};
    use machmon::libs::record::{DowntimeEntry, Issue, ViewKind};
    use machmon::libs::source::{load, SampleSource};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        spec: ViewSpec,
        entries: Vec<DowntimeEntry>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                spec: view_spec(ViewKind::Downtime, &ThresholdConfig::default()),
                entries: load(&SampleSource::new().unwrap()).unwrap(),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let listing = ctx.spec.filter(&ctx.entries, &FilterState::new().with_tags(["critical"]));
        let output_path = ctx.temp_dir.path().join("critical.csv");

        let exporter = Exporter::new(ExportFormat::Csv, ViewKind::Downtime, Some(output_path.clone()));
        assert_eq!(exporter.export(&listing, &Rules::default()).unwrap(), 2);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("classification,"));
        assert!(lines[0].contains("totalDowntime"));
        assert!(content.contains("CRITICAL"));
        assert!(content.contains("Machine HCM-004"));
        assert!(!content.contains("MINOR"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_keeps_optional_columns_of_later_rows(ctx: &mut ExportTestContext) {
        let issues: Vec<Issue> = load(&SampleSource::new().unwrap()).unwrap();
        let spec = view_spec(ViewKind::Issues, &ThresholdConfig::default());
        let listing = spec.filter(&issues, &FilterState::new());
        assert!(listing.records()[0].resolved_at.is_none());

        let output_path = ctx.temp_dir.path().join("issues.csv");
        let exporter = Exporter::new(ExportFormat::Csv, ViewKind::Issues, Some(output_path.clone()));
        assert_eq!(exporter.export(&listing, &Rules::default()).unwrap(), 3);

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        let column = |name: &str| headers.iter().position(|header| header == name).unwrap();
        let (id, color, resolved) = (column("id"), column("color"), column("resolvedAt"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][color], "red");
        assert_eq!(&rows[0][resolved], "");
        assert_eq!(&rows[2][id], "3");
        assert_eq!(&rows[2][color], "dark_red");
        assert_eq!(&rows[2][resolved], "2025-01-09");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let listing = ctx.spec.filter(&ctx.entries, &FilterState::new());
        let output_path = ctx.temp_dir.path().join("downtime.json");

        let exporter = Exporter::new(ExportFormat::Json, ViewKind::Downtime, Some(output_path.clone()));
        exporter.export(&listing, &Rules::default()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2]["classification"], "MINOR");
        assert_eq!(rows[2]["color"], "blue");
        assert_eq!(rows[2]["totalDowntime"], 45);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let listing = ctx.spec.filter(&ctx.entries, &FilterState::new().with_query("machine"));
        let output_path = ctx.temp_dir.path().join("downtime.xlsx");

        let exporter = Exporter::new(ExportFormat::Excel, ViewKind::Downtime, Some(output_path.clone()));
        exporter.export(&listing, &Rules::default()).unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_listing_fails(ctx: &mut ExportTestContext) {
        let listing = ctx.spec.filter(&ctx.entries, &FilterState::new().with_query("zzz"));
        let output_path = ctx.temp_dir.path().join("empty.csv");

        let exporter = Exporter::new(ExportFormat::Csv, ViewKind::Downtime, Some(output_path.clone()));
        assert!(exporter.export(&listing, &Rules::default()).is_err());
        assert!(!output_path.exists());
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, ViewKind::Parts, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("machmon_parts_"));
        assert!(name.ends_with(".xlsx"));
    }
}
