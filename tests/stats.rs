#[cfg(test)]
mod tests {
    use machmon::libs::catalog::view_spec;
    use machmon::libs::classify::Rules;
    use machmon::libs::config::ThresholdConfig;
    use machmon::libs::filter::FilterState;
    use machmon::libs::formatter::format_duration;
    use machmon::libs::record::{DowntimeEntry, Issue, Priority, SparePart, ViewKind};
    use machmon::libs::source::{load, SampleSource};
    use machmon::libs::stats::{DowntimeStats, InventoryStats, IssueStats};

    #[test]
    fn test_issue_stats() {
        let issues = load::<Issue>(&SampleSource::new().unwrap()).unwrap();
        let stats = IssueStats::from_records(&issues);

        assert_eq!(
            stats,
            IssueStats {
                total: 3,
                open: 1,
                in_progress: 1,
                resolved: 1,
                critical: 1,
            }
        );
    }

    #[test]
    fn test_issue_stats_ignore_value_case() {
        let mut issues = load::<Issue>(&SampleSource::new().unwrap()).unwrap();
        let shouted: Issue = serde_json::from_value(serde_json::json!({
            "id": 4,
            "title": "Spindle overheating",
            "machineId": "CNC-001",
            "priority": "Critical",
            "status": "In_Progress",
            "reporter": "Ops",
            "assignee": "Mike Smith",
            "createdAt": "2025-01-14",
            "type": "Mechanical"
        }))
        .unwrap();
        assert_eq!(shouted.priority, Priority::Critical);
        issues.push(shouted);

        let stats = IssueStats::from_records(&issues);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.critical, 2);
        assert_eq!(stats.in_progress, 2);
    }

    #[test]
    fn test_downtime_stats() {
        let entries = load::<DowntimeEntry>(&SampleSource::new().unwrap()).unwrap();
        let stats = DowntimeStats::from_records(&entries, &Rules::default());

        assert_eq!(stats.machines, 5);
        assert_eq!((stats.critical, stats.major, stats.minor), (2, 2, 1));
        assert_eq!(stats.total_minutes, 520);
        assert_eq!(stats.total_downtime().num_hours(), 8);
        assert_eq!(stats.incidents, 21);
        assert_eq!(stats.mean_mtbf, Some(316.0));
        assert_eq!(format_duration(&stats.mean_mtbf_duration().unwrap()), "05:16");
    }

    #[test]
    fn test_downtime_stats_follow_filter() {
        let entries = load::<DowntimeEntry>(&SampleSource::new().unwrap()).unwrap();
        let spec = view_spec(ViewKind::Downtime, &ThresholdConfig::default());
        let listing = spec.filter(&entries, &FilterState::new().with_tags(["critical"]));

        let stats = DowntimeStats::from_records(listing.iter(), &Rules::default());
        assert_eq!(stats.machines, 2);
        assert_eq!(stats.critical, 2);
        assert_eq!(stats.total_minutes, 325);
    }

    #[test]
    fn test_empty_downtime_stats() {
        let stats = DowntimeStats::from_records(std::iter::empty(), &Rules::default());
        assert_eq!(stats.machines, 0);
        assert_eq!(stats.mean_mtbf, None);
    }

    #[test]
    fn test_inventory_stats() {
        let parts = load::<SparePart>(&SampleSource::new().unwrap()).unwrap();
        let stats = InventoryStats::from_records(&parts, &Rules::default());

        assert_eq!(stats.items, 4);
        assert_eq!(stats.units, 98);
        assert_eq!(stats.below_minimum, 2);
        assert_eq!(stats.urgent, 0);
        assert!((stats.value - 5932.05).abs() < 1e-6);
    }

    #[test]
    fn test_inventory_stats_with_stricter_factor() {
        let parts = load::<SparePart>(&SampleSource::new().unwrap()).unwrap();
        let rules = Rules::new(&ThresholdConfig {
            stock_urgent_factor: 0.8,
            ..ThresholdConfig::default()
        });
        let stats = InventoryStats::from_records(&parts, &rules);

        // 15 of 25 and 8 of 10 are both at or below 80%
        assert_eq!(stats.urgent, 2);
        assert_eq!(stats.below_minimum, 2);
    }
}
