#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use machmon::libs::catalog::view_spec;
    use machmon::libs::classify::{stock_rule, Classify, ColorToken, Rules, CRITICAL, MAJOR, MINOR};
    use machmon::libs::config::ThresholdConfig;
    use machmon::libs::record::{DowntimeEntry, DowntimeType, ForumQuestion, ViewKind};
    use machmon::libs::source::{load, SampleSource};

    fn entry(minutes: u32) -> DowntimeEntry {
        DowntimeEntry {
            id: format!("M{}", minutes),
            name: format!("Machine {}", minutes),
            total_downtime: minutes,
            incidents: 1,
            mtbf: 100,
            last_incident: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            status: String::new(),
            downtime_type: DowntimeType::Breakdown,
        }
    }

    #[test]
    fn test_downtime_boundaries() {
        let rules = Rules::default();

        assert_eq!(rules.downtime(120.0).label, CRITICAL);
        assert_ne!(rules.downtime(120.0).label, MAJOR);
        assert_eq!(rules.downtime(121.0).label, CRITICAL);
        assert_eq!(rules.downtime(119.0).label, MAJOR);
        assert_eq!(rules.downtime(61.0).label, MAJOR);
        assert_eq!(rules.downtime(60.0).label, MINOR);
        assert_eq!(rules.downtime(0.0).label, MINOR);
    }

    #[test]
    fn test_downtime_colors() {
        let rules = Rules::default();
        assert_eq!(rules.downtime(145.0).color, ColorToken::Red);
        assert_eq!(rules.downtime(85.0).color, ColorToken::Yellow);
        assert_eq!(rules.downtime(45.0).color, ColorToken::Blue);
    }

    #[test]
    fn test_downtime_thresholds_are_configurable() {
        let rules = Rules::new(&ThresholdConfig {
            downtime_critical_from: 90.0,
            downtime_major_above: 30.0,
            stock_urgent_factor: 0.5,
        });
        assert_eq!(rules.downtime(90.0).label, CRITICAL);
        assert_eq!(rules.downtime(31.0).label, MAJOR);
        assert_eq!(rules.downtime(30.0).label, MINOR);
    }

    #[test]
    fn test_severity_tags_agree_with_badges() {
        let thresholds = ThresholdConfig::default();
        let rules = Rules::new(&thresholds);
        let spec = view_spec(ViewKind::Downtime, &thresholds);

        for minutes in 0..=300 {
            let record = entry(minutes);
            let label = record.classify(&rules).label;
            for (tag, expected) in [("critical", CRITICAL), ("major", MAJOR), ("minor", MINOR)] {
                let selected = spec.resolve_tag(tag).evaluate(&record);
                assert_eq!(selected, label == expected, "{} minutes, tag {}", minutes, tag);
            }
        }
    }

    #[test]
    fn test_stock_boundaries() {
        let rules = Rules::default();

        assert_eq!(rules.stock_level(20.0, 20.0).label, "LOW");
        assert_eq!(rules.stock_level(10.0, 20.0).label, "URGENT");
        assert_eq!(rules.stock_level(11.0, 20.0).label, "LOW");
        assert_eq!(rules.stock_level(21.0, 20.0).label, "OK");
        assert_eq!(rules.stock_level(0.0, 0.0).label, "URGENT");

        assert_eq!(rules.stock_level(10.0, 20.0).color, ColorToken::Red);
        assert_eq!(rules.stock_level(20.0, 20.0).color, ColorToken::Yellow);
        assert_eq!(rules.stock_level(21.0, 20.0).color, ColorToken::Green);
    }

    #[test]
    fn test_stock_urgent_factor() {
        let rule = stock_rule(20.0, 0.25);
        assert_eq!(rule.classify(5.0).label, "URGENT");
        assert_eq!(rule.classify(6.0).label, "LOW");
    }

    #[test]
    fn test_palettes() {
        let rules = Rules::default();

        assert_eq!(rules.priority.color("critical"), ColorToken::DarkRed);
        assert_eq!(rules.priority.color("high"), ColorToken::Red);
        assert_eq!(rules.priority.color("medium"), ColorToken::Yellow);
        assert_eq!(rules.priority.color("low"), ColorToken::Blue);
        assert_eq!(rules.issue_status.color("resolved"), ColorToken::Green);
        assert_eq!(rules.machine_status.color("error"), ColorToken::Red);
        assert_eq!(rules.part_status.color("low"), ColorToken::Yellow);
        assert_eq!(rules.order_status.color("delivered"), ColorToken::Green);
        assert_eq!(rules.order_status.color("in-transit"), ColorToken::Blue);
    }

    #[test]
    fn test_unknown_values_degrade_to_default() {
        let rules = Rules::default();

        assert_eq!(rules.priority.color("urgent"), ColorToken::Gray);
        assert_eq!(rules.machine_status.color("offline"), ColorToken::Gray);

        let on_hold = rules.issue_status.classify("on_hold");
        assert_eq!(on_hold.label, "ON HOLD");
        assert_eq!(on_hold.color, ColorToken::Gray);

        // anything that is neither delivered nor shipping is pending
        assert_eq!(rules.order_status.color("cancelled"), ColorToken::Yellow);
    }

    #[test]
    fn test_sample_records_classification() {
        let source = SampleSource::new().unwrap();
        let rules = Rules::default();

        let downtime: Vec<String> = load::<DowntimeEntry>(&source)
            .unwrap()
            .iter()
            .map(|entry| entry.classify(&rules).label)
            .collect();
        assert_eq!(downtime, vec![CRITICAL, MAJOR, MINOR, CRITICAL, MAJOR]);

        let forum: Vec<String> = load::<ForumQuestion>(&source)
            .unwrap()
            .iter()
            .map(|question| question.classify(&rules).label)
            .collect();
        assert_eq!(forum, vec!["SOLVED", "OPEN"]);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ThresholdConfig::default().validate().is_ok());

        let overlapping = ThresholdConfig {
            downtime_critical_from: 60.0,
            downtime_major_above: 60.0,
            stock_urgent_factor: 0.5,
        };
        assert!(overlapping.validate().is_err());

        for factor in [-0.1, 1.5, f64::NAN] {
            let unreachable_tier = ThresholdConfig {
                stock_urgent_factor: factor,
                ..ThresholdConfig::default()
            };
            assert!(unreachable_tier.validate().is_err(), "factor {}", factor);
        }
        for factor in [0.0, 1.0] {
            let edge = ThresholdConfig {
                stock_urgent_factor: factor,
                ..ThresholdConfig::default()
            };
            assert!(edge.validate().is_ok(), "factor {}", factor);
        }
    }
}
