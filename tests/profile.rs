#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use machmon::libs::config::ThresholdConfig;
    use machmon::libs::profile::{machine_scope, MachineProfile};
    use machmon::libs::record::{Issue, IssueStatus, Machine};
    use machmon::libs::source::{load, SampleSource};
    use test_context::{test_context, TestContext};

    struct PlantContext {
        machines: Vec<Machine>,
        issues: Vec<Issue>,
    }

    impl TestContext for PlantContext {
        fn setup() -> Self {
            let source = SampleSource::new().unwrap();
            PlantContext {
                machines: load(&source).unwrap(),
                issues: load(&source).unwrap(),
            }
        }
    }

    #[test_context(PlantContext)]
    #[test]
    fn test_profile_fields_are_loaded(ctx: &mut PlantContext) {
        let alpha = &ctx.machines[0];
        assert_eq!(alpha.model.as_deref(), Some("CNC-X1000"));
        assert_eq!(alpha.installation_date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(alpha.next_maintenance, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert_eq!(alpha.availability, Some(92.0));
    }

    #[test]
    fn test_profile_fields_are_optional() {
        let machine: Machine = serde_json::from_str(
            r#"{ "id": 9, "code": "PRS-009", "name": "Press", "status": "operational",
                 "location": "Hall D", "manufacturer": "Acme", "type": "Press" }"#,
        )
        .unwrap();
        assert!(machine.model.is_none());
        assert!(machine.availability.is_none());
        assert!(!serde_json::to_string(&machine).unwrap().contains("model"));
    }

    #[test_context(PlantContext)]
    #[test]
    fn test_profile_lists_issues_of_machine(ctx: &mut PlantContext) {
        let profile = MachineProfile::new(&ctx.machines[0], &ctx.issues, &ThresholdConfig::default());

        let ids: Vec<u32> = profile.issues.iter().map(|issue| issue.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(profile.stats.total, 1);
        assert_eq!(profile.open_issues(), 1);
    }

    #[test_context(PlantContext)]
    #[test]
    fn test_profile_orders_issues_newest_first(ctx: &mut PlantContext) {
        let mut issues = ctx.issues.clone();
        let mut follow_up = issues[2].clone();
        follow_up.id = 10;
        follow_up.created_at = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        follow_up.status = IssueStatus::Open;
        follow_up.resolved_at = None;
        issues.push(follow_up);

        let gamma = &ctx.machines[2];
        let profile = MachineProfile::new(gamma, &issues, &ThresholdConfig::default());
        let ids: Vec<u32> = profile.issues.iter().map(|issue| issue.id).collect();
        assert_eq!(ids, vec![10, 3]);
        assert_eq!(profile.stats.resolved, 1);
        assert_eq!(profile.stats.critical, 2);
        assert_eq!(profile.open_issues(), 1);
    }

    #[test_context(PlantContext)]
    #[test]
    fn test_machine_without_issues_shows_empty_state(ctx: &mut PlantContext) {
        let mut idle = ctx.machines[0].clone();
        idle.code = "LTH-010".to_string();

        assert!(!machine_scope(&idle).evaluate(&ctx.issues[0]));
        let profile = MachineProfile::new(&idle, &ctx.issues, &ThresholdConfig::default());
        assert!(profile.issues.is_empty());
        assert_eq!(
            profile.issues.empty_state().unwrap().to_string(),
            "No issues found matching your criteria"
        );
    }
}
