#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use machmon::libs::catalog::view_spec;
    use machmon::libs::config::ThresholdConfig;
    use machmon::libs::filter::TagMode;
    use machmon::libs::ordering::ForumSort;
    use machmon::libs::record::{Author, DowntimeEntry, ForumQuestion, Machine, ViewKind};
    use machmon::libs::selection::Selection;
    use machmon::libs::session::ViewSession;
    use machmon::libs::source::{load, SampleSource};

    fn machines() -> Vec<Machine> {
        load::<Machine>(&SampleSource::new().unwrap()).unwrap()
    }

    fn question(id: u32, day: u32, votes: i64, answers: u32) -> ForumQuestion {
        ForumQuestion {
            id,
            title: format!("Question {}", id),
            content: String::new(),
            author: Author {
                name: "Tester".to_string(),
                role: String::new(),
            },
            channel: "general".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            last_activity: NaiveDate::from_ymd_opt(2025, 1, 30 - day).unwrap(),
            votes,
            answers,
            views: 0,
            tags: Vec::new(),
            solved: false,
            bookmarked: false,
            featured: false,
        }
    }

    #[test]
    fn test_selection_starts_empty() {
        let selection: Selection<Machine> = Selection::new();
        assert!(selection.is_empty());
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let records = machines();
        let mut selection = Selection::new();

        assert!(selection.select(records[0].clone()).is_none());
        let previous = selection.select(records[1].clone());
        assert_eq!(previous.map(|m| m.id), Some(1));
        assert_eq!(selection.current().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_select_by_id() {
        let records = machines();
        let mut selection = Selection::new();

        assert_eq!(selection.select_by_id(&records, "3").map(|m| m.code.clone()), Some("ASM-003".to_string()));
        assert!(selection.select_by_id(&records, "42").is_none());
        // a failed lookup keeps the current record
        assert_eq!(selection.current().map(|m| m.id), Some(3));
    }

    #[test]
    fn test_session_opens_from_source() {
        let source = SampleSource::new().unwrap();
        let mut session = ViewSession::<DowntimeEntry>::open(&source, &ThresholdConfig::default()).unwrap();
        assert_eq!(session.records().len(), 5);
        assert_eq!(session.visible().len(), 5);

        session.toggle_tag("critical");
        session.toggle_tag("preventive");
        let ids: Vec<&str> = session.visible().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["M1", "M2", "M4", "M5"]);

        session.set_mode(TagMode::All);
        assert!(session.visible().is_empty());

        assert_eq!(session.select_by_id("m4").map(|e| e.total_downtime), Some(180));
        assert_eq!(session.selected().map(|e| e.id.as_str()), Some("M4"));
    }

    #[test]
    fn test_session_set_tags_replaces_selection() {
        let spec = view_spec(ViewKind::Machines, &ThresholdConfig::default());
        let mut session = ViewSession::new(spec, machines());

        session.set_tags(["error"]);
        assert_eq!(session.visible().len(), 1);
        session.set_tags(["operational", "maintenance"]);
        assert_eq!(session.visible().len(), 2);
        session.set_tags(Vec::<String>::new());
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn test_forum_channel_restriction() {
        let source = SampleSource::new().unwrap();
        let thresholds = ThresholdConfig::default();

        let all = ViewSession::<ForumQuestion>::open(&source, &thresholds).unwrap().in_channel("all");
        assert_eq!(all.visible().len(), 2);

        let maintenance = ViewSession::<ForumQuestion>::open(&source, &thresholds)
            .unwrap()
            .in_channel("maintenance");
        let ids: Vec<u32> = maintenance.visible().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_forum_sort_orders() {
        let spec = view_spec(ViewKind::Forum, &ThresholdConfig::default());
        let session = ViewSession::new(
            spec,
            vec![question(1, 10, 3, 2), question(2, 12, 9, 0), question(3, 11, 5, 1), question(4, 5, 1, 0)],
        );

        let order = |sort: ForumSort| -> Vec<u32> { sort.apply(session.visible()).iter().map(|q| q.id).collect() };

        assert_eq!(order(ForumSort::Recent), vec![2, 3, 1, 4]);
        assert_eq!(order(ForumSort::Votes), vec![2, 3, 1, 4]);
        assert_eq!(order(ForumSort::Active), vec![4, 1, 3, 2]);
        assert_eq!(order(ForumSort::Unanswered), vec![2, 4, 3, 1]);
    }
}
