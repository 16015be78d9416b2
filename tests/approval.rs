#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use liftlog::api::Backend;
    use liftlog::libs::approval::ApprovalWorkflow;
    use liftlog::libs::entry::{ArbeitszeitEntry, Decision, EntryId, EntryStatus, TimeEntry, TimeEntryDraft};
    use liftlog::libs::error::{Error, Result};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::time::Duration;
    use test_context::{test_context, AsyncTestContext};

    /// In-memory backend holding time entries the way the dashboard does.
    #[derive(Default)]
    struct FakeBackend {
        entries: Mutex<Vec<TimeEntry>>,
        decisions: Mutex<Vec<(EntryId, Decision, Option<String>)>>,
        fetches: Mutex<usize>,
        fail_fetch: Mutex<bool>,
        fail_decide: bool,
        decide_delay: Option<Duration>,
        /// Per-id override of `decide_delay`.
        decide_delays: HashMap<String, Duration>,
        /// Delay applied after the snapshot is taken, keyed by 1-based fetch number.
        fetch_delays: HashMap<usize, Duration>,
    }

    impl FakeBackend {
        fn with_entries(entries: Vec<TimeEntry>) -> Self {
            Self {
                entries: Mutex::new(entries),
                ..Default::default()
            }
        }

        fn set_status(&self, id: &str, status: EntryStatus) {
            let mut entries = self.entries.lock();
            if let Some(entry) = entries.iter_mut().find(|e| e.id.as_str() == id) {
                entry.status = status;
            }
        }
    }

    impl Backend for FakeBackend {
        async fn fetch_work_times(&self) -> Result<Vec<ArbeitszeitEntry>> {
            Ok(Vec::new())
        }

        async fn fetch_time_entries(&self) -> Result<Vec<TimeEntry>> {
            let fetch = {
                let mut fetches = self.fetches.lock();
                *fetches += 1;
                *fetches
            };
            if *self.fail_fetch.lock() {
                return Err(Error::Fetch("503 Service Unavailable".to_string()));
            }
            let snapshot = self.entries.lock().clone();
            if let Some(delay) = self.fetch_delays.get(&fetch) {
                tokio::time::sleep(*delay).await;
            }
            Ok(snapshot)
        }

        async fn decide(&self, id: &EntryId, decision: Decision, comment: Option<&str>) -> Result<()> {
            if let Some(delay) = self.decide_delays.get(id.as_str()).copied().or(self.decide_delay) {
                tokio::time::sleep(delay).await;
            }
            if self.fail_decide {
                return Err(Error::Fetch("500 Internal Server Error".to_string()));
            }
            self.set_status(id.as_str(), decision.target());
            self.decisions.lock().push((id.clone(), decision, comment.map(str::to_string)));
            Ok(())
        }

        async fn create_entry(&self, draft: &TimeEntryDraft) -> Result<()> {
            let mut value = serde_json::to_value(draft.submission()?).unwrap();
            let mut entries = self.entries.lock();
            value["id"] = serde_json::json!(100 + entries.len());
            entries.push(serde_json::from_value(value).unwrap());
            Ok(())
        }
    }

    fn time_entry(id: i64, status: &str) -> TimeEntry {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "elevatorId": format!("AZ-{}", id),
            "location": "Hauptstrasse 1",
            "activityType": "maintenance",
            "date": "2024-01-15",
            "startTime": "08:00",
            "endTime": "12:00",
            "emergencyWeek": false,
            "status": status,
            "mitarbeiter": "K. Schmidt"
        }))
        .unwrap()
    }

    struct ApprovalTestContext {
        workflow: ApprovalWorkflow<FakeBackend>,
    }

    impl AsyncTestContext for ApprovalTestContext {
        async fn setup() -> Self {
            let backend = FakeBackend::with_entries(vec![
                time_entry(1, "pending"),
                time_entry(2, "approved"),
                time_entry(3, "pending"),
                time_entry(4, "rejected"),
            ]);
            let workflow = ApprovalWorkflow::new(backend);
            workflow.reload().await.unwrap();
            ApprovalTestContext { workflow }
        }
    }

    fn entry_id(n: i64) -> EntryId {
        EntryId::from(n)
    }

    fn ids(entries: &[TimeEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_list_pending_keeps_backend_order(ctx: &mut ApprovalTestContext) {
        assert_eq!(ids(&ctx.workflow.list_pending()), vec!["1", "3"]);
        assert_eq!(ctx.workflow.entries().len(), 4);
    }

    #[tokio::test]
    async fn test_list_pending_two_entries() {
        let workflow = ApprovalWorkflow::new(FakeBackend::with_entries(vec![time_entry(1, "pending"), time_entry(2, "approved")]));
        assert!(workflow.list_pending().is_empty());

        workflow.reload().await.unwrap();
        let pending = workflow.list_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, entry_id(1));
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_approve_pending_entry(ctx: &mut ApprovalTestContext) {
        let id = EntryId::from("1");
        assert_eq!(ctx.workflow.approve(&id).await.unwrap(), EntryStatus::Approved);
        assert_eq!(ctx.workflow.status_of(&id), Some(EntryStatus::Approved));
        assert_eq!(ids(&ctx.workflow.list_pending()), vec!["3"]);
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_reject_pending_entry_with_comment(ctx: &mut ApprovalTestContext) {
        let id = entry_id(3);
        let status = ctx.workflow.decide(&id, Decision::Reject, Some("missing notes")).await.unwrap();
        assert_eq!(status, EntryStatus::Rejected);
        assert_eq!(ctx.workflow.status_of(&id), Some(EntryStatus::Rejected));

        let decisions = ctx.workflow.backend().decisions.lock().clone();
        assert_eq!(decisions, vec![(id, Decision::Reject, Some("missing notes".to_string()))]);
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_terminal_entries_refuse_decisions(ctx: &mut ApprovalTestContext) {
        let approved = entry_id(2);
        match ctx.workflow.reject(&approved).await {
            Err(Error::InvalidTransition { id, from, to }) => {
                assert_eq!(id, approved);
                assert_eq!(from, EntryStatus::Approved);
                assert_eq!(to, EntryStatus::Rejected);
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }

        let rejected = entry_id(4);
        assert!(matches!(ctx.workflow.approve(&rejected).await, Err(Error::InvalidTransition { .. })));
        assert!(ctx.workflow.backend().decisions.lock().is_empty());
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_second_decision_on_same_entry_fails(ctx: &mut ApprovalTestContext) {
        let id = entry_id(1);
        ctx.workflow.approve(&id).await.unwrap();

        assert!(matches!(ctx.workflow.approve(&id).await, Err(Error::InvalidTransition { .. })));
        assert!(matches!(ctx.workflow.reject(&id).await, Err(Error::InvalidTransition { .. })));
        assert_eq!(ctx.workflow.backend().decisions.lock().len(), 1);
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_unknown_entry(ctx: &mut ApprovalTestContext) {
        let result = ctx.workflow.approve(&entry_id(99)).await;
        assert!(matches!(result, Err(Error::EntryNotFound(id)) if id == entry_id(99)));
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_reload_reflects_backend_changes(ctx: &mut ApprovalTestContext) {
        ctx.workflow.backend().set_status("1", EntryStatus::Approved);
        assert_eq!(ctx.workflow.status_of(&entry_id(1)), Some(EntryStatus::Pending));

        assert_eq!(ctx.workflow.reload().await.unwrap(), 4);
        assert_eq!(ctx.workflow.status_of(&entry_id(1)), Some(EntryStatus::Approved));
        assert_eq!(ids(&ctx.workflow.list_pending()), vec!["3"]);
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_decision_triggers_reload(ctx: &mut ApprovalTestContext) {
        let before = *ctx.workflow.backend().fetches.lock();
        ctx.workflow.approve(&entry_id(3)).await.unwrap();
        assert_eq!(*ctx.workflow.backend().fetches.lock(), before + 1);
    }

    #[tokio::test]
    async fn test_first_decision_loads_entries() {
        let workflow = ApprovalWorkflow::new(FakeBackend::with_entries(vec![time_entry(7, "pending")]));
        assert_eq!(workflow.approve(&entry_id(7)).await.unwrap(), EntryStatus::Approved);
        assert_eq!(workflow.status_of(&entry_id(7)), Some(EntryStatus::Approved));
    }

    #[tokio::test]
    async fn test_backend_failure_is_reported() {
        let backend = FakeBackend {
            entries: Mutex::new(vec![time_entry(1, "pending")]),
            fail_decide: true,
            ..Default::default()
        };
        let workflow = ApprovalWorkflow::new(backend);
        workflow.reload().await.unwrap();

        assert!(matches!(workflow.approve(&entry_id(1)).await, Err(Error::Fetch(_))));
        assert_eq!(workflow.status_of(&entry_id(1)), Some(EntryStatus::Pending));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_entries() {
        let workflow = ApprovalWorkflow::new(FakeBackend::with_entries(vec![time_entry(1, "pending")]));
        workflow.reload().await.unwrap();

        *workflow.backend().fail_fetch.lock() = true;
        assert!(matches!(workflow.reload().await, Err(Error::Fetch(_))));
        assert_eq!(ids(&workflow.list_pending()), vec!["1"]);
    }

    #[tokio::test]
    async fn test_decision_stands_when_reload_fails() {
        let workflow = ApprovalWorkflow::new(FakeBackend::with_entries(vec![time_entry(1, "pending")]));
        workflow.reload().await.unwrap();

        *workflow.backend().fail_fetch.lock() = true;
        assert_eq!(workflow.approve(&entry_id(1)).await.unwrap(), EntryStatus::Approved);
        assert_eq!(workflow.backend().decisions.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_decisions_on_same_entry() {
        let backend = FakeBackend {
            entries: Mutex::new(vec![time_entry(1, "pending")]),
            decide_delay: Some(Duration::from_millis(50)),
            ..Default::default()
        };
        let workflow = ApprovalWorkflow::new(backend);
        workflow.reload().await.unwrap();

        let id = entry_id(1);
        let (first, second) = tokio::join!(workflow.approve(&id), workflow.reject(&id));

        assert_eq!(first.unwrap(), EntryStatus::Approved);
        assert!(matches!(second, Err(Error::TransitionInFlight(_))));
        assert_eq!(workflow.status_of(&id), Some(EntryStatus::Approved));
        assert_eq!(workflow.backend().decisions.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_decisions_on_different_entries() {
        let backend = FakeBackend {
            entries: Mutex::new(vec![time_entry(1, "pending"), time_entry(2, "pending")]),
            decide_delay: Some(Duration::from_millis(10)),
            ..Default::default()
        };
        let workflow = ApprovalWorkflow::new(backend);
        workflow.reload().await.unwrap();

        let (a, b) = (entry_id(1), entry_id(2));
        let (first, second) = tokio::join!(workflow.approve(&a), workflow.reject(&b));

        assert_eq!(first.unwrap(), EntryStatus::Approved);
        assert_eq!(second.unwrap(), EntryStatus::Rejected);
        assert!(workflow.list_pending().is_empty());
    }

    #[tokio::test]
    async fn test_slow_reload_does_not_overwrite_newer_one() {
        // Fetch 2 follows the first approval but answers after fetch 3.
        let backend = FakeBackend {
            entries: Mutex::new(vec![time_entry(1, "pending"), time_entry(2, "pending")]),
            decide_delays: HashMap::from([
                ("1".to_string(), Duration::from_millis(10)),
                ("2".to_string(), Duration::from_millis(30)),
            ]),
            fetch_delays: HashMap::from([(2, Duration::from_millis(80))]),
            ..Default::default()
        };
        let workflow = ApprovalWorkflow::new(backend);
        workflow.reload().await.unwrap();

        let (a, b) = (entry_id(1), entry_id(2));
        let (first, second) = tokio::join!(workflow.approve(&a), workflow.approve(&b));
        assert_eq!(first.unwrap(), EntryStatus::Approved);
        assert_eq!(second.unwrap(), EntryStatus::Approved);
        assert_eq!(*workflow.backend().fetches.lock(), 3);

        assert_eq!(workflow.status_of(&b), Some(EntryStatus::Approved));
        assert!(workflow.list_pending().is_empty());
        assert!(matches!(workflow.approve(&b).await, Err(Error::InvalidTransition { .. })));
        assert_eq!(workflow.backend().decisions.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_entry_is_free_again_after_failed_decision() {
        let backend = FakeBackend {
            entries: Mutex::new(vec![time_entry(1, "approved")]),
            ..Default::default()
        };
        let workflow = ApprovalWorkflow::new(backend);
        workflow.reload().await.unwrap();
        let id = entry_id(1);

        assert!(matches!(workflow.approve(&id).await, Err(Error::InvalidTransition { .. })));
        assert!(matches!(workflow.approve(&id).await, Err(Error::InvalidTransition { .. })));
    }

    fn draft(start: u32, end: u32) -> TimeEntryDraft {
        TimeEntryDraft {
            elevator_id: "AZ-200".to_string(),
            location: "Marktplatz 2".to_string(),
            activity_type: "maintenance".to_string(),
            other_activity: None,
            notes: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
            emergency_week: true,
            mitarbeiter: "K. Schmidt".to_string(),
        }
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_submitted_entry_is_pending(ctx: &mut ApprovalTestContext) {
        ctx.workflow.submit(&draft(7, 9)).await.unwrap();

        let pending = ctx.workflow.list_pending();
        assert_eq!(ids(&pending), vec!["1", "3", "104"]);
        assert_eq!(pending[2].status, EntryStatus::Pending);
        assert!(pending[2].emergency_week);
        assert_eq!(pending[2].duration_minutes(), Some(120));
    }

    #[test_context(ApprovalTestContext)]
    #[tokio::test]
    async fn test_invalid_draft_is_not_sent(ctx: &mut ApprovalTestContext) {
        let result = ctx.workflow.submit(&draft(9, 7)).await;
        assert!(matches!(result, Err(Error::InvalidEntry(_))));
        assert_eq!(ctx.workflow.entries().len(), 4);
    }
}
