// src/services/record_service_tests.rs
//
// Store-backed tests for the record lifecycle and room matching.
//
// INVARIANTS TESTED:
// - Invalid submissions fail and persist nothing
// - Ids are fresh and never reused within a kind
// - Matching is a full cross-match over active records with a room
// - Closing a record removes it from matching; closing is idempotent
// - Unknown ids are no-ops for status updates and deletes
// - Invalid kinds are rejected before storage is touched
// - Export rows equal unfiltered record counts

#[cfg(test)]
mod lifecycle_tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::db::{create_memory_pool, initialize_database};
    use crate::domain::{FoundStatus, InventoryFilter, LostStatus, RecordKind, RoomMatch};
    use crate::error::AppError;
    use crate::events::{
        EventBus, ReportClosed, ReportDeleted, ReportFiled, DEFAULT_EVENT_LOG_CAPACITY,
    };
    use crate::repositories::{
        SqliteFoundReportRepository, SqliteLostReportRepository, SqliteMatchRepository,
    };
    use crate::services::*;

    struct Harness {
        records: Arc<RecordService>,
        lifecycle: LifecycleService,
        matcher: MatchService,
        inventory: InventoryService,
        export: ExportService,
        bus: Arc<EventBus>,
    }

    fn harness() -> Harness {
        let pool = Arc::new(create_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let lost_repo = Arc::new(SqliteLostReportRepository::new(pool.clone()));
        let found_repo = Arc::new(SqliteFoundReportRepository::new(pool.clone()));
        let match_repo = Arc::new(SqliteMatchRepository::new(pool.clone()));
        let bus = Arc::new(EventBus::new());

        let records = Arc::new(RecordService::new(
            lost_repo.clone(),
            found_repo.clone(),
            bus.clone(),
        ));

        Harness {
            lifecycle: LifecycleService::new(records.clone()),
            matcher: MatchService::new(match_repo, lost_repo.clone(), found_repo.clone()),
            inventory: InventoryService::new(lost_repo.clone(), found_repo.clone()),
            export: ExportService::new(lost_repo, found_repo),
            records,
            bus,
        }
    }

    fn lost(name: &str, item: &str, room: &str) -> CreateLostReportRequest {
        CreateLostReportRequest {
            reporter_name: name.to_string(),
            reporter_roll: Some("CS001".to_string()),
            item_name: item.to_string(),
            room: Some(room.to_string()),
            category: None,
        }
    }

    fn found(item: &str, room: &str) -> CreateFoundReportRequest {
        CreateFoundReportRequest {
            finder_name: Some("Ravi".to_string()),
            item_name: item.to_string(),
            room: Some(room.to_string()),
            category: Some("Electronics".to_string()),
        }
    }

    fn match_set(matches: Vec<RoomMatch>) -> Vec<RoomMatch> {
        let mut sorted = matches;
        sorted.sort();
        sorted
    }

    #[test]
    fn test_empty_required_fields_rejected_and_nothing_persisted() {
        let h = harness();

        let err = h.records.create_lost(lost("Asha", "", "101")).unwrap_err();
        assert!(err.is_validation());

        let err = h.records.create_lost(lost("", "Pen", "101")).unwrap_err();
        assert!(err.is_validation());

        let err = h.records.create_found(found("  ", "101")).unwrap_err();
        assert!(err.is_validation());

        assert!(h.records.list_lost().unwrap().is_empty());
        assert!(h.records.list_found().unwrap().is_empty());
        assert!(h.bus.get_event_log().is_empty());
    }

    #[test]
    fn test_defaults_applied_on_create() {
        let h = harness();
        let id = h
            .records
            .create_lost(CreateLostReportRequest {
                reporter_name: "Asha".to_string(),
                item_name: "Notebook".to_string(),
                room: Some(String::new()),
                ..Default::default()
            })
            .unwrap();

        let report = h.records.get_lost(id).unwrap().unwrap();
        assert_eq!(report.category.to_string(), "Other");
        assert_eq!(report.status, LostStatus::Pending);
        assert_eq!(report.room, None);
        assert_eq!(report.reporter_roll, None);
    }

    #[test]
    fn test_ids_are_fresh_within_each_kind() {
        let h = harness();
        let mut seen = HashSet::new();

        for i in 0..5 {
            let id = h.records.create_lost(lost("A", &format!("Item {}", i), "1")).unwrap();
            assert!(seen.insert(id), "id {} reused", id);
        }

        let newest = *seen.iter().max().unwrap();
        h.records.delete(RecordKind::Lost, newest).unwrap();
        let next = h.records.create_lost(lost("A", "After delete", "1")).unwrap();
        assert!(next > newest);

        let found_id = h.records.create_found(found("Mouse", "1")).unwrap();
        assert_eq!(h.records.get_found(found_id).unwrap().unwrap().item_name, "Mouse");
    }

    #[test]
    fn test_lists_are_newest_first() {
        let h = harness();
        let a = h.records.create_found(found("A", "1")).unwrap();
        let b = h.records.create_found(found("B", "1")).unwrap();

        let ids: Vec<i64> = h.records.list_found().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_match_fans_out_per_found_report() {
        let h = harness();
        h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        h.records.create_found(found("Phone", "201")).unwrap();
        h.records.create_found(found("Charger", "201")).unwrap();
        h.records.create_found(found("Bottle", "305")).unwrap();

        let matches = h.matcher.find_matches().unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.reporter_name == "Asha" && m.room == "201"));
    }

    #[test]
    fn test_rooms_must_be_identical_and_present() {
        let h = harness();
        h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        h.records.create_lost(lost("Dev", "Keys", "")).unwrap();
        h.records.create_found(found("Phone", "201A")).unwrap();
        h.records.create_found(found("Keys", "")).unwrap();

        assert!(h.matcher.find_matches().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_rooms_are_kept_and_compared_exactly() {
        let h = harness();
        let id = h.records.create_lost(lost("Asha", "Phone", " ")).unwrap();
        h.records.create_found(found("Phone", " ")).unwrap();
        h.records.create_found(found("Cable", "  ")).unwrap();

        assert_eq!(h.records.get_lost(id).unwrap().unwrap().room.as_deref(), Some(" "));

        let matches = h.matcher.find_matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].room, " ");
    }

    #[test]
    fn test_disjoint_rooms_give_no_matches() {
        let h = harness();
        for i in 0..3 {
            h.records.create_lost(lost("L", "Item", &format!("L{}", i))).unwrap();
        }
        for i in 0..4 {
            h.records.create_found(found("Item", &format!("F{}", i))).unwrap();
        }

        assert_eq!(h.matcher.find_matches().unwrap().len(), 0);
    }

    #[test]
    fn test_shared_room_gives_n_times_m_matches() {
        let h = harness();
        let (n, m) = (3, 4);
        for i in 0..n {
            h.records.create_lost(lost(&format!("L{}", i), "Item", "101")).unwrap();
        }
        for _ in 0..m {
            h.records.create_found(found("Item", "101")).unwrap();
        }

        let matches = h.matcher.find_matches().unwrap();
        assert_eq!(matches.len(), n * m);

        let stats = h.matcher.dashboard().unwrap();
        assert_eq!(stats.lost_count, n as u64);
        assert_eq!(stats.found_count, m as u64);
        assert_eq!(stats.match_count, n * m);
        assert_eq!(match_set(stats.matches), match_set(matches));
    }

    #[test]
    fn test_resolving_removes_from_matching() {
        let h = harness();
        let lost_id = h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        h.records.create_found(found("Phone", "201")).unwrap();
        assert_eq!(h.matcher.find_matches().unwrap().len(), 1);

        h.lifecycle.resolve("lost", lost_id).unwrap();

        assert!(h.matcher.find_matches().unwrap().is_empty());
        let report = h.records.get_lost(lost_id).unwrap().unwrap();
        assert_eq!(report.status, LostStatus::Resolved);
        assert_eq!(h.matcher.dashboard().unwrap().lost_count, 0);
    }

    #[test]
    fn test_claiming_removes_from_matching() {
        let h = harness();
        h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        let found_id = h.records.create_found(found("Phone", "201")).unwrap();

        h.lifecycle.resolve("found", found_id).unwrap();

        assert!(h.matcher.find_matches().unwrap().is_empty());
        assert_eq!(
            h.records.get_found(found_id).unwrap().unwrap().status,
            FoundStatus::Claimed
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let h = harness();
        let id = h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();

        h.records.set_status(RecordKind::Lost, id).unwrap();
        h.records.set_status(RecordKind::Lost, id).unwrap();

        assert_eq!(h.records.get_lost(id).unwrap().unwrap().status, LostStatus::Resolved);
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let h = harness();
        h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        let before = h.records.list_lost().unwrap();

        h.lifecycle.delete("lost", 9999).unwrap();
        h.lifecycle.resolve("found", 9999).unwrap();

        assert_eq!(h.records.list_lost().unwrap(), before);
    }

    #[test]
    fn test_invalid_kind_rejected_without_mutation() {
        let h = harness();
        let id = h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        h.bus.clear_event_log();

        let err = h.lifecycle.resolve("invalid", id).unwrap_err();
        assert!(matches!(err, AppError::InvalidKind(ref k) if k == "invalid"));

        let err = h.lifecycle.delete("LOST", id).unwrap_err();
        assert!(matches!(err, AppError::InvalidKind(_)));

        let report = h.records.get_lost(id).unwrap().unwrap();
        assert_eq!(report.status, LostStatus::Pending);
        assert!(h.bus.get_event_log().is_empty());
    }

    #[test]
    fn test_events_emitted_for_real_mutations_only() {
        let h = harness();
        let filed = Arc::new(AtomicUsize::new(0));
        let closed = Arc::new(AtomicUsize::new(0));
        let deleted = Arc::new(AtomicUsize::new(0));

        let c = filed.clone();
        h.bus.subscribe::<ReportFiled, _>(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = closed.clone();
        h.bus.subscribe::<ReportClosed, _>(move |e| {
            assert_eq!(e.status, "Claimed");
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = deleted.clone();
        h.bus.subscribe::<ReportDeleted, _>(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        let id = h.records.create_found(found("Phone", "201")).unwrap();
        h.records.set_status(RecordKind::Found, id).unwrap();
        h.records.delete(RecordKind::Found, id).unwrap();
        h.records.delete(RecordKind::Found, id).unwrap();

        assert_eq!(filed.load(Ordering::SeqCst), 1);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(deleted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_log_stays_bounded_under_churn() {
        let h = harness();

        for i in 0..(DEFAULT_EVENT_LOG_CAPACITY * 3) {
            let id = h.records.create_found(found(&format!("Item {}", i), "1")).unwrap();
            h.records.delete(RecordKind::Found, id).unwrap();
        }

        assert!(h.records.list_found().unwrap().is_empty());
        assert_eq!(h.bus.get_event_log().len(), DEFAULT_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn test_export_rows_match_unfiltered_counts() {
        let h = harness();
        let a = h.records.create_lost(lost("Asha", "Phone", "201")).unwrap();
        h.records.create_lost(lost("Dev", "Keys", "")).unwrap();
        h.records.create_lost(lost("Meera", "Wallet", "305")).unwrap();
        let f = h.records.create_found(found("Phone", "201")).unwrap();
        h.records.create_found(found("Keys", "")).unwrap();

        h.records.set_status(RecordKind::Lost, a).unwrap();
        h.records.set_status(RecordKind::Found, f).unwrap();

        let csv = h.export.export_all().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        let blank = lines.iter().position(|l| l.is_empty()).unwrap();

        // title + header + rows
        assert_eq!(blank - 2, 3);
        assert_eq!(lines.len() - blank - 3, 2);
        assert!(lines.iter().any(|l| l.ends_with(",Resolved")));
        assert!(lines.iter().any(|l| l.ends_with(",Claimed")));
    }

    #[test]
    fn test_inventory_search_and_categories() {
        let h = harness();
        h.records.create_lost(lost("Meera", "Blue Notebook", "101")).unwrap();
        h.records.create_lost(lost("Karan", "Umbrella", "102")).unwrap();
        h.records.create_found(found("Notebook", "103")).unwrap();

        let all = h.inventory.search("note", InventoryFilter::All).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, RecordKind::Lost);
        assert_eq!(all[1].kind, RecordKind::Found);
        assert_eq!(all[1].person.as_deref(), Some("Ravi"));

        let by_reporter = h.inventory.search("karan", InventoryFilter::Lost).unwrap();
        assert_eq!(by_reporter.len(), 1);

        let found_only = h.inventory.search("", InventoryFilter::Found).unwrap();
        assert_eq!(found_only.len(), 1);

        let categories = h.matcher.lost_by_category().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].count, 2);
    }
}
