// src/services/match_service.rs
//
// Room matching and the statistics derived from it. Nothing here is
// cached; every call re-reads the tables.

use std::sync::Arc;

use crate::domain::{CategoryCount, DashboardStats, FoundStatus, LostStatus, RoomMatch};
use crate::error::AppResult;
use crate::repositories::{FoundReportRepository, LostReportRepository, MatchRepository};

pub struct MatchService {
    match_repo: Arc<dyn MatchRepository>,
    lost_repo: Arc<dyn LostReportRepository>,
    found_repo: Arc<dyn FoundReportRepository>,
}

impl MatchService {
    pub fn new(
        match_repo: Arc<dyn MatchRepository>,
        lost_repo: Arc<dyn LostReportRepository>,
        found_repo: Arc<dyn FoundReportRepository>,
    ) -> Self {
        Self {
            match_repo,
            lost_repo,
            found_repo,
        }
    }

    /// Every (pending lost, available found) pair sharing a room.
    ///
    /// This is a full cross-match: a lost report shows up once per
    /// available found report in its room.
    pub fn find_matches(&self) -> AppResult<Vec<RoomMatch>> {
        self.match_repo.find_room_matches()
    }

    pub fn dashboard(&self) -> AppResult<DashboardStats> {
        let lost_count = self.lost_repo.count_by_status(LostStatus::Pending)?;
        let found_count = self.found_repo.count_by_status(FoundStatus::Available)?;
        let matches = self.find_matches()?;

        Ok(DashboardStats::new(lost_count, found_count, matches))
    }

    /// Lost reports of every status grouped by category
    pub fn lost_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        self.lost_repo.count_by_category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockFoundReportRepository, MockLostReportRepository, MockMatchRepository,
    };
    use mockall::predicate::eq;

    fn room_match(name: &str, item: &str, room: &str) -> RoomMatch {
        RoomMatch {
            reporter_name: name.to_string(),
            item_name: item.to_string(),
            room: room.to_string(),
        }
    }

    #[test]
    fn test_dashboard_counts_only_active_records() {
        let mut lost_repo = MockLostReportRepository::new();
        lost_repo
            .expect_count_by_status()
            .with(eq(LostStatus::Pending))
            .times(1)
            .returning(|_| Ok(3));

        let mut found_repo = MockFoundReportRepository::new();
        found_repo
            .expect_count_by_status()
            .with(eq(FoundStatus::Available))
            .times(1)
            .returning(|_| Ok(2));

        let mut match_repo = MockMatchRepository::new();
        match_repo.expect_find_room_matches().times(1).returning(|| {
            Ok(vec![
                room_match("Asha", "Pen", "201"),
                room_match("Asha", "Pen", "201"),
            ])
        });

        let service = MatchService::new(
            Arc::new(match_repo),
            Arc::new(lost_repo),
            Arc::new(found_repo),
        );

        let stats = service.dashboard().unwrap();
        assert_eq!(stats.lost_count, 3);
        assert_eq!(stats.found_count, 2);
        assert_eq!(stats.match_count, 2);
        assert_eq!(stats.matches.len(), 2);
    }

    #[test]
    fn test_dashboard_propagates_storage_errors() {
        let mut lost_repo = MockLostReportRepository::new();
        lost_repo
            .expect_count_by_status()
            .returning(|_| Err(crate::error::AppError::Pool("timed out".to_string())));

        let service = MatchService::new(
            Arc::new(MockMatchRepository::new()),
            Arc::new(lost_repo),
            Arc::new(MockFoundReportRepository::new()),
        );

        let err = service.dashboard().unwrap_err();
        assert!(err.is_storage());
    }
}
