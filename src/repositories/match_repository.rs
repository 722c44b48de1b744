// src/repositories/match_repository.rs
//
// Room matching query. Read-only; recomputed on every call.

use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{FoundStatus, LostStatus, RoomMatch};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait MatchRepository: Send + Sync {
    /// One row per (pending lost, available found) pair with the same
    /// non-empty room. Row order is unspecified.
    fn find_room_matches(&self) -> AppResult<Vec<RoomMatch>>;
}

pub struct SqliteMatchRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMatchRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl MatchRepository for SqliteMatchRepository {
    fn find_room_matches(&self) -> AppResult<Vec<RoomMatch>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT l.reporter_name, l.item_name, l.room
             FROM lost_items l
             JOIN found_items f ON l.room = f.room
             WHERE l.status = ?1
               AND f.status = ?2
               AND l.room IS NOT NULL
               AND l.room != ''",
        )?;

        let matches: Vec<RoomMatch> = stmt
            .query_map(
                params![LostStatus::Pending.as_str(), FoundStatus::Available.as_str()],
                |row| {
                    Ok(RoomMatch {
                        reporter_name: row.get(0)?,
                        item_name: row.get(1)?,
                        room: row.get(2)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, initialize_database};

    fn pool() -> Arc<ConnectionPool> {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        Arc::new(pool)
    }

    #[test]
    fn test_only_active_records_with_a_room_match() {
        let pool = pool();
        pool.get()
            .unwrap()
            .execute_batch(
                "INSERT INTO lost_items (reporter_name, item_name, room, reported_date, status) VALUES
                    ('Asha', 'Phone', '201', '2024-01-01', 'Pending'),
                    ('Dev', 'Keys', '201', '2024-01-01', 'Resolved'),
                    ('Meera', 'Pen', NULL, '2024-01-01', 'Pending');
                 INSERT INTO found_items (item_name, room, found_date, status) VALUES
                    ('Phone', '201', '2024-01-02', 'Available'),
                    ('Cable', '201', '2024-01-02', 'Claimed'),
                    ('Pen', NULL, '2024-01-02', 'Available');",
            )
            .unwrap();

        let matches = SqliteMatchRepository::new(pool).find_room_matches().unwrap();

        assert_eq!(
            matches,
            vec![RoomMatch {
                reporter_name: "Asha".to_string(),
                item_name: "Phone".to_string(),
                room: "201".to_string(),
            }]
        );
    }
}
