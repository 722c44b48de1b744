// src/repositories/lost_report_repository.rs
//
// Lost report persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Category, CategoryCount, LostReport, LostStatus, NewLostReport};
use crate::error::{AppError, AppResult};
use crate::repositories::{like_pattern, DATE_FORMAT};

#[cfg_attr(test, mockall::automock)]
pub trait LostReportRepository: Send + Sync {
    /// Insert a new report with status Pending; returns the assigned id
    fn insert(&self, report: &NewLostReport) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<LostReport>>;
    /// Most recent id first
    fn list_newest_first(&self) -> AppResult<Vec<LostReport>>;
    /// Insertion (id) order
    fn list_in_id_order(&self) -> AppResult<Vec<LostReport>>;
    /// Reports whose item or reporter name contains `term`, id order
    fn search(&self, term: &str) -> AppResult<Vec<LostReport>>;
    /// Returns the number of rows touched (0 when the id is unknown)
    fn set_status(&self, id: i64, status: LostStatus) -> AppResult<usize>;
    /// Returns the number of rows removed (0 when the id is unknown)
    fn delete(&self, id: i64) -> AppResult<usize>;
    fn count_by_status(&self, status: LostStatus) -> AppResult<u64>;
    fn count_by_category(&self) -> AppResult<Vec<CategoryCount>>;
}

const SELECT_COLUMNS: &str = "SELECT id, reporter_name, reporter_roll, item_name, room,
                                     category, reported_date, status
                              FROM lost_items";

pub struct SqliteLostReportRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteLostReportRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to LostReport - returns rusqlite::Error for query_map compatibility
    fn row_to_report(row: &Row) -> Result<LostReport, rusqlite::Error> {
        let date_str: String = row.get("reported_date")?;
        let reported_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let status_str: String = row.get("status")?;
        let status = status_str
            .parse::<LostStatus>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let category: String = row.get("category")?;

        Ok(LostReport {
            id: row.get("id")?,
            reporter_name: row.get("reporter_name")?,
            reporter_roll: row.get("reporter_roll")?,
            item_name: row.get("item_name")?,
            room: row.get("room")?,
            category: Category::from(category),
            reported_date,
            status,
        })
    }

    fn query_reports(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<LostReport>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let reports: Vec<LostReport> = stmt
            .query_map(args, Self::row_to_report)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(reports)
    }
}

impl LostReportRepository for SqliteLostReportRepository {
    fn insert(&self, report: &NewLostReport) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO lost_items (
                reporter_name, reporter_roll, item_name, room, category, reported_date, status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                report.reporter_name,
                report.reporter_roll,
                report.item_name,
                report.room,
                report.category.as_str(),
                report.reported_date.format(DATE_FORMAT).to_string(),
                LostStatus::Pending.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<LostReport>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;

        match stmt.query_row(params![id], Self::row_to_report) {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_newest_first(&self) -> AppResult<Vec<LostReport>> {
        self.query_reports(&format!("{} ORDER BY id DESC", SELECT_COLUMNS), &[])
    }

    fn list_in_id_order(&self) -> AppResult<Vec<LostReport>> {
        self.query_reports(&format!("{} ORDER BY id", SELECT_COLUMNS), &[])
    }

    fn search(&self, term: &str) -> AppResult<Vec<LostReport>> {
        let pattern = like_pattern(term);
        self.query_reports(
            &format!(
                "{} WHERE item_name LIKE ?1 ESCAPE '\\' OR reporter_name LIKE ?1 ESCAPE '\\'
                 ORDER BY id",
                SELECT_COLUMNS
            ),
            &[&pattern],
        )
    }

    fn set_status(&self, id: i64, status: LostStatus) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE lost_items SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(rows)
    }

    fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let rows = conn.execute("DELETE FROM lost_items WHERE id = ?1", params![id])?;
        Ok(rows)
    }

    fn count_by_status(&self, status: LostStatus) -> AppResult<u64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM lost_items WHERE status = ?1",
            params![status.as_str()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn count_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) FROM lost_items GROUP BY category ORDER BY category",
        )?;

        let counts: Vec<CategoryCount> = stmt
            .query_map([], |row| {
                let category: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok(CategoryCount {
                    category: Category::from(category),
                    count: count as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(counts)
    }
}
