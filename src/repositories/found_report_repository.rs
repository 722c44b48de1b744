// src/repositories/found_report_repository.rs

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Category, FoundReport, FoundStatus, NewFoundReport};
use crate::error::{AppError, AppResult};
use crate::repositories::{like_pattern, DATE_FORMAT};

#[cfg_attr(test, mockall::automock)]
pub trait FoundReportRepository: Send + Sync {
    /// Insert a new report with status Available; returns the assigned id
    fn insert(&self, report: &NewFoundReport) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<FoundReport>>;
    fn list_newest_first(&self) -> AppResult<Vec<FoundReport>>;
    fn list_in_id_order(&self) -> AppResult<Vec<FoundReport>>;
    /// Reports whose item name contains `term`, id order
    fn search(&self, term: &str) -> AppResult<Vec<FoundReport>>;
    fn set_status(&self, id: i64, status: FoundStatus) -> AppResult<usize>;
    fn delete(&self, id: i64) -> AppResult<usize>;
    fn count_by_status(&self, status: FoundStatus) -> AppResult<u64>;
}

const SELECT_COLUMNS: &str = "SELECT id, finder_name, item_name, room, category, found_date, status
                              FROM found_items";

pub struct SqliteFoundReportRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFoundReportRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_report(row: &Row) -> Result<FoundReport, rusqlite::Error> {
        let found_date = NaiveDate::parse_from_str(&row.get::<_, String>("found_date")?, DATE_FORMAT)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let status = row
            .get::<_, String>("status")?
            .parse::<FoundStatus>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(FoundReport {
            id: row.get("id")?,
            finder_name: row.get("finder_name")?,
            item_name: row.get("item_name")?,
            room: row.get("room")?,
            category: Category::from(row.get::<_, String>("category")?),
            found_date,
            status,
        })
    }

    fn query_reports(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<FoundReport>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let reports: Vec<FoundReport> = stmt
            .query_map(args, Self::row_to_report)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(reports)
    }
}

impl FoundReportRepository for SqliteFoundReportRepository {
    fn insert(&self, report: &NewFoundReport) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO found_items (finder_name, item_name, room, category, found_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                report.finder_name,
                report.item_name,
                report.room,
                report.category.as_str(),
                report.found_date.format(DATE_FORMAT).to_string(),
                FoundStatus::Available.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<FoundReport>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;

        match stmt.query_row(params![id], Self::row_to_report) {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_newest_first(&self) -> AppResult<Vec<FoundReport>> {
        self.query_reports(&format!("{} ORDER BY id DESC", SELECT_COLUMNS), &[])
    }

    fn list_in_id_order(&self) -> AppResult<Vec<FoundReport>> {
        self.query_reports(&format!("{} ORDER BY id", SELECT_COLUMNS), &[])
    }

    fn search(&self, term: &str) -> AppResult<Vec<FoundReport>> {
        let pattern = like_pattern(term);
        self.query_reports(
            &format!("{} WHERE item_name LIKE ?1 ESCAPE '\\' ORDER BY id", SELECT_COLUMNS),
            &[&pattern],
        )
    }

    fn set_status(&self, id: i64, status: FoundStatus) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE found_items SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(rows)
    }

    fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let rows = conn.execute("DELETE FROM found_items WHERE id = ?1", params![id])?;
        Ok(rows)
    }

    fn count_by_status(&self, status: FoundStatus) -> AppResult<u64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM found_items WHERE status = ?1",
            params![status.as_str()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}
