// src/services/export_service.rs
//
// Flat CSV export of both tables, unfiltered.

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::repositories::{FoundReportRepository, LostReportRepository, DATE_FORMAT};

pub const LOST_SECTION_TITLE: &str = "=== LOST ITEMS ===";
pub const FOUND_SECTION_TITLE: &str = "=== FOUND ITEMS ===";

pub const LOST_COLUMNS: [&str; 8] = ["ID", "Name", "Roll", "Item", "Room", "Category", "Date", "Status"];
pub const FOUND_COLUMNS: [&str; 7] = ["ID", "Finder", "Item", "Room", "Category", "Date", "Status"];

const LINE_ENDING: &str = "\r\n";

pub struct ExportService {
    lost_repo: Arc<dyn LostReportRepository>,
    found_repo: Arc<dyn FoundReportRepository>,
}

impl ExportService {
    pub fn new(
        lost_repo: Arc<dyn LostReportRepository>,
        found_repo: Arc<dyn FoundReportRepository>,
    ) -> Self {
        Self {
            lost_repo,
            found_repo,
        }
    }

    /// Serialize every lost and found report (any status) as CSV.
    ///
    /// Layout: lost title, lost header, lost rows in id order, one blank
    /// line, found title, found header, found rows in id order.
    pub fn export_all(&self) -> AppResult<String> {
        let lost_rows = self
            .lost_repo
            .list_in_id_order()?
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.reporter_name,
                    r.reporter_roll.unwrap_or_default(),
                    r.item_name,
                    r.room.unwrap_or_default(),
                    r.category.to_string(),
                    r.reported_date.format(DATE_FORMAT).to_string(),
                    r.status.to_string(),
                ]
            });

        let found_rows = self
            .found_repo
            .list_in_id_order()?
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.finder_name.unwrap_or_default(),
                    r.item_name,
                    r.room.unwrap_or_default(),
                    r.category.to_string(),
                    r.found_date.format(DATE_FORMAT).to_string(),
                    r.status.to_string(),
                ]
            });

        let mut out = write_section(Vec::new(), LOST_SECTION_TITLE, &LOST_COLUMNS, lost_rows)?;
        out.extend_from_slice(LINE_ENDING.as_bytes());
        let out = write_section(out, FOUND_SECTION_TITLE, &FOUND_COLUMNS, found_rows)?;

        String::from_utf8(out).map_err(|e| AppError::Other(format!("Export is not UTF-8: {}", e)))
    }

    /// Write `export_all()` into `dir` under today's date-stamped name
    pub fn write_export(&self, dir: &Path) -> AppResult<PathBuf> {
        let contents = self.export_all()?;

        std::fs::create_dir_all(dir)?;
        let path = dir.join(export_file_name(Local::now().date_naive()));
        std::fs::write(&path, contents)?;

        log::info!("Exported register to {}", path.display());
        Ok(path)
    }
}

/// `lost_found_export_YYYYMMDD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("lost_found_export_{}.csv", date.format("%Y%m%d"))
}

fn write_section<I>(buffer: Vec<u8>, title: &str, columns: &[&str], rows: I) -> AppResult<Vec<u8>>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(buffer);

    writer.write_record([title])?;
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| AppError::Io(e.into_error()))
}
