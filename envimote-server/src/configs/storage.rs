use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::SensorRow;

const COLUMNS: [&str; 8] = [
    "timestamp", "lux", "temp", "rssi", "uptime", "accel_x", "accel_y", "accel_z",
];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data log I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("data log format: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only tabular log of everything the collector has ever ingested.
///
/// Rows are only ever appended; reads re-scan the file. Fine at this data
/// volume, and the file stays usable as a plain spreadsheet import.
pub struct Storage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Storage {
    /// Open the log, creating it with a header row when absent.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if !path.exists() {
            let mut writer = WriterBuilder::new().from_writer(File::create(&path)?);
            writer.write_record(COLUMNS)?;
            writer.flush()?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, row: &SensorRow) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;

        Ok(())
    }

    /// The most recent `limit` rows, skipping any row with an empty field.
    pub async fn recent_complete(&self, limit: usize) -> Result<Vec<SensorRow>, StorageError> {
        let _guard = self.lock.lock().await;

        let mut reader = ReaderBuilder::new().from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut rows: Vec<SensorRow> = Vec::new();
        for record in reader.into_records() {
            let record = record?;
            if record.iter().any(|field| field.is_empty()) {
                continue;
            }
            rows.push(record.deserialize(Some(&headers))?);
        }

        let skip = rows.len().saturating_sub(limit);
        Ok(rows.split_off(skip))
    }
}
