//! File-backed record store with per-kind summary indexes
//!
//! Directory layout:
//! ```text
//! <data_dir>/
//! ├── assessments/
//! │   ├── assessment_<epoch-millis>.json
//! │   └── ...
//! ├── contacts/
//! │   └── contact_<epoch-millis>.json
//! ├── assessment-summary.jsonl
//! └── contact-summary.jsonl
//! ```
//!
//! Each submission produces two writes: the full record as its own JSON
//! file, then one projected line appended to the kind's summary index. The
//! two writes are not atomic with each other; a crash in between leaves the
//! record durable but un-indexed. The index is a derived view, never the
//! source of truth.

use crate::error::{Error, Result};
use crate::records::types::{FieldMap, RecordKind, SubmittedRecord, SummaryEntry};
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Durable store for form submissions
pub struct RecordStore {
    data_dir: PathBuf,
    /// Serializes summary-index appends per kind so concurrent submissions
    /// contribute exactly one intact line each.
    append_locks: [Mutex<()>; 2],
}

impl RecordStore {
    /// Open a store rooted at the given data directory, creating the
    /// per-kind record directories if needed.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        for kind in [RecordKind::Assessment, RecordKind::Contact] {
            tokio::fs::create_dir_all(data_dir.join(kind.dir_name())).await?;
        }

        Ok(Self {
            data_dir,
            append_locks: [Mutex::new(()), Mutex::new(())],
        })
    }

    /// Base data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, kind: RecordKind, id: &str) -> PathBuf {
        self.data_dir
            .join(kind.dir_name())
            .join(format!("{}.json", id))
    }

    fn summary_path(&self, kind: RecordKind) -> PathBuf {
        self.data_dir.join(kind.summary_file())
    }

    /// Persist a submission, returning the generated record id.
    ///
    /// The id is `<kind>_<epoch-millis>`; uniqueness relies on no two
    /// records of one kind arriving in the same millisecond.
    pub async fn submit(&self, kind: RecordKind, fields: FieldMap) -> Result<String> {
        let now = Utc::now();
        let record = SubmittedRecord {
            id: format!("{}_{}", kind.as_str(), now.timestamp_millis()),
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            fields,
        };

        // First write: the full record as its own durable file
        let json = serde_json::to_string_pretty(&record)?;
        let record_path = self.record_path(kind, &record.id);
        tokio::fs::write(&record_path, json).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", record_path.display(), e))
        })?;

        // Second write: one projected line appended to the summary index.
        // Not atomic with the first; a crash here leaves the record durable
        // but un-indexed.
        let entry = SummaryEntry::project(kind, &record);
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let summary_path = self.summary_path(kind);
        let _guard = self.append_locks[kind.index()].lock().await;
        let append = async {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&summary_path)
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        };
        append.await.map_err(|e| {
            Error::Storage(format!(
                "Failed to append to {}: {}",
                summary_path.display(),
                e
            ))
        })?;

        tracing::info!(kind = %kind, id = %record.id, "Record saved");

        Ok(record.id)
    }

    /// Read a record by id
    pub async fn get(&self, kind: RecordKind, id: &str) -> Result<SubmittedRecord> {
        // Record ids never contain path separators; anything shaped like a
        // path is not a record id.
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return Err(Error::NotFound {
                kind: kind.to_string(),
                id: id.to_string(),
            });
        }

        let path = self.record_path(kind, id);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    kind: kind.to_string(),
                    id: id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&data)?)
    }

    /// Read a kind's summary index, most recent first.
    ///
    /// A missing index means no submissions yet and yields an empty list.
    /// Unparsable lines are logged and skipped rather than failing the call.
    pub async fn list_summaries(&self, kind: RecordKind) -> Result<Vec<SummaryEntry>> {
        let path = self.summary_path(kind);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries: Vec<SummaryEntry> = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!(
                        kind = %kind,
                        "Skipping unparsable summary line in {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }

        entries.reverse();
        Ok(entries)
    }
}
