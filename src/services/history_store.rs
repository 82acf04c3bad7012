use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use uuid::Uuid;
use crate::config::constants::{CONFIG_DIR_NAME, HISTORY_DIR_NAME};
use crate::errors::{LogTriageError, LogTriageResult};
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::history_page::HistoryPage;

/// Stores analyses as one JSON file per record.
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn default_location() -> Self {
        let dir = dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(HISTORY_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME).join(HISTORY_DIR_NAME));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Assigns identity and creation time, then persists.
    pub fn create(&self, owner: &str, raw_log: &str, outcome: AnalysisOutcome) -> LogTriageResult<AnalysisRecord> {
        let record = AnalysisRecord {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            created_at: Utc::now(),
            raw_log: raw_log.to_string(),
            source: outcome.source,
            attempts: outcome.attempts,
            result: outcome.result,
        };

        self.save(&record)?;
        log::info!("💾 Saved analysis {} to {}", record.id, self.dir.display());
        Ok(record)
    }

    pub fn save(&self, record: &AnalysisRecord) -> LogTriageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| LogTriageError::file_error(&self.dir.display().to_string(), "create history directory", &e.to_string()))?;

        let path = self.record_path(record.id);
        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content)
            .map_err(|e| LogTriageError::file_error(&path.display().to_string(), "write record", &e.to_string()))
    }

    pub fn get(&self, id: Uuid) -> LogTriageResult<AnalysisRecord> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(LogTriageError::record_not_found(&id.to_string()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| LogTriageError::file_error(&path.display().to_string(), "read record", &e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Newest first. `page` starts at 1.
    pub fn list(&self, owner: Option<&str>, page: usize, page_size: usize) -> LogTriageResult<HistoryPage> {
        if page == 0 {
            return Err(LogTriageError::validation_error("page", "0", "must be at least 1", Some("Pages start at 1")));
        }
        if page_size == 0 {
            return Err(LogTriageError::validation_error("page_size", "0", "must be at least 1", Some("Use --page-size 20")));
        }

        let mut records: Vec<AnalysisRecord> = self
            .load_all()?
            .into_iter()
            .filter(|record| owner.map_or(true, |owner| record.owner == owner))
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        let total = records.len();
        let total_pages = total.div_ceil(page_size);
        let records = records
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        Ok(HistoryPage {
            records,
            page,
            page_size,
            total,
            total_pages,
        })
    }

    pub fn delete(&self, id: Uuid) -> LogTriageResult<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(LogTriageError::record_not_found(&id.to_string()));
        }

        fs::remove_file(&path)
            .map_err(|e| LogTriageError::file_error(&path.display().to_string(), "delete record", &e.to_string()))?;
        log::info!("🗑️ Deleted analysis {}", id);
        Ok(())
    }

    fn load_all(&self) -> LogTriageResult<Vec<AnalysisRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .map_err(|e| LogTriageError::file_error(&self.dir.display().to_string(), "list history", &e.to_string()))?;

        let mut records = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            match fs::read_to_string(&path).map_err(LogTriageError::from).and_then(|content| {
                serde_json::from_str::<AnalysisRecord>(&content).map_err(LogTriageError::from)
            }) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("⚠️  Skipping unreadable record {}: {}", path.display(), e.technical_details()),
            }
        }

        Ok(records)
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use crate::enums::analysis_source::AnalysisSource;
    use crate::services::fallback_analyzer::FallbackAnalyzer;

    fn outcome(log: &str) -> AnalysisOutcome {
        AnalysisOutcome {
            result: FallbackAnalyzer::analyze(log),
            source: AnalysisSource::Fallback { reason: "test".to_string() },
            attempts: 2,
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path());

        let record = store.create("alice", "ERROR boom", outcome("ERROR boom")).unwrap();
        let loaded = store.get(record.id).unwrap();

        assert_eq!(loaded, record);
        assert_eq!(loaded.result.total_issues(), 1);
    }

    #[test]
    fn missing_record_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path());
        let id = Uuid::new_v4();

        assert_eq!(store.get(id), Err(LogTriageError::record_not_found(&id.to_string())));
        assert_eq!(store.delete(id), Err(LogTriageError::record_not_found(&id.to_string())));
    }

    #[test]
    fn listing_an_empty_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("never-created"));
        let page = store.list(None, 1, 10).unwrap();

        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn corrupt_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path());
        store.create("alice", "WARN x", outcome("WARN x")).unwrap();
        fs::write(dir.path().join("garbage.json"), "{ not a record").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.list(None, 1, 10).unwrap().total, 1);
    }

    #[test]
    fn zero_page_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path());
        assert!(matches!(store.list(None, 0, 10), Err(LogTriageError::ValidationError { .. })));
        assert!(matches!(store.list(None, 1, 0), Err(LogTriageError::ValidationError { .. })));
    }
}
