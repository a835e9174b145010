use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    errors::ChequeError,
    records::RecordBook,
    utils::{app_data_dir, ensure_dir, records_file_in},
};

use super::{RecordStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// File-backed store keeping every saved cheque in one JSON document.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    records_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let records_file = records_file_in(&root);
        Ok(Self { root, records_file })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn records_path(&self) -> &Path {
        &self.records_file
    }
}

impl RecordStore for JsonStorage {
    fn save(&self, book: &RecordBook) -> Result<()> {
        let json = serde_json::to_string_pretty(book)?;
        let tmp = tmp_path(&self.records_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.records_file)?;
        debug!(records = book.len(), path = %self.records_file.display(), "record book saved");
        Ok(())
    }

    /// A missing file is an empty book, not an error.
    fn load(&self) -> Result<RecordBook> {
        if !self.records_file.exists() {
            return Ok(RecordBook::new());
        }
        let data = fs::read_to_string(&self.records_file)?;
        let book: RecordBook = serde_json::from_str(&data)?;
        if book.schema_version > RecordBook::schema_version_default() {
            return Err(ChequeError::StorageError(format!(
                "records file `{}` is from a newer schema version",
                self.records_file.display()
            )));
        }
        Ok(book)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::SavedChequeRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_record() -> SavedChequeRecord {
        SavedChequeRecord::new(
            "Kenya Power",
            1500,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            "Equity Bank",
            "Invoice #1024",
            "ONE THOUSAND, FIVE HUNDRED ***",
        )
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut book = RecordBook::new();
        book.add(sample_record());
        storage.save(&book).expect("save book");
        let loaded = storage.load().expect("load book");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records[0].payee, "Kenya Power");
    }

    #[test]
    fn missing_file_loads_as_an_empty_book() {
        let (storage, _guard) = storage_with_temp_dir();
        let book = storage.load().expect("load book");
        assert!(book.is_empty());
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut book = RecordBook::new();
        book.schema_version = RecordBook::schema_version_default() + 1;
        storage.save(&book).expect("save book");
        assert!(storage.load().is_err());
    }

    #[test]
    fn unknown_bank_in_a_stored_record_still_loads() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut book = RecordBook::new();
        let mut record = sample_record();
        record.bank = "Defunct Bank".into();
        book.add(record);
        storage.save(&book).expect("save book");
        let loaded = storage.load().expect("load book");
        assert_eq!(loaded.records[0].bank, "Defunct Bank");
        assert!(crate::layout::layout_for_bank(&loaded.records[0].bank).is_none());
    }
}
