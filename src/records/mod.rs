//! Saved cheque records, kept most recent first for quick reuse.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Immutable snapshot of a filled cheque, kept for recurring payees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedChequeRecord {
    pub id: Uuid,
    pub payee: String,
    pub amount: u64,
    pub date: NaiveDate,
    pub bank: String,
    #[serde(default)]
    pub memo: String,
    pub amount_in_words: String,
    pub created_at: DateTime<Utc>,
}

impl SavedChequeRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payee: impl Into<String>,
        amount: u64,
        date: NaiveDate,
        bank: impl Into<String>,
        memo: impl Into<String>,
        amount_in_words: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            payee: payee.into(),
            amount,
            date,
            bank: bank.into(),
            memo: memo.into(),
            amount_in_words: amount_in_words.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered collection of saved records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBook {
    #[serde(default = "RecordBook::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub records: Vec<SavedChequeRecord>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            records: Vec::new(),
        }
    }

    /// Newest records go to the front.
    pub fn add(&mut self, record: SavedChequeRecord) -> Uuid {
        let id = record.id;
        self.records.insert(0, record);
        id
    }

    pub fn find(&self, id: Uuid) -> Option<&SavedChequeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Removes the record, reporting whether it existed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for RecordBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(payee: &str) -> SavedChequeRecord {
        SavedChequeRecord::new(
            payee,
            1500,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            "Equity Bank",
            "Invoice #1024",
            "ONE THOUSAND, FIVE HUNDRED ***",
        )
    }

    #[test]
    fn newest_record_is_listed_first() {
        let mut book = RecordBook::new();
        book.add(sample("Kenya Power"));
        book.add(sample("Nairobi Water"));
        assert_eq!(book.records[0].payee, "Nairobi Water");
        assert_eq!(book.records[1].payee, "Kenya Power");
    }

    #[test]
    fn remove_reports_whether_the_record_existed() {
        let mut book = RecordBook::new();
        let id = book.add(sample("Kenya Power"));
        assert!(book.remove(id));
        assert!(!book.remove(id));
        assert!(book.is_empty());
    }

    #[test]
    fn find_resolves_by_id() {
        let mut book = RecordBook::new();
        let id = book.add(sample("Kenya Power"));
        assert_eq!(book.find(id).map(|r| r.payee.as_str()), Some("Kenya Power"));
    }
}
