//! Cheque form state and the derived written-amount field.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ChequeError, Result},
    records::SavedChequeRecord,
    words,
};

/// The fields a user fills before printing or saving a cheque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChequeFormState {
    pub payee: String,
    /// Raw amount field as entered; may be empty or not yet numeric.
    pub amount: String,
    pub date: NaiveDate,
    pub bank: String,
    #[serde(default)]
    pub memo: String,
}

impl ChequeFormState {
    pub fn new_today() -> Self {
        Self {
            payee: String::new(),
            amount: String::new(),
            date: Local::now().date_naive(),
            bank: String::new(),
            memo: String::new(),
        }
    }

    /// Parsed whole-number amount, when the field holds one.
    pub fn amount_value(&self) -> Option<u64> {
        words::parse_amount(&self.amount)
    }

    /// The fields a record needs before it can be saved.
    pub fn validate_for_save(&self) -> Result<()> {
        if self.payee.trim().is_empty() || self.amount.trim().is_empty() || self.bank.trim().is_empty()
        {
            return Err(ChequeError::InvalidInput(
                "Please fill in payee, amount, and bank to save".into(),
            ));
        }
        Ok(())
    }

    /// The fields printing needs.
    pub fn validate_for_print(&self) -> Result<()> {
        if self.bank.trim().is_empty() {
            return Err(ChequeError::InvalidInput(
                "Please select a bank first".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ChequeFormState {
    fn default() -> Self {
        Self::new_today()
    }
}

/// Written-amount text with last-writer-wins between derivation and a
/// manual edit.
///
/// A manual override survives until the amount next changes, at which
/// point the derivation overwrites it. Editing the words never alters the
/// numeric amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmountWords {
    derived: String,
    override_text: Option<String>,
}

impl AmountWords {
    /// Re-derives the words from a changed amount, discarding any override.
    pub fn amount_changed(&mut self, raw_amount: &str) {
        self.derived = words::words_for(raw_amount);
        self.override_text = None;
    }

    /// Records a manual edit; the text is uppercased like the print view.
    pub fn edited(&mut self, text: &str) {
        self.override_text = Some(text.to_uppercase());
    }

    /// Restores the words a saved record carried.
    pub fn restored(&mut self, derived: String, saved: Option<String>) {
        self.derived = derived;
        self.override_text = saved;
    }

    /// The text currently shown and printed.
    pub fn current(&self) -> &str {
        self.override_text.as_deref().unwrap_or(&self.derived)
    }

    pub fn is_overridden(&self) -> bool {
        self.override_text.is_some()
    }
}

/// The form holder: field state plus the derived words, with the update
/// rules the cheque workflow expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChequeForm {
    pub state: ChequeFormState,
    pub words: AmountWords,
}

impl ChequeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a form around deserialized field state, deriving the words.
    pub fn from_state(state: ChequeFormState) -> Self {
        let mut form = Self {
            state,
            words: AmountWords::default(),
        };
        form.words.amount_changed(&form.state.amount);
        form
    }

    /// Updates the amount field and re-derives the words.
    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.state.amount = raw.into();
        self.words.amount_changed(&self.state.amount);
    }

    /// Applies a manual edit to the words; the amount stays untouched.
    pub fn edit_words(&mut self, text: &str) {
        self.words.edited(text);
    }

    /// Copies a saved record back into the form, refreshing the date to
    /// today. The saved words are restored verbatim when present, else
    /// re-derived from the amount.
    pub fn load_record(&mut self, record: &SavedChequeRecord) {
        self.state.payee = record.payee.clone();
        self.state.amount = record.amount.to_string();
        self.state.date = Local::now().date_naive();
        self.state.bank = record.bank.clone();
        self.state.memo = record.memo.clone();
        let derived = words::words_for(&self.state.amount);
        if record.amount_in_words.is_empty() {
            self.words.restored(derived, None);
        } else {
            self.words
                .restored(derived, Some(record.amount_in_words.clone()));
        }
    }

    /// Snapshot of the current fields as a new saved record.
    pub fn to_record(&self) -> Result<SavedChequeRecord> {
        self.state.validate_for_save()?;
        let amount = self.state.amount_value().ok_or_else(|| {
            ChequeError::InvalidInput("Amount must be a whole number".into())
        })?;
        Ok(SavedChequeRecord::new(
            self.state.payee.clone(),
            amount,
            self.state.date,
            self.state.bank.clone(),
            self.state.memo.clone(),
            self.words.current(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_an_amount_derives_the_words() {
        let mut form = ChequeForm::new();
        form.set_amount("1500");
        assert_eq!(form.words.current(), "ONE THOUSAND, FIVE HUNDRED ***");
        assert!(!form.words.is_overridden());
    }

    #[test]
    fn manual_edit_wins_until_the_amount_changes_again() {
        let mut form = ChequeForm::new();
        form.set_amount("1500");
        form.edit_words("one thousand five hundred only");
        assert_eq!(form.words.current(), "ONE THOUSAND FIVE HUNDRED ONLY");
        assert_eq!(form.state.amount, "1500");

        form.set_amount("1600");
        assert_eq!(form.words.current(), "ONE THOUSAND, SIX HUNDRED ***");
        assert!(!form.words.is_overridden());
    }

    #[test]
    fn clearing_the_amount_clears_the_words() {
        let mut form = ChequeForm::new();
        form.set_amount("1500");
        form.set_amount("");
        assert_eq!(form.words.current(), "");
    }

    #[test]
    fn save_requires_payee_amount_and_bank() {
        let mut form = ChequeForm::new();
        assert!(form.to_record().is_err());

        form.state.payee = "Kenya Power".into();
        form.set_amount("1500");
        form.state.bank = "Equity Bank".into();
        let record = form.to_record().expect("record");
        assert_eq!(record.amount, 1500);
        assert_eq!(record.amount_in_words, "ONE THOUSAND, FIVE HUNDRED ***");
    }

    #[test]
    fn loading_a_record_refreshes_the_date_and_restores_the_words() {
        let mut form = ChequeForm::new();
        form.state.payee = "Kenya Power".into();
        form.set_amount("1500");
        form.state.bank = "Equity Bank".into();
        form.edit_words("FIFTEEN HUNDRED EXACTLY");
        let record = form.to_record().expect("record");

        let mut reloaded = ChequeForm::new();
        reloaded.load_record(&record);
        assert_eq!(reloaded.state.payee, "Kenya Power");
        assert_eq!(reloaded.state.date, Local::now().date_naive());
        assert_eq!(reloaded.words.current(), "FIFTEEN HUNDRED EXACTLY");

        // Typing a new amount overwrites the restored words.
        reloaded.set_amount("200");
        assert_eq!(reloaded.words.current(), "TWO HUNDRED ***");
    }
}
