//! Interactive cheque entry, one prompt per form field.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::{
    banks,
    cli::output,
    config::Config,
    errors::{ChequeError, Result},
    form::ChequeForm,
    words,
};

/// Walks the user through a fresh cheque: bank, date, payee, amount, the
/// editable words, and memo.
pub fn run(config: &Config) -> Result<ChequeForm> {
    let theme = ColorfulTheme::default();
    let mut form = ChequeForm::new();

    let bank_names: Vec<&str> = banks::all_banks()
        .iter()
        .map(|profile| profile.display_name.as_str())
        .collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Select bank")
        .items(&bank_names)
        .default(0)
        .interact()?;
    let profile = &banks::all_banks()[selection];
    form.state.bank = profile.identifier.clone();
    output::info(format!(
        "Using {} template ({}mm x {}mm)",
        profile.display_name, profile.print_width_mm, profile.print_height_mm
    ));

    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(form.state.date.to_string())
        .interact_text()?;
    form.state.date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ChequeError::InvalidInput("Use YYYY-MM-DD format".into()))?;

    let payee: String = Input::with_theme(&theme)
        .with_prompt("Payee name")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Payee cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    form.state.payee = payee.trim().to_string();

    let amount: String = Input::with_theme(&theme)
        .with_prompt(format!("Amount ({})", config.currency))
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            match words::parse_amount(input) {
                Some(value) if value > 0 => Ok(()),
                _ => Err("Enter a positive whole number"),
            }
        })
        .interact_text()?;
    form.set_amount(amount.trim());

    let words_text: String = Input::with_theme(&theme)
        .with_prompt("Amount in words (editable)")
        .default(form.words.current().to_string())
        .interact_text()?;
    if words_text != form.words.current() {
        form.edit_words(&words_text);
    }

    let memo: String = Input::with_theme(&theme)
        .with_prompt("Memo / reference")
        .allow_empty(true)
        .interact_text()?;
    form.state.memo = memo.trim().to_string();

    Ok(form)
}

/// Yes/no confirmation in the wizard's theme.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}
