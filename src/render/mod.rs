//! Turns the pure layout and form values into their presentation forms:
//! the print stylesheet, the positioned print document, and the rough
//! terminal preview.

use std::fmt::Write;

use colored::Colorize;

use crate::{
    config::Config,
    form::ChequeForm,
    layout::{Field, PrintLayout},
    words,
};

/// Print-time style block for the resolved bank.
///
/// The host applying this owns replacing any previously applied block;
/// generation here stays free of presentation state.
pub fn stylesheet(layout: &PrintLayout) -> String {
    let mut css = String::new();
    css.push_str("@media print {\n");
    css.push_str("  @page {\n    size: auto;\n    margin: 0mm;\n  }\n");
    css.push_str("  body * {\n    visibility: hidden;\n  }\n");
    css.push_str("  #cheque-print-area, #cheque-print-area * {\n    visibility: visible;\n  }\n");
    let _ = write!(
        css,
        "  #cheque-print-area {{\n    display: block !important;\n    position: absolute;\n    left: 0;\n    top: 0;\n    width: {}mm;\n    height: {}mm;\n    margin: 0;\n    padding: 0;\n    background: white;\n    font-family: 'Helvetica', 'Arial', sans-serif;\n    font-size: 10pt;\n  }}\n",
        layout.width_mm, layout.height_mm
    );
    for field in &layout.fields {
        let _ = write!(
            css,
            "  .print-{} {{\n    position: absolute;\n    left: {}mm;\n    top: {}mm;\n",
            field.field.slug(),
            field.left_mm,
            field.top_mm
        );
        let typography = &field.typography;
        if let Some(spacing) = typography.letter_spacing_px {
            let _ = writeln!(css, "    letter-spacing: {}px;", spacing);
        }
        if typography.uppercase {
            css.push_str("    text-transform: uppercase;\n");
        }
        if typography.bold {
            css.push_str("    font-weight: bold;\n");
        }
        let _ = writeln!(css, "    font-size: {}pt;", typography.font_size_pt);
        css.push_str("  }\n");
    }
    css.push_str("  .no-print {\n    display: none !important;\n  }\n");
    css.push_str("}\n");
    css
}

/// The print-area markup, one positioned element per field.
pub fn print_document(form: &ChequeForm, config: &Config) -> String {
    let lines = words::split_lines(form.words.current());
    let figures = form
        .state
        .amount_value()
        .map(format_figures)
        .unwrap_or_default();
    let mut html = String::from("<div id=\"cheque-print-area\">\n");
    push_field(
        &mut html,
        Field::Date,
        &config.date_format.render(form.state.date),
    );
    push_field(&mut html, Field::Payee, &form.state.payee);
    push_field(&mut html, Field::WordsLine1, &lines.line1);
    push_field(&mut html, Field::WordsLine2, &lines.line2);
    push_field(&mut html, Field::AmountFigures, &figures);
    push_field(&mut html, Field::Memo, &form.state.memo);
    html.push_str("</div>\n");
    html
}

fn push_field(html: &mut String, field: Field, value: &str) {
    let _ = writeln!(
        html,
        "  <div class=\"print-{}\">{}</div>",
        field.slug(),
        value
    );
}

/// Comma-grouped rendering of the amount figures box.
pub fn format_figures(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Rough on-screen preview of the filled cheque for the terminal.
pub fn preview(form: &ChequeForm, config: &Config) -> String {
    let lines = words::split_lines(form.words.current());
    let written = if lines.line2.is_empty() {
        lines.line1
    } else {
        format!("{} {}", lines.line1, lines.line2)
    };
    let payee = if form.state.payee.is_empty() {
        "________________".to_string()
    } else {
        form.state.payee.to_uppercase()
    };
    let figures = form
        .state
        .amount_value()
        .map(format_figures)
        .unwrap_or_else(|| "000,000".into());

    let mut out = String::new();
    let _ = writeln!(out, "{}", "Rough Preview".dimmed());
    let _ = writeln!(out, "{:>60}", config.date_format.render(form.state.date));
    let _ = writeln!(out, "PAY: {}", payee.bold());
    if !written.is_empty() {
        let _ = writeln!(out, "{}", written);
    }
    let _ = writeln!(out, "[ {} {} ]", config.currency, figures.bold());
    if !form.state.memo.is_empty() {
        let _ = writeln!(out, "Ref: {}", form.state.memo.italic());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_for_bank;

    fn sample_form() -> ChequeForm {
        let mut form = ChequeForm::new();
        form.state.payee = "Kenya Power".into();
        form.set_amount("123456");
        form.state.bank = "Equity Bank".into();
        form.state.memo = "Invoice #1024".into();
        form
    }

    #[test]
    fn stylesheet_carries_the_leaf_dimensions() {
        let layout = layout_for_bank("Equity Bank").expect("layout");
        let css = stylesheet(&layout);
        assert!(css.contains("width: 178mm;"));
        assert!(css.contains("height: 99mm;"));
        assert!(css.contains(".print-words-2"));
        assert!(css.contains("letter-spacing: 1px;"));
        assert!(css.contains("font-weight: bold;"));
    }

    #[test]
    fn stylesheet_is_stable_across_calls() {
        let layout = layout_for_bank("KCB Bank").expect("layout");
        assert_eq!(stylesheet(&layout), stylesheet(&layout));
    }

    #[test]
    fn print_document_positions_every_field() {
        let form = sample_form();
        let html = print_document(&form, &Config::default());
        assert!(html.contains("print-date"));
        assert!(html.contains("print-payee"));
        assert!(html.contains("print-words-1"));
        assert!(html.contains("print-words-2"));
        assert!(html.contains("print-amount-figures"));
        assert!(html.contains("print-memo"));
        assert!(html.contains("123,456"));
    }

    #[test]
    fn figures_group_by_thousands() {
        assert_eq!(format_figures(0), "0");
        assert_eq!(format_figures(999), "999");
        assert_eq!(format_figures(1500), "1,500");
        assert_eq!(format_figures(123456789), "123,456,789");
    }

    #[test]
    fn preview_shows_the_currency_and_figures() {
        let form = sample_form();
        let text = preview(&form, &Config::default());
        assert!(text.contains("KES"));
        assert!(text.contains("123,456"));
    }
}
