//! Field placement and print layout for the cheque leaf.

use serde::{Deserialize, Serialize};

use crate::banks::{self, BankProfile};

/// Printed fields, in the order they appear in the print area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Date,
    Payee,
    AmountFigures,
    WordsLine1,
    WordsLine2,
    Memo,
}

impl Field {
    /// Slug used for print class names.
    pub fn slug(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Payee => "payee",
            Field::AmountFigures => "amount-figures",
            Field::WordsLine1 => "words-1",
            Field::WordsLine2 => "words-2",
            Field::Memo => "memo",
        }
    }
}

/// Absolute offset of a field from the top-left corner of the print area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub field: Field,
    pub left_mm: f64,
    pub top_mm: f64,
}

// One fixed table for every bank; offsets do not adapt to the differing
// leaf heights.
const FIELD_POSITIONS: [FieldPosition; 6] = [
    FieldPosition {
        field: Field::Date,
        left_mm: 135.0,
        top_mm: 7.0,
    },
    FieldPosition {
        field: Field::Payee,
        left_mm: 20.0,
        top_mm: 47.0,
    },
    FieldPosition {
        field: Field::AmountFigures,
        left_mm: 135.0,
        top_mm: 42.0,
    },
    FieldPosition {
        field: Field::WordsLine1,
        left_mm: 40.0,
        top_mm: 58.0,
    },
    FieldPosition {
        field: Field::WordsLine2,
        left_mm: 7.0,
        top_mm: 67.0,
    },
    FieldPosition {
        field: Field::Memo,
        left_mm: 7.0,
        top_mm: 82.0,
    },
];

/// The fixed, bank-independent position table.
pub fn field_positions() -> &'static [FieldPosition] {
    &FIELD_POSITIONS
}

/// Typographic constants applied to a field in the print view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypography {
    pub font_size_pt: u8,
    pub letter_spacing_px: Option<u8>,
    pub uppercase: bool,
    pub bold: bool,
}

fn typography(field: Field) -> FieldTypography {
    match field {
        Field::Date => FieldTypography {
            font_size_pt: 8,
            letter_spacing_px: Some(1),
            uppercase: false,
            bold: false,
        },
        Field::Payee => FieldTypography {
            font_size_pt: 10,
            letter_spacing_px: None,
            uppercase: true,
            bold: false,
        },
        Field::AmountFigures => FieldTypography {
            font_size_pt: 12,
            letter_spacing_px: None,
            uppercase: false,
            bold: true,
        },
        Field::WordsLine1 | Field::WordsLine2 => FieldTypography {
            font_size_pt: 8,
            letter_spacing_px: None,
            uppercase: true,
            bold: false,
        },
        Field::Memo => FieldTypography {
            font_size_pt: 9,
            letter_spacing_px: None,
            uppercase: false,
            bold: false,
        },
    }
}

/// One positioned, styled field of the print layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub field: Field,
    pub left_mm: f64,
    pub top_mm: f64,
    pub typography: FieldTypography,
}

/// Declarative print layout for one bank's leaf, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintLayout {
    pub bank: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub fields: Vec<FieldLayout>,
}

/// Builds the print layout for a resolved bank profile.
///
/// Pure: the same profile always yields the same layout value.
pub fn layout_for(profile: &BankProfile) -> PrintLayout {
    let fields = field_positions()
        .iter()
        .map(|position| FieldLayout {
            field: position.field,
            left_mm: position.left_mm,
            top_mm: position.top_mm,
            typography: typography(position.field),
        })
        .collect();
    PrintLayout {
        bank: profile.identifier.clone(),
        width_mm: profile.print_width_mm,
        height_mm: profile.print_height_mm,
        fields,
    }
}

/// Resolves the bank and builds its layout; unknown banks have none.
pub fn layout_for_bank(identifier: &str) -> Option<PrintLayout> {
    banks::bank_profile(identifier).map(layout_for)
}
