/// The two display lines of the written-amount area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLines {
    pub line1: String,
    pub line2: String,
}

/// Characters the first written line can hold.
const LINE_BUDGET: usize = 45;

/// Wraps the words text onto at most two lines.
///
/// Text within the budget stays whole on line one. Longer text breaks at
/// the last space at or before the budget; the space itself is dropped so
/// `line1 + " " + line2` reconstructs the input. An unbroken run with no
/// space breaks hard at the budget, mid-word if it must. Line two is never
/// truncated; only two lines exist on the leaf.
pub fn split_lines(text: &str) -> WordLines {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= LINE_BUDGET {
        return WordLines {
            line1: text.to_string(),
            line2: String::new(),
        };
    }
    match chars[..=LINE_BUDGET].iter().rposition(|c| *c == ' ') {
        Some(space) => WordLines {
            line1: chars[..space].iter().collect(),
            line2: chars[space + 1..].iter().collect(),
        },
        None => WordLines {
            line1: chars[..LINE_BUDGET].iter().collect(),
            line2: chars[LINE_BUDGET..].iter().collect(),
        },
    }
}
