//! Hand-curated table of characters commonly typed in place of syllabics.
//!
//! The table is shipped as-is; parsing exists so the table can be checked.

use crate::table::{Table, TableError};

pub const LOOKALIKES_TSV: &str = include_str!("lookalikes.tsv");

const HEADER: [&str; 5] = ["lookalike", "actual", "code.point", "actual.code.point", "name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookAlike {
    pub lookalike: char,
    pub actual: char,
    pub name: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookAlikeError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("unexpected header: {0:?}")]
    Header(String),
    #[error("line {line}: {reason}")]
    Row { line: usize, reason: String },
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn notation(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Parse the look-alike TSV, checking the code-point columns against the
/// characters they describe.
pub fn parse_lookalikes(text: &str) -> Result<Vec<LookAlike>, LookAlikeError> {
    let table = Table::parse_tsv(text)?;
    if table.columns().iter().map(String::as_str).ne(HEADER) {
        return Err(LookAlikeError::Header(table.columns().join("\t")));
    }

    let mut entries = Vec::with_capacity(table.rows().len());
    for (i, row) in table.rows().iter().enumerate() {
        let row_err = |reason: &str| LookAlikeError::Row {
            line: i + 2,
            reason: reason.to_string(),
        };

        let [lookalike, actual, code_point, actual_code_point, name] = row.as_slice() else {
            return Err(row_err("expected 5 fields"));
        };
        let lookalike = single_char(lookalike).ok_or_else(|| row_err("lookalike must be one character"))?;
        let actual = single_char(actual).ok_or_else(|| row_err("actual must be one character"))?;
        if notation(lookalike) != *code_point {
            return Err(row_err("code.point does not match lookalike"));
        }
        if notation(actual) != *actual_code_point {
            return Err(row_err("actual.code.point does not match actual"));
        }
        if name.is_empty() {
            return Err(row_err("name is empty"));
        }
        entries.push(LookAlike {
            lookalike,
            actual,
            name: name.clone(),
        });
    }
    Ok(entries)
}
