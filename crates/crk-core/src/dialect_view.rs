//! Per-dialect views: the primary table filtered on one dialect's membership
//! column, projected to mnemonic, glyph and code point.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::syllabic::Dialect;
use crate::table::{Column, Table, TableError};

/// Column order of a dialect view. The two orders are both in use downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputSchema {
    /// Mnemonic first: `qwerty.mnemonic, cans, code.point`.
    Legacy,
    /// Glyph first: `cans, qwerty.mnemonic, code.point`.
    #[default]
    Current,
}

impl OutputSchema {
    pub const ALL: [OutputSchema; 2] = [OutputSchema::Legacy, OutputSchema::Current];

    pub fn columns(self) -> [Column; 3] {
        match self {
            OutputSchema::Legacy => [Column::QwertyMnemonic, Column::Cans, Column::CodePoint],
            OutputSchema::Current => [Column::Cans, Column::QwertyMnemonic, Column::CodePoint],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputSchema::Legacy => "legacy",
            OutputSchema::Current => "current",
        }
    }
}

impl fmt::Display for OutputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown output schema: {0} (expected legacy or current)")]
pub struct UnknownSchema(String);

impl FromStr for OutputSchema {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputSchema::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| UnknownSchema(s.to_string()))
    }
}

/// Project the primary table down to one dialect.
pub fn dialect_view(table: &Table, dialect: Dialect, schema: OutputSchema) -> Result<Table, TableError> {
    let columns = schema.columns().map(Column::header);
    let view = table.project(Column::for_dialect(dialect).header(), &columns)?;
    debug!(%dialect, %schema, rows = view.rows().len(), "dialect view");
    Ok(view)
}
