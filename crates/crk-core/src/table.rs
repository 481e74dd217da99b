//! Tab-separated output contract and relational projection over it.

use std::io::{self, Write};

use crate::syllabic::{Dialect, SyllabicCharacter};

/// Columns of the primary table, in contract order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Cans,
    Latn,
    ScalarValue,
    Kind,
    HasVowel,
    HasLongVowel,
    Vowel,
    HasConsonant,
    Consonant,
    HasW,
    InPlainsCree,
    InWoodsCree,
    InSwampyCree,
    QwertyMnemonic,
    VimDigraph,
    CodePoint,
    UnicodeName,
}

impl Column {
    pub const ALL: [Column; 17] = [
        Column::Cans,
        Column::Latn,
        Column::ScalarValue,
        Column::Kind,
        Column::HasVowel,
        Column::HasLongVowel,
        Column::Vowel,
        Column::HasConsonant,
        Column::Consonant,
        Column::HasW,
        Column::InPlainsCree,
        Column::InWoodsCree,
        Column::InSwampyCree,
        Column::QwertyMnemonic,
        Column::VimDigraph,
        Column::CodePoint,
        Column::UnicodeName,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Cans => "cans",
            Column::Latn => "latn",
            Column::ScalarValue => "scalar.value",
            Column::Kind => "kind",
            Column::HasVowel => "has.vowel",
            Column::HasLongVowel => "has.long.vowel",
            Column::Vowel => "vowel",
            Column::HasConsonant => "has.consonant",
            Column::Consonant => "consonant",
            Column::HasW => "has.w",
            Column::InPlainsCree => "in.plains.cree",
            Column::InWoodsCree => "in.woods.cree",
            Column::InSwampyCree => "in.swampy.cree",
            Column::QwertyMnemonic => "qwerty.mnemonic",
            Column::VimDigraph => "vim.digraph",
            Column::CodePoint => "code.point",
            Column::UnicodeName => "unicode.name",
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            Column::HasVowel
                | Column::HasLongVowel
                | Column::HasConsonant
                | Column::HasW
                | Column::InPlainsCree
                | Column::InWoodsCree
                | Column::InSwampyCree
        )
    }

    /// The membership column for a dialect.
    pub fn for_dialect(dialect: Dialect) -> Column {
        match dialect {
            Dialect::PlainsCree => Column::InPlainsCree,
            Dialect::WoodsCree => Column::InWoodsCree,
            Dialect::SwampyCree => Column::InSwampyCree,
        }
    }

    /// Render this column's cell for `c`.
    pub fn cell(self, c: &SyllabicCharacter) -> String {
        match self {
            Column::Cans => c.glyph().to_string(),
            Column::Latn => c.romanization.clone(),
            Column::ScalarValue => c.code_point.to_string(),
            Column::Kind => c.kind.as_str().to_string(),
            Column::HasVowel => flag(c.vowel.is_some()),
            Column::HasLongVowel => flag(c.is_long_vowel()),
            Column::Vowel => c.vowel.map(|v| v.sro()).unwrap_or_default().to_string(),
            Column::HasConsonant => flag(c.consonant.is_some()),
            Column::Consonant => c.consonant.map(|k| k.sro()).unwrap_or_default().to_string(),
            Column::HasW => flag(c.has_w()),
            Column::InPlainsCree => flag(c.in_dialect(Dialect::PlainsCree)),
            Column::InWoodsCree => flag(c.in_dialect(Dialect::WoodsCree)),
            Column::InSwampyCree => flag(c.in_dialect(Dialect::SwampyCree)),
            Column::QwertyMnemonic => c.qwerty_mnemonic.clone(),
            Column::VimDigraph => c.vim_digraph.clone().unwrap_or_default(),
            Column::CodePoint => c.code_point_notation(),
            Column::UnicodeName => c.unicode_name.clone(),
        }
    }
}

/// Booleans are the literal tokens `TRUE` and `FALSE`; consumers filter on them.
pub const TRUE: &str = "TRUE";
pub const FALSE: &str = "FALSE";

fn flag(value: bool) -> String {
    let token = if value { TRUE } else { FALSE };
    token.to_string()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table has no header row")]
    Empty,
    #[error("row {row} has {found} fields, header has {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// A header plus rows of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::Ragged {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// The primary table: every column, one row per record.
    pub fn from_records(records: &[SyllabicCharacter]) -> Self {
        let columns = Column::ALL.iter().map(|c| c.header().to_string()).collect();
        let rows = records
            .iter()
            .map(|r| Column::ALL.iter().map(|c| c.cell(r)).collect())
            .collect();
        Self { columns, rows }
    }

    /// Parse tab-separated text with a header row.
    pub fn parse_tsv(text: &str) -> Result<Self, TableError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(TableError::Empty)?;
        let columns = split_row(header);
        let rows = lines.filter(|l| !l.is_empty()).map(split_row).collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Keep the rows whose `filter` column is `TRUE` and select `columns`,
    /// in the given order. Row order is preserved.
    pub fn project(&self, filter: &str, columns: &[&str]) -> Result<Table, TableError> {
        let filter_idx = self.column_index(filter)?;
        let indices = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .filter(|row| row[filter_idx] == TRUE)
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.columns.join("\t"))?;
        for row in &self.rows {
            writeln!(out, "{}", row.join("\t"))?;
        }
        Ok(())
    }

    pub fn to_tsv(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_tsv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.strip_suffix('\r')
        .unwrap_or(line)
        .split('\t')
        .map(str::to_string)
        .collect()
}
