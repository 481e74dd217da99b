//! Unicode character names for the syllabics blocks.
//!
//! Names are authoritative data from the Unicode Character Database and are
//! looked up, never derived. `names.txt` keeps the first two fields of
//! `UnicodeData.txt` for every assigned code point in both blocks.

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const NAMES_TXT: &str = include_str!("names.txt");

fn names() -> &'static BTreeMap<u32, &'static str> {
    static INSTANCE: OnceLock<BTreeMap<u32, &'static str>> = OnceLock::new();
    INSTANCE.get_or_init(|| parse_names(NAMES_TXT).expect("embedded names.txt must be valid"))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NamesError {
    #[error("line {line}: expected `XXXX;NAME`")]
    Malformed { line: usize },
    #[error("line {line}: U+{code_point:04X} is named twice")]
    Duplicate { line: usize, code_point: u32 },
}

/// Parse `XXXX;NAME` lines. Blank lines and `#` comments are skipped.
pub fn parse_names(text: &str) -> Result<BTreeMap<u32, &str>, NamesError> {
    let mut map = BTreeMap::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = || NamesError::Malformed { line: line_no };
        let (hex, name) = line.split_once(';').ok_or_else(malformed)?;
        let code_point = u32::from_str_radix(hex, 16).map_err(|_| malformed())?;
        if name.is_empty() {
            return Err(malformed());
        }
        if map.insert(code_point, name).is_some() {
            return Err(NamesError::Duplicate {
                line: line_no,
                code_point,
            });
        }
    }
    Ok(map)
}

/// The Unicode name of `code_point`, if it is an assigned syllabics character.
pub fn name(code_point: u32) -> Option<&'static str> {
    names().get(&code_point).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_names_parse() {
        let map = parse_names(NAMES_TXT).unwrap();
        assert!(map.len() > 700, "expected 700+ names, got {}", map.len());
        assert!(map.values().all(|n| n.starts_with("CANADIAN SYLLABICS ")));
    }

    #[test]
    fn known_names() {
        assert_eq!(name(0x1401), Some("CANADIAN SYLLABICS E"));
        assert_eq!(name(0x1458), Some("CANADIAN SYLLABICS WEST-CREE TWE"));
        assert_eq!(name(0x1677), Some("CANADIAN SYLLABICS WOODS-CREE THWEE"));
        assert_eq!(name(0x18C7), Some("CANADIAN SYLLABICS OJIBWAY NWI"));
        assert_eq!(name(0x0041), None);
    }

    #[test]
    fn parse_errors_report_line() {
        assert_eq!(
            parse_names("1401;CANADIAN SYLLABICS E\nnonsense\n"),
            Err(NamesError::Malformed { line: 2 })
        );
        assert_eq!(
            parse_names("ZZZZ;NAME\n"),
            Err(NamesError::Malformed { line: 1 })
        );
        assert_eq!(
            parse_names("1401;A\n1401;B\n"),
            Err(NamesError::Duplicate {
                line: 2,
                code_point: 0x1401
            })
        );
        assert_eq!(parse_names("1401;\n"), Err(NamesError::Malformed { line: 1 }));
    }
}
