//! Classification tables for the syllabics inventory, loaded from TOML.
//!
//! - `Inventory::builtin()` returns the embedded tables (lazy-init singleton)
//! - `parse_inventory_toml(toml)` parses and validates a custom tables file
//! - Default tables are embedded via `include_str!("default_inventory.toml")`
//!
//! A code point is classified by the exception table first, then by the
//! finals, then by positional decode of the syllable series.


use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::orthography::MnemonicTable;
use crate::syllabic::{Consonant, Decomposition, DialectSet, Kind, Vowel};

pub const DEFAULT_INVENTORY_TOML: &str = include_str!("default_inventory.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_INVENTORY_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("inventory declares no characters")]
    Empty,
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("invalid exception at U+{code_point:04X}: {reason}")]
    InvalidException {
        code_point: u32,
        reason: &'static str,
    },
    #[error("U+{code_point:04X} is outside every declared block")]
    OutOfBlock { code_point: u32 },
    #[error("U+{code_point:04X} is declared more than once")]
    Overlap { code_point: u32 },
    #[error("invalid qwerty mapping for {key:?}: {reason}")]
    InvalidMnemonic { key: String, reason: &'static str },
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> InventoryError {
    InventoryError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInventory {
    vowel_order: Vec<Vowel>,
    blocks: Vec<Block>,
    layouts: BTreeMap<String, Vec<u32>>,
    #[serde(default)]
    series: Vec<RawSeries>,
    #[serde(default)]
    finals: Vec<RawFinal>,
    #[serde(default)]
    exceptions: Vec<RawException>,
    #[serde(default)]
    dialects: Vec<DialectRule>,
    #[serde(default)]
    qwerty: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeries {
    first: u32,
    #[serde(default)]
    consonant: Option<Consonant>,
    #[serde(default)]
    w_glide: bool,
    layout: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFinal {
    code_point: u32,
    consonant: Consonant,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawException {
    code_point: u32,
    kind: Kind,
    #[serde(default)]
    consonant: Option<Consonant>,
    #[serde(default)]
    w_glide: bool,
    #[serde(default)]
    vowel: Option<Vowel>,
}

/// A Unicode block the inventory may draw characters from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub name: String,
    pub first: u32,
    pub last: u32,
}

impl Block {
    pub fn contains(&self, code_point: u32) -> bool {
        (self.first..=self.last).contains(&code_point)
    }
}

/// Restricts an inclusive code-point range to a subset of the dialects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectRule {
    pub first: u32,
    pub last: u32,
    pub only: DialectSet,
}

/// One consonant (or the bare vowels) laid out as a run of code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub first: u32,
    pub consonant: Option<Consonant>,
    pub w_glide: bool,
    pub layout: String,
    slots: Vec<(u32, Vowel)>,
}

impl Series {
    /// Positional decode: the vowel sits at a fixed offset from `first`.
    pub fn decode(&self, code_point: u32) -> Option<Decomposition> {
        let offset = code_point.checked_sub(self.first)?;
        let &(_, vowel) = self.slots.iter().find(|(o, _)| *o == offset)?;
        Some(match self.consonant {
            Some(c) => Decomposition::syllable(c, self.w_glide, vowel),
            None => Decomposition::vowel(vowel),
        })
    }

    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().map(move |(offset, _)| self.first + offset)
    }
}

#[derive(Debug, Clone)]
pub struct Inventory {
    blocks: Vec<Block>,
    series: Vec<Series>,
    finals: BTreeMap<u32, Consonant>,
    exceptions: BTreeMap<u32, Decomposition>,
    dialects: Vec<DialectRule>,
    mnemonics: MnemonicTable,
}

impl Inventory {
    /// Get or initialize the built-in tables.
    pub fn builtin() -> &'static Inventory {
        static INSTANCE: OnceLock<Inventory> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            parse_inventory_toml(DEFAULT_INVENTORY_TOML).expect("inventory TOML must be valid")
        })
    }

    /// Classify a code point: exceptions override the default decode.
    pub fn classify(&self, code_point: u32) -> Option<Decomposition> {
        self.exceptions
            .get(&code_point)
            .copied()
            .or_else(|| self.decode_default(code_point))
    }

    /// Classification from the finals and series alone, ignoring exceptions.
    pub fn decode_default(&self, code_point: u32) -> Option<Decomposition> {
        if let Some(&c) = self.finals.get(&code_point) {
            return Some(Decomposition::consonant(c));
        }
        self.series.iter().find_map(|s| s.decode(code_point))
    }

    /// Every code point the tables declare, ascending.
    pub fn code_points(&self) -> Vec<u32> {
        let mut all: BTreeSet<u32> = self.series.iter().flat_map(Series::code_points).collect();
        all.extend(self.finals.keys());
        all.extend(self.exceptions.keys());
        all.into_iter().collect()
    }

    /// Dialects using `code_point`: the first matching rule, else all three.
    pub fn dialects_of(&self, code_point: u32) -> DialectSet {
        self.dialects
            .iter()
            .find(|r| (r.first..=r.last).contains(&code_point))
            .map_or(DialectSet::ALL, |r| r.only)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn finals(&self) -> &BTreeMap<u32, Consonant> {
        &self.finals
    }

    pub fn exceptions(&self) -> &BTreeMap<u32, Decomposition> {
        &self.exceptions
    }

    pub fn dialect_rules(&self) -> &[DialectRule] {
        &self.dialects
    }

    pub fn mnemonics(&self) -> &MnemonicTable {
        &self.mnemonics
    }
}

pub fn parse_inventory_toml(toml_str: &str) -> Result<Inventory, InventoryError> {
    let raw: RawInventory =
        toml::from_str(toml_str).map_err(|e| InventoryError::Parse(e.to_string()))?;

    validate_blocks(&raw.blocks)?;
    validate_vowel_order(&raw.vowel_order)?;
    let layouts = build_layouts(&raw.layouts, &raw.vowel_order)?;

    let mut claimed = BTreeSet::new();
    let mut claim = |code_point: u32| -> Result<(), InventoryError> {
        if !raw.blocks.iter().any(|b| b.contains(code_point)) {
            return Err(InventoryError::OutOfBlock { code_point });
        }
        if !claimed.insert(code_point) {
            return Err(InventoryError::Overlap { code_point });
        }
        Ok(())
    };

    let mut series = Vec::with_capacity(raw.series.len());
    for s in raw.series {
        let offsets = layouts
            .get(&s.layout)
            .ok_or_else(|| InventoryError::UnknownLayout(s.layout.clone()))?;
        if s.w_glide && s.consonant.is_none() {
            return Err(invalid(
                format!("series.U+{:04X}", s.first),
                "a w-glide needs a consonant",
            ));
        }
        let mut slots = Vec::with_capacity(offsets.len());
        for (&offset, &vowel) in offsets.iter().zip(&raw.vowel_order) {
            let code_point = s.first.checked_add(offset).ok_or_else(|| {
                invalid(format!("series.U+{:04X}", s.first), "offset overflows")
            })?;
            claim(code_point)?;
            slots.push((offset, vowel));
        }
        series.push(Series {
            first: s.first,
            consonant: s.consonant,
            w_glide: s.w_glide,
            layout: s.layout,
            slots,
        });
    }

    let mut finals = BTreeMap::new();
    for f in raw.finals {
        claim(f.code_point)?;
        finals.insert(f.code_point, f.consonant);
    }

    let mut exceptions = BTreeMap::new();
    for e in raw.exceptions {
        let d = Decomposition {
            kind: e.kind,
            consonant: e.consonant,
            w_glide: e.w_glide,
            vowel: e.vowel,
        };
        d.check().map_err(|reason| InventoryError::InvalidException {
            code_point: e.code_point,
            reason,
        })?;
        if !raw.blocks.iter().any(|b| b.contains(e.code_point)) {
            return Err(InventoryError::OutOfBlock {
                code_point: e.code_point,
            });
        }
        if exceptions.insert(e.code_point, d).is_some() {
            return Err(InventoryError::Overlap {
                code_point: e.code_point,
            });
        }
    }

    if series.is_empty() && finals.is_empty() && exceptions.is_empty() {
        return Err(InventoryError::Empty);
    }

    for (i, rule) in raw.dialects.iter().enumerate() {
        if rule.first > rule.last {
            return Err(invalid(format!("dialects[{i}]"), "first is after last"));
        }
        if rule.only.is_empty() {
            return Err(invalid(format!("dialects[{i}].only"), "must name a dialect"));
        }
    }

    let mnemonics = build_mnemonics(raw.qwerty)?;

    debug!(
        series = series.len(),
        finals = finals.len(),
        exceptions = exceptions.len(),
        "inventory loaded"
    );

    Ok(Inventory {
        blocks: raw.blocks,
        series,
        finals,
        exceptions,
        dialects: raw.dialects,
        mnemonics,
    })
}

fn validate_blocks(blocks: &[Block]) -> Result<(), InventoryError> {
    if blocks.is_empty() {
        return Err(invalid("blocks", "at least one block is required"));
    }
    for b in blocks {
        if b.first > b.last {
            return Err(invalid(format!("blocks.{}", b.name), "first is after last"));
        }
        if char::from_u32(b.first).is_none() || char::from_u32(b.last).is_none() {
            return Err(invalid(
                format!("blocks.{}", b.name),
                "bounds must be Unicode scalar values",
            ));
        }
    }
    Ok(())
}

fn validate_vowel_order(order: &[Vowel]) -> Result<(), InventoryError> {
    if order.is_empty() {
        return Err(invalid("vowel_order", "must not be empty"));
    }
    let distinct: BTreeSet<&Vowel> = order.iter().collect();
    if distinct.len() != order.len() {
        return Err(invalid("vowel_order", "vowels must be distinct"));
    }
    Ok(())
}

fn build_layouts<'a>(
    raw: &'a BTreeMap<String, Vec<u32>>,
    vowel_order: &[Vowel],
) -> Result<BTreeMap<String, &'a [u32]>, InventoryError> {
    let mut layouts = BTreeMap::new();
    for (name, offsets) in raw {
        if offsets.len() != vowel_order.len() {
            return Err(invalid(
                format!("layouts.{name}"),
                format!(
                    "expected {} offsets (one per vowel), got {}",
                    vowel_order.len(),
                    offsets.len()
                ),
            ));
        }
        let distinct: BTreeSet<&u32> = offsets.iter().collect();
        if distinct.len() != offsets.len() {
            return Err(invalid(format!("layouts.{name}"), "offsets must be distinct"));
        }
        layouts.insert(name.clone(), offsets.as_slice());
    }
    Ok(layouts)
}

fn build_mnemonics(raw: BTreeMap<String, String>) -> Result<MnemonicTable, InventoryError> {
    let mut keys = BTreeMap::new();
    for (key, value) in raw {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(InventoryError::InvalidMnemonic {
                    key,
                    reason: "key must be a single character",
                })
            }
        };
        if c.is_ascii() {
            return Err(InventoryError::InvalidMnemonic {
                key,
                reason: "ASCII characters are typed as themselves",
            });
        }
        if value.is_empty() || !value.is_ascii() {
            return Err(InventoryError::InvalidMnemonic {
                key,
                reason: "keystrokes must be non-empty ASCII",
            });
        }
        keys.insert(c, value);
    }
    Ok(MnemonicTable::new(keys))
}
