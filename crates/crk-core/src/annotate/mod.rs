//! Syllabics annotator: turns classified code points into full records.
//!
//! Any code point that cannot be classified, named or typed aborts the whole
//! run. Consumers treat every emitted row as ground truth, so there is no
//! partial output.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use tracing::{debug, debug_span};

use crate::inventory::Inventory;
use crate::orthography::{romanize, vim_digraph};
use crate::syllabic::SyllabicCharacter;
use crate::ucd;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("U+{code_point:04X} matches no classification rule")]
    Unclassified { code_point: u32 },
    #[error("U+{code_point:04X} has no Unicode name")]
    MissingName { code_point: u32 },
    #[error("U+{code_point:04X}: no qwerty mnemonic for {character:?} in {romanization:?}")]
    NoMnemonic {
        code_point: u32,
        character: char,
        romanization: String,
    },
}

/// Annotate `code_points`, one record per distinct code point, ascending.
pub fn annotate<I>(inventory: &Inventory, code_points: I) -> Result<Vec<SyllabicCharacter>, AnnotateError>
where
    I: IntoIterator<Item = u32>,
{
    let _span = debug_span!("annotate").entered();

    let ordered: BTreeSet<u32> = code_points.into_iter().collect();
    let mut records = Vec::with_capacity(ordered.len());
    for code_point in ordered {
        records.push(annotate_one(inventory, code_point)?);
    }

    debug!(records = records.len());
    Ok(records)
}

/// Annotate every code point the inventory declares.
pub fn annotate_inventory(inventory: &Inventory) -> Result<Vec<SyllabicCharacter>, AnnotateError> {
    annotate(inventory, inventory.code_points())
}

fn annotate_one(inventory: &Inventory, code_point: u32) -> Result<SyllabicCharacter, AnnotateError> {
    let d = inventory
        .classify(code_point)
        .ok_or(AnnotateError::Unclassified { code_point })?;
    let unicode_name = ucd::name(code_point).ok_or(AnnotateError::MissingName { code_point })?;

    let romanization = romanize(d.consonant, d.w_glide, d.vowel);
    let qwerty_mnemonic =
        inventory
            .mnemonics()
            .apply(&romanization)
            .map_err(|character| AnnotateError::NoMnemonic {
                code_point,
                character,
                romanization: romanization.clone(),
            })?;

    Ok(SyllabicCharacter {
        code_point,
        kind: d.kind,
        vowel: d.vowel,
        consonant: d.consonant,
        has_w_glide: d.w_glide,
        romanization,
        qwerty_mnemonic,
        vim_digraph: vim_digraph(&d),
        dialects: inventory.dialects_of(code_point),
        unicode_name: unicode_name.to_string(),
    })
}
