//! Standard Roman Orthography spelling, qwerty mnemonics and Vim digraphs.

use std::collections::BTreeMap;

use crate::syllabic::{Consonant, Decomposition, Kind, Vowel};

/// SRO spelling: consonant, then `w` for a glide, then the vowel.
pub fn romanize(consonant: Option<Consonant>, w_glide: bool, vowel: Option<Vowel>) -> String {
    let mut sro = String::new();
    if let Some(c) = consonant {
        sro.push_str(c.sro());
    }
    if w_glide {
        sro.push('w');
    }
    if let Some(v) = vowel {
        sro.push_str(v.sro());
    }
    sro
}

/// Substitutions from SRO characters to the keystrokes of the companion
/// input method. Characters without an entry are typed as themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicTable {
    keys: BTreeMap<char, String>,
}

impl MnemonicTable {
    pub fn new(keys: BTreeMap<char, String>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Apply the substitutions to `sro`.
    ///
    /// Returns the first character that is neither ASCII nor in the table.
    pub fn apply(&self, sro: &str) -> Result<String, char> {
        let mut out = String::with_capacity(sro.len());
        for c in sro.chars() {
            match self.keys.get(&c) {
                Some(keys) => out.push_str(keys),
                None if c.is_ascii() => out.push(c),
                None => return Err(c),
            }
        }
        Ok(out)
    }
}

/// Two-character Vim digraph, if the character has one.
///
/// Vowels are the letter plus `:` (long) or `.` (short); finals are the letter
/// plus `.`; syllables are consonant and vowel letters, with the consonant
/// uppercased for a w-glide and the vowel uppercased when long (`ê` excepted,
/// as it is always long). Multi-letter consonants other than `hk` have none.
pub fn vim_digraph(d: &Decomposition) -> Option<String> {
    match d.kind {
        Kind::Vowel => {
            let v = d.vowel?;
            let length = if v.is_long() { ':' } else { '.' };
            Some(format!("{}{}", v.letter(), length))
        }
        Kind::Consonant => match d.consonant? {
            Consonant::Hk => Some("hk".to_string()),
            Consonant::Th => None,
            c => Some(format!("{}.", c.sro())),
        },
        Kind::Syllable => {
            let c = d.consonant?;
            let v = d.vowel?;
            let mut letters = c.sro().chars();
            let (Some(first), None) = (letters.next(), letters.next()) else {
                return None;
            };
            let consonant = if d.w_glide {
                first.to_ascii_uppercase()
            } else {
                first
            };
            let vowel = if v.is_long() && v != Vowel::LongE {
                v.letter().to_ascii_uppercase()
            } else {
                v.letter()
            };
            Some(format!("{consonant}{vowel}"))
        }
    }
}
