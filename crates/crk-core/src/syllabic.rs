//! Data model for one annotated syllabics character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Syllable,
    Vowel,
    Consonant,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Syllable => "syllable",
            Kind::Vowel => "vowel",
            Kind::Consonant => "consonant",
        }
    }
}

/// The seven vowels of nêhiyawêwin. `ê` has no short counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vowel {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "â")]
    LongA,
    #[serde(rename = "ê")]
    LongE,
    #[serde(rename = "i")]
    I,
    #[serde(rename = "î")]
    LongI,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "ô")]
    LongO,
}

impl Vowel {
    pub const ALL: [Vowel; 7] = [
        Vowel::LongE,
        Vowel::I,
        Vowel::LongI,
        Vowel::O,
        Vowel::LongO,
        Vowel::A,
        Vowel::LongA,
    ];

    pub fn is_long(self) -> bool {
        matches!(
            self,
            Vowel::LongA | Vowel::LongE | Vowel::LongI | Vowel::LongO
        )
    }

    /// The vowel letter without length marking.
    pub fn letter(self) -> char {
        match self {
            Vowel::A | Vowel::LongA => 'a',
            Vowel::LongE => 'e',
            Vowel::I | Vowel::LongI => 'i',
            Vowel::O | Vowel::LongO => 'o',
        }
    }

    /// SRO spelling, circumflex on long vowels.
    pub fn sro(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::LongA => "â",
            Vowel::LongE => "ê",
            Vowel::I => "i",
            Vowel::LongI => "î",
            Vowel::O => "o",
            Vowel::LongO => "ô",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consonant {
    P,
    T,
    K,
    C,
    M,
    N,
    S,
    Y,
    W,
    H,
    L,
    R,
    Th,
    /// Preaspirated k, written with a single final.
    Hk,
}

impl Consonant {
    pub const ALL: [Consonant; 14] = [
        Consonant::P,
        Consonant::T,
        Consonant::K,
        Consonant::C,
        Consonant::M,
        Consonant::N,
        Consonant::S,
        Consonant::Y,
        Consonant::W,
        Consonant::H,
        Consonant::L,
        Consonant::R,
        Consonant::Th,
        Consonant::Hk,
    ];

    pub fn sro(self) -> &'static str {
        match self {
            Consonant::P => "p",
            Consonant::T => "t",
            Consonant::K => "k",
            Consonant::C => "c",
            Consonant::M => "m",
            Consonant::N => "n",
            Consonant::S => "s",
            Consonant::Y => "y",
            Consonant::W => "w",
            Consonant::H => "h",
            Consonant::L => "l",
            Consonant::R => "r",
            Consonant::Th => "th",
            Consonant::Hk => "hk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    PlainsCree,
    WoodsCree,
    SwampyCree,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::PlainsCree, Dialect::WoodsCree, Dialect::SwampyCree];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::PlainsCree => "plains-cree",
            Dialect::WoodsCree => "woods-cree",
            Dialect::SwampyCree => "swampy-cree",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Dialect::PlainsCree => 0b001,
            Dialect::WoodsCree => 0b010,
            Dialect::SwampyCree => 0b100,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown dialect: {0} (expected plains-cree, woods-cree or swampy-cree)")]
pub struct UnknownDialect(String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

/// The set of dialects a character is used in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DialectSet(u8);

impl DialectSet {
    pub const ALL: DialectSet = DialectSet(0b111);

    pub fn empty() -> Self {
        DialectSet(0)
    }

    pub fn with(self, dialect: Dialect) -> Self {
        DialectSet(self.0 | dialect.bit())
    }

    pub fn contains(self, dialect: Dialect) -> bool {
        self.0 & dialect.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Dialect> {
        Dialect::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Dialect> for DialectSet {
    fn from_iter<I: IntoIterator<Item = Dialect>>(iter: I) -> Self {
        iter.into_iter().fold(DialectSet::empty(), DialectSet::with)
    }
}

impl fmt::Debug for DialectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for DialectSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for DialectSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dialects = Vec::<Dialect>::deserialize(deserializer)?;
        Ok(dialects.into_iter().collect())
    }
}

/// How a code point breaks down phonetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub kind: Kind,
    pub consonant: Option<Consonant>,
    pub w_glide: bool,
    pub vowel: Option<Vowel>,
}

impl Decomposition {
    pub fn vowel(vowel: Vowel) -> Self {
        Self {
            kind: Kind::Vowel,
            consonant: None,
            w_glide: false,
            vowel: Some(vowel),
        }
    }

    pub fn consonant(consonant: Consonant) -> Self {
        Self {
            kind: Kind::Consonant,
            consonant: Some(consonant),
            w_glide: false,
            vowel: None,
        }
    }

    pub fn syllable(consonant: Consonant, w_glide: bool, vowel: Vowel) -> Self {
        Self {
            kind: Kind::Syllable,
            consonant: Some(consonant),
            w_glide,
            vowel: Some(vowel),
        }
    }

    /// Check the kind/feature invariants. Returns the violated rule on failure.
    pub fn check(&self) -> Result<(), &'static str> {
        match self.kind {
            Kind::Vowel => {
                if self.vowel.is_none() {
                    return Err("a vowel needs a vowel");
                }
                if self.consonant.is_some() {
                    return Err("a vowel cannot have a consonant");
                }
                if self.w_glide {
                    return Err("a vowel cannot have a w-glide");
                }
            }
            Kind::Consonant => {
                if self.consonant.is_none() {
                    return Err("a consonant needs a consonant");
                }
                if self.vowel.is_some() {
                    return Err("a consonant cannot have a vowel");
                }
                if self.w_glide {
                    return Err("a consonant cannot have a w-glide");
                }
            }
            Kind::Syllable => {
                if self.vowel.is_none() {
                    return Err("a syllable needs a vowel");
                }
                if self.w_glide && self.consonant.is_none() {
                    return Err("a w-glide needs an onset consonant");
                }
            }
        }
        Ok(())
    }
}

/// One annotated character of the syllabics inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllabicCharacter {
    pub code_point: u32,
    pub kind: Kind,
    pub vowel: Option<Vowel>,
    pub consonant: Option<Consonant>,
    pub has_w_glide: bool,
    pub romanization: String,
    pub qwerty_mnemonic: String,
    pub vim_digraph: Option<String>,
    pub dialects: DialectSet,
    pub unicode_name: String,
}

impl SyllabicCharacter {
    pub fn glyph(&self) -> char {
        char::from_u32(self.code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn is_long_vowel(&self) -> bool {
        self.vowel.is_some_and(Vowel::is_long)
    }

    /// True for syllables with any w sound: a glide, or `w` as the consonant.
    pub fn has_w(&self) -> bool {
        self.kind == Kind::Syllable && (self.has_w_glide || self.consonant == Some(Consonant::W))
    }

    pub fn in_dialect(&self, dialect: Dialect) -> bool {
        self.dialects.contains(dialect)
    }

    /// `U+XXXX` notation.
    pub fn code_point_notation(&self) -> String {
        format!("U+{:04X}", self.code_point)
    }

    pub fn decomposition(&self) -> Decomposition {
        Decomposition {
            kind: self.kind,
            consonant: self.consonant,
            w_glide: self.has_w_glide,
            vowel: self.vowel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_length() {
        assert!(Vowel::LongE.is_long());
        assert!(Vowel::LongA.is_long());
        assert!(!Vowel::A.is_long());
        assert_eq!(Vowel::LongO.letter(), 'o');
        assert_eq!(Vowel::LongI.sro(), "î");
    }

    #[test]
    fn dialect_set_membership() {
        let set: DialectSet = [Dialect::WoodsCree].into_iter().collect();
        assert!(set.contains(Dialect::WoodsCree));
        assert!(!set.contains(Dialect::PlainsCree));
        assert_eq!(set.iter().count(), 1);
        assert_eq!(DialectSet::ALL.iter().count(), 3);
        assert!(DialectSet::empty().is_empty());
    }

    #[test]
    fn dialect_from_str() {
        assert_eq!("swampy-cree".parse::<Dialect>().unwrap(), Dialect::SwampyCree);
        assert!("plains".parse::<Dialect>().is_err());
    }

    #[test]
    fn decomposition_invariants() {
        assert!(Decomposition::vowel(Vowel::A).check().is_ok());
        assert!(Decomposition::consonant(Consonant::Hk).check().is_ok());
        assert!(Decomposition::syllable(Consonant::T, true, Vowel::LongE)
            .check()
            .is_ok());

        let glide_without_onset = Decomposition {
            kind: Kind::Syllable,
            consonant: None,
            w_glide: true,
            vowel: Some(Vowel::A),
        };
        assert!(glide_without_onset.check().is_err());

        let consonant_with_vowel = Decomposition {
            kind: Kind::Consonant,
            consonant: Some(Consonant::K),
            w_glide: false,
            vowel: Some(Vowel::A),
        };
        assert!(consonant_with_vowel.check().is_err());
    }

    #[test]
    fn serialize_dialect_set_as_list() {
        let set: DialectSet = [Dialect::PlainsCree, Dialect::SwampyCree].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["plains-cree","swampy-cree"]"#);
    }
}
