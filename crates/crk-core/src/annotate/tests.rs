use super::*;
use crate::inventory::parse_inventory_toml;
use crate::syllabic::{Consonant, Decomposition, Dialect, Kind, Vowel};
use crate::table::{Column, Table, FALSE, TRUE};

const SMALL: &str = r#"
vowel_order = ["ê", "i", "î", "o", "ô", "a", "â"]

[[blocks]]
name = "Unified Canadian Aboriginal Syllabics"
first = 0x1400
last = 0x167F

[[blocks]]
name = "Unified Canadian Aboriginal Syllabics Extended"
first = 0x18B0
last = 0x18FF

[layouts]
spaced = [0, 2, 3, 4, 5, 9, 10]

[[series]]
first = 0x144C
consonant = "t"
layout = "spaced"
"#;

fn small(extra: &str) -> Inventory {
    parse_inventory_toml(&format!("{SMALL}\n{extra}")).unwrap()
}

fn builtin_records() -> Vec<SyllabicCharacter> {
    annotate_inventory(Inventory::builtin()).unwrap()
}

fn record(records: &[SyllabicCharacter], code_point: u32) -> &SyllabicCharacter {
    records
        .iter()
        .find(|r| r.code_point == code_point)
        .unwrap_or_else(|| panic!("U+{code_point:04X} missing"))
}

#[test]
fn builtin_inventory_is_complete_and_ordered() {
    let records = builtin_records();
    assert_eq!(records.len(), 154);
    assert!(records.windows(2).all(|w| w[0].code_point < w[1].code_point));
    assert_eq!(records[0].code_point, 0x1401);
}

#[test]
fn every_record_satisfies_its_invariants() {
    let inventory = Inventory::builtin();
    for r in builtin_records() {
        let d = r.decomposition();
        assert_eq!(d.check(), Ok(()), "U+{:04X}", r.code_point);
        assert_eq!(r.romanization, romanize(r.consonant, r.has_w_glide, r.vowel));
        assert_eq!(
            Ok(r.qwerty_mnemonic.clone()),
            inventory.mnemonics().apply(&r.romanization)
        );
        assert!(r.qwerty_mnemonic.is_ascii());
        assert!(r.unicode_name.starts_with("CANADIAN SYLLABICS "));
        assert!(!r.dialects.is_empty());
        if r.kind != Kind::Syllable {
            assert!(!r.has_w());
        }
    }
}

#[test]
fn boolean_cells_are_true_or_false() {
    let table = Table::from_records(&builtin_records());
    let flags: Vec<usize> = Column::ALL
        .iter()
        .filter(|c| c.is_boolean())
        .map(|c| table.column_index(c.header()).unwrap())
        .collect();
    assert_eq!(flags.len(), 7);
    for row in table.rows() {
        for &i in &flags {
            assert!(row[i] == TRUE || row[i] == FALSE, "{row:?}");
        }
    }
}

#[test]
fn syllable_te() {
    let records = builtin_records();
    let te = record(&records, 0x144C);
    assert_eq!(te.glyph(), 'ᑌ');
    assert_eq!(te.kind, Kind::Syllable);
    assert_eq!(te.consonant, Some(Consonant::T));
    assert_eq!(te.vowel, Some(Vowel::LongE));
    assert!(te.is_long_vowel());
    assert!(!te.has_w_glide);
    assert_eq!(te.romanization, "tê");
    assert_eq!(te.qwerty_mnemonic, "te");
    assert_eq!(te.unicode_name, "CANADIAN SYLLABICS TE");
}

#[test]
fn syllable_with_w_glide() {
    let records = builtin_records();
    let twe = record(&records, 0x1458);
    assert!(twe.has_w_glide);
    assert!(twe.has_w());
    assert_eq!(twe.romanization, "twê");
    assert_eq!(twe.qwerty_mnemonic, "twe");
    assert_eq!(twe.unicode_name, "CANADIAN SYLLABICS WEST-CREE TWE");
}

#[test]
fn bare_vowel_and_final() {
    let records = builtin_records();
    let a = record(&records, 0x140A);
    assert_eq!(a.kind, Kind::Vowel);
    assert_eq!(a.consonant, None);
    assert!(!a.is_long_vowel());
    assert_eq!(a.romanization, "a");
    assert_eq!(a.vim_digraph.as_deref(), Some("a."));

    let h = record(&records, 0x1426);
    assert_eq!(h.kind, Kind::Consonant);
    assert_eq!(h.vowel, None);
    assert_eq!(h.romanization, "h");
}

#[test]
fn th_series_is_woods_cree_only() {
    let records = builtin_records();
    let tha = record(&records, 0x15AD);
    assert_eq!(tha.consonant, Some(Consonant::Th));
    assert!(tha.in_dialect(Dialect::WoodsCree));
    assert!(!tha.in_dialect(Dialect::PlainsCree));
    assert_eq!(tha.vim_digraph, None);
}

#[test]
fn woods_cree_th_final() {
    assert_eq!(
        Inventory::builtin().classify(0x167E),
        Some(Decomposition::consonant(Consonant::Th))
    );
    let records = builtin_records();
    let th = record(&records, 0x167E);
    assert_eq!(th.kind, Kind::Consonant);
    assert_eq!(th.romanization, "th");
    assert_eq!(th.qwerty_mnemonic, "th");
    assert_eq!(th.vim_digraph, None);
    assert_eq!(th.unicode_name, "CANADIAN SYLLABICS WOODS-CREE FINAL TH");
    assert!(th.in_dialect(Dialect::WoodsCree));
    assert!(!th.in_dialect(Dialect::PlainsCree));
    assert!(!th.in_dialect(Dialect::SwampyCree));
}

#[test]
fn input_is_deduplicated_and_sorted() {
    let inventory = Inventory::builtin();
    let records = annotate(inventory, [0x1458, 0x144C, 0x1458, 0x1401]).unwrap();
    let got: Vec<u32> = records.iter().map(|r| r.code_point).collect();
    assert_eq!(got, [0x1401, 0x144C, 0x1458]);
}

#[test]
fn output_is_deterministic() {
    let first = Table::from_records(&builtin_records()).to_tsv();
    let second = Table::from_records(&builtin_records()).to_tsv();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 155);
}

#[test]
fn unclassified_code_point_aborts() {
    // Inuktitut II is in the block but not in the inventory.
    let err = annotate(Inventory::builtin(), [0x1401, 0x1402]).unwrap_err();
    assert_eq!(err, AnnotateError::Unclassified { code_point: 0x1402 });
}

#[test]
fn unassigned_code_point_has_no_name() {
    let inventory = small(
        r#"
[[finals]]
code_point = 0x18F6
consonant = "k"

[qwerty]
"ê" = "e"
"î" = "ii"
"ô" = "oo"
"â" = "aa"
"#,
    );
    let err = annotate_inventory(&inventory).unwrap_err();
    assert_eq!(err, AnnotateError::MissingName { code_point: 0x18F6 });
}

#[test]
fn untypeable_romanization_aborts() {
    // No qwerty table: the circumflex vowels cannot be typed.
    let inventory = small("");
    let err = annotate_inventory(&inventory).unwrap_err();
    assert_eq!(
        err,
        AnnotateError::NoMnemonic {
            code_point: 0x144C,
            character: 'ê',
            romanization: "tê".into(),
        }
    );
}

#[test]
fn custom_qwerty_table() {
    let inventory = small(
        r#"
[qwerty]
"ê" = "E"
"î" = "I"
"ô" = "O"
"â" = "A"
"#,
    );
    let records = annotate_inventory(&inventory).unwrap();
    let mnemonics: Vec<&str> = records.iter().map(|r| r.qwerty_mnemonic.as_str()).collect();
    assert_eq!(mnemonics, ["tE", "ti", "tI", "to", "tO", "ta", "tA"]);
}
