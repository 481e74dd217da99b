//! Vim digraph definitions for typing syllabics with `<C-k>`.

use std::collections::HashMap;
use std::fmt::Write;

use tracing::debug;

use crate::syllabic::SyllabicCharacter;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DigraphError {
    #[error("digraph {digraph:?} for U+{code_point:04X} is not two printable ASCII characters")]
    Malformed { code_point: u32, digraph: String },
    #[error("digraph {digraph:?} is used by both U+{first:04X} and U+{second:04X}")]
    Duplicate {
        digraph: String,
        first: u32,
        second: u32,
    },
}

/// Render one `digraph` command per record that has a digraph.
///
/// Each line looks like
/// `digraph pe 5167 " ᐯ U+142F CANADIAN SYLLABICS PE`.
pub fn vim_digraphs(records: &[SyllabicCharacter]) -> Result<String, DigraphError> {
    let mut seen: HashMap<&str, u32> = HashMap::new();
    let mut out = String::new();
    let mut skipped = 0usize;

    for r in records {
        let Some(digraph) = r.vim_digraph.as_deref() else {
            skipped += 1;
            continue;
        };
        if digraph.len() != 2 || !digraph.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(DigraphError::Malformed {
                code_point: r.code_point,
                digraph: digraph.to_string(),
            });
        }
        if let Some(&first) = seen.get(digraph) {
            return Err(DigraphError::Duplicate {
                digraph: digraph.to_string(),
                first,
                second: r.code_point,
            });
        }
        seen.insert(digraph, r.code_point);

        let _ = writeln!(
            out,
            "digraph {} {} \" {} {} {}",
            digraph,
            r.code_point,
            r.glyph(),
            r.code_point_notation(),
            r.unicode_name
        );
    }

    debug!(digraphs = seen.len(), skipped);
    Ok(out)
}
