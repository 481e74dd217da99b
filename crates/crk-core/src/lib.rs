pub mod annotate;
pub mod dialect_view;
pub mod digraphs;
pub mod inventory;
pub mod lookalike;
pub mod orthography;
pub mod syllabic;
pub mod table;
pub mod ucd;
