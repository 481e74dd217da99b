pub mod config_ops;
pub mod table_ops;

use std::borrow::Cow;
use std::fs;
use std::io;

use crk_core::annotate::AnnotateError;
use crk_core::digraphs::DigraphError;
use crk_core::inventory::{parse_inventory_toml, Inventory, InventoryError};
use crk_core::lookalike::LookAlikeError;
use crk_core::table::TableError;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Digraph(#[from] DigraphError),
    #[error(transparent)]
    LookAlike(#[from] LookAlikeError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// The built-in tables, or the tables file at `path`.
pub fn load_inventory(path: Option<&str>) -> Result<Cow<'static, Inventory>, CliError> {
    match path {
        None => Ok(Cow::Borrowed(Inventory::builtin())),
        Some(path) => {
            let content = read_file(path)?;
            let inventory = parse_inventory_toml(&content)?;
            debug!(path, "custom tables loaded");
            Ok(Cow::Owned(inventory))
        }
    }
}
