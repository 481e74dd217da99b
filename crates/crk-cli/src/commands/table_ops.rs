use std::io::Write;

use crk_core::annotate::annotate_inventory;
use crk_core::dialect_view::{dialect_view, OutputSchema};
use crk_core::digraphs::vim_digraphs;
use crk_core::inventory::Inventory;
use crk_core::lookalike::{parse_lookalikes, LOOKALIKES_TSV};
use crk_core::syllabic::Dialect;
use crk_core::table::Table;

use super::CliError;

fn primary_table(inventory: &Inventory) -> Result<Table, CliError> {
    let records = annotate_inventory(inventory)?;
    Ok(Table::from_records(&records))
}

/// The primary TSV: every column, one row per character.
pub fn annotate_tsv(inventory: &Inventory, out: &mut impl Write) -> Result<(), CliError> {
    primary_table(inventory)?.write_tsv(out)?;
    Ok(())
}

pub fn annotate_json(inventory: &Inventory, out: &mut impl Write) -> Result<(), CliError> {
    let records = annotate_inventory(inventory)?;
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

pub fn annotate_vim(inventory: &Inventory, out: &mut impl Write) -> Result<(), CliError> {
    let records = annotate_inventory(inventory)?;
    out.write_all(vim_digraphs(&records)?.as_bytes())?;
    Ok(())
}

pub fn view(
    inventory: &Inventory,
    dialect: Dialect,
    schema: OutputSchema,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let table = primary_table(inventory)?;
    dialect_view(&table, dialect, schema)?.write_tsv(out)?;
    Ok(())
}

/// The look-alike table, byte for byte, once it has been checked.
pub fn lookalikes(out: &mut impl Write) -> Result<(), CliError> {
    parse_lookalikes(LOOKALIKES_TSV)?;
    out.write_all(LOOKALIKES_TSV.as_bytes())?;
    Ok(())
}
