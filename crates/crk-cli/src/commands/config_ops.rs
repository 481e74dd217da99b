use std::io::Write;

use crk_core::inventory::{default_toml, parse_inventory_toml};

use super::{read_file, CliError};

pub fn tables_export(out: &mut impl Write) -> Result<(), CliError> {
    out.write_all(default_toml().as_bytes())?;
    Ok(())
}

pub fn tables_validate(file: &str, out: &mut impl Write) -> Result<(), CliError> {
    let content = read_file(file)?;
    let inventory = parse_inventory_toml(&content)?;
    writeln!(
        out,
        "OK: {} characters ({} series, {} finals, {} exceptions, {} qwerty mappings)",
        inventory.code_points().len(),
        inventory.series().len(),
        inventory.finals().len(),
        inventory.exceptions().len(),
        inventory.mnemonics().len()
    )?;
    for block in inventory.blocks() {
        writeln!(out, "  block U+{:04X}..U+{:04X} {}", block.first, block.last, block.name)?;
    }
    for rule in inventory.dialect_rules() {
        let only: Vec<&str> = rule.only.iter().map(|d| d.as_str()).collect();
        writeln!(
            out,
            "  dialects U+{:04X}..U+{:04X} {}",
            rule.first,
            rule.last,
            only.join(", ")
        )?;
    }
    Ok(())
}
