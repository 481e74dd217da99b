fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/inventory/default_inventory.toml",
        include_str!("src/inventory/default_inventory.toml"),
    );
    validate_fields("src/ucd/names.txt", include_str!("src/ucd/names.txt"), ';', 2);
    validate_fields(
        "src/lookalike/lookalikes.tsv",
        include_str!("src/lookalike/lookalikes.tsv"),
        '\t',
        5,
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_fields(path: &str, content: &str, sep: char, fields: usize) {
    for (i, line) in content.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.split(sep).count() != fields {
            panic!("{path}:{}: expected {fields} fields", i + 1);
        }
    }
}
