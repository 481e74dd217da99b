use std::io::{self, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};

use crk_cli::commands::{config_ops, load_inventory, table_ops, CliError};
use crk_cli::trace_init::init_tracing;
use crk_core::dialect_view::OutputSchema;
use crk_core::syllabic::Dialect;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(
    name = "syllabics",
    about = "Annotated table of the syllabics used to write nêhiyawêwin",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Replace the built-in classification tables with this TOML file
    #[arg(long)]
    tables: Option<String>,
    /// Print Vim digraph definitions instead of the table
    #[arg(long, conflicts_with = "json")]
    vim: bool,
    /// Print the records as JSON instead of the table
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the characters used in one dialect
    View {
        /// plains-cree, woods-cree or swampy-cree
        dialect: Dialect,
        /// Column order: legacy (mnemonic first) or current (glyph first)
        #[arg(long, default_value_t = OutputSchema::Current)]
        schema: OutputSchema,
        /// Replace the built-in classification tables with this TOML file
        #[arg(long)]
        tables: Option<String>,
    },
    /// Print characters commonly mistaken for syllabics
    Lookalikes,
    /// Export the built-in classification tables as TOML
    TablesExport,
    /// Validate a custom classification tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Some(Command::View {
            dialect,
            schema,
            tables,
        }) => {
            let inventory = load_inventory(tables.as_deref())?;
            table_ops::view(&inventory, dialect, schema, out)
        }
        Some(Command::Lookalikes) => table_ops::lookalikes(out),
        Some(Command::TablesExport) => config_ops::tables_export(out),
        Some(Command::TablesValidate { file }) => config_ops::tables_validate(&file, out),
        None => {
            let inventory = load_inventory(cli.tables.as_deref())?;
            if cli.vim {
                table_ops::annotate_vim(&inventory, out)
            } else if cli.json {
                table_ops::annotate_json(&inventory, out)
            } else {
                table_ops::annotate_tsv(&inventory, out)
            }
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    die!(run(cli, &mut out), "Error: {}");
    die!(out.flush(), "Error writing output: {}");
}
