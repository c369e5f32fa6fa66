//! Boqgrid CLI - inspect and transform BOQ table fragments offline

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
use boqgrid::{
    costing_summary, decorate, export, export_filename, extract, parse_fragment, TableData,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "boq")]
#[command(version)]
#[command(about = "Boqgrid - editable BOQ table engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Decorate a raw table fragment into editable widget markup
    Decorate {
        /// Input HTML file (reads from stdin if not provided)
        input: Option<String>,

        /// File id to thread through the markup
        #[arg(short = 'i', long, default_value = "local")]
        file_id: String,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract header-keyed JSON data from a table fragment
    Extract {
        /// Input HTML file (reads from stdin if not provided)
        input: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export a table fragment as a standalone sanitized HTML document
    Export {
        /// Input HTML file (reads from stdin if not provided)
        input: Option<String>,

        /// File id used in the export filename
        #[arg(short = 'i', long, default_value = "local")]
        file_id: String,

        /// Output file path (defaults to the export's own filename)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compute the subtotal/VAT summary from costed table JSON
    Summary {
        /// Input JSON file: an array of {headers, rows} tables
        /// (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn read_input(input: Option<String>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(output: Option<String>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", content)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decorate {
            input,
            file_id,
            output,
        } => {
            let content = read_input(input)?;
            let table = parse_fragment(&content).map_err(|e| invalid(e.to_string()))?;
            write_output(output, &decorate(&table, &file_id))?;
        }

        Commands::Extract {
            input,
            pretty,
            output,
        } => {
            let content = read_input(input)?;
            let table = parse_fragment(&content).map_err(|e| invalid(e.to_string()))?;
            let data = extract(&table);
            let json = if pretty {
                serde_json::to_string_pretty(&data)
            } else {
                serde_json::to_string(&data)
            }
            .map_err(|e| invalid(e.to_string()))?;
            write_output(output, &json)?;
        }

        Commands::Export {
            input,
            file_id,
            output,
        } => {
            let content = read_input(input)?;
            let table = parse_fragment(&content).map_err(|e| invalid(e.to_string()))?;
            let document = export(&table, &file_id);
            let path = output.unwrap_or_else(|| export_filename(&file_id));
            write_output(Some(path), &document.html)?;
        }

        Commands::Summary { input } => {
            let content = read_input(input)?;
            let tables: Vec<TableData> =
                serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
            let summary = costing_summary(&tables);
            println!("Subtotal:    {:.2}", summary.subtotal);
            println!("VAT (5%):    {:.2}", summary.vat);
            println!("Grand total: {:.2}", summary.grand_total);
        }

        Commands::Info => {
            println!("Boqgrid - editable BOQ table engine");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Table fragment parsing and decoration");
            println!("  ✓ Header-keyed data extraction (JSON)");
            println!("  ✓ Standalone sanitized HTML export");
            println!("  ✓ Costing summary (subtotal, VAT, grand total)");
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install boqgrid --features cli");
    eprintln!("  boq <COMMAND>");
}
