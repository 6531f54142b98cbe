use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use sangat_cli::commands::{config_ops, print_ops, registry_ops, translit_ops};
use sangat_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "badgetool", about = "Sangat registrations and Hindi badge printing")]
struct Cli {
    /// Custom settings TOML (default: embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom transliteration tables TOML (default: embedded)
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Snapshot file for the file store (overrides store.path)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate romanized Hindi to Devanagari
    Translit {
        /// Text to convert
        text: String,
    },
    /// Format text the way badges print it
    Hindi {
        /// Name, address or other free text
        text: String,
    },
    /// Convert ASCII digits to Devanagari digits
    Digits {
        /// Text containing digits
        text: String,
    },
    /// Export default transliteration tables as TOML
    TablesExport,
    /// Validate a custom transliteration tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Add a registration from a JSON file
    Add {
        /// JSON object with the registration form fields
        file: String,
    },
    /// Replace the form fields of a registration from a JSON file
    Edit {
        /// Registration id
        id: String,
        /// JSON object with the registration form fields
        file: String,
    },
    /// List registrations, newest first
    List {
        /// Filter by name, mobile or Aadhaar
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one registration and its badge preview
    Show {
        /// Registration id
        id: String,
    },
    /// Delete a registration
    Remove {
        /// Registration id
        id: String,
    },
    /// Render printable badges to an HTML file
    Print {
        /// Output HTML file
        #[arg(short, long)]
        output: String,
        /// Filter by name, mobile or Aadhaar (ignored when ids are given)
        #[arg(long)]
        search: Option<String>,
        /// Registration ids to print (default: all matching)
        ids: Vec<String>,
    },
    /// Export all registrations as CSV
    ExportCsv {
        /// Output CSV file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref());
    config_ops::load_overrides(cli.settings.as_deref(), cli.tables.as_deref());

    let store: Option<&Path> = cli.store.as_deref();
    match cli.command {
        Command::Translit { text } => translit_ops::translit(&text),
        Command::Hindi { text } => translit_ops::hindi(&text),
        Command::Digits { text } => translit_ops::digits(&text),
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { file } => config_ops::tables_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Add { file } => registry_ops::add(store, &file),
        Command::Edit { id, file } => registry_ops::edit(store, &id, &file),
        Command::List { search } => registry_ops::list(store, search.as_deref()),
        Command::Show { id } => registry_ops::show(store, &id),
        Command::Remove { id } => registry_ops::remove(store, &id),
        Command::Print {
            output,
            search,
            ids,
        } => print_ops::print(store, &output, search.as_deref(), &ids),
        Command::ExportCsv { file } => registry_ops::export_csv(store, &file),
    }
}
