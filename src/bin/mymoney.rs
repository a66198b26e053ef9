//! CLI for inspecting and managing MyMoney backup documents.

use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::Value;

use mymoney_rs::backup;
use mymoney_rs::clock::{Clock, SystemClock};
use mymoney_rs::format;
use mymoney_rs::models::AppState;
use mymoney_rs::storage::{DiskFileStorage, FileSystem};

/// MyMoney backup tool: list, inspect, re-export and delete backups.
#[derive(Debug, Parser)]
#[command(name = "mymoney", version, about)]
struct Cli {
    /// Override the documents directory (default: platform data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List backup and report files, newest first.
    List,
    /// Import a backup and print a validated summary.
    Show {
        /// Backup file (bare names resolve against the documents dir).
        file: PathBuf,
    },
    /// Sanitize a JSON document (raw state or full backup envelope) and
    /// write it back as a fresh backup in the documents directory.
    Export {
        /// Path to the JSON document to sanitize.
        file: PathBuf,
    },
    /// Delete a backup or report file by name.
    Delete {
        /// File name as printed by `list`.
        name: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(_err) => ExitCode::FAILURE,
    }
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let storage = match create_storage(cli.data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to open documents directory: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let ok = dispatch(&storage, &SystemClock, cli.command)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Creates the storage backend, using `data_dir` if provided or the
/// default platform directory otherwise.
fn create_storage(data_dir: Option<PathBuf>) -> mymoney_rs::error::Result<DiskFileStorage> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => DiskFileStorage::default_dir()?,
    };
    DiskFileStorage::new(dir)
}

/// Dispatches to the appropriate subcommand handler. Returns whether the
/// command succeeded.
fn dispatch<F: FileSystem>(fs: &F, clock: &dyn Clock, command: Command) -> io::Result<bool> {
    match command {
        Command::List => cmd_list(fs),
        Command::Show { file } => cmd_show(fs, clock, &file),
        Command::Export { file } => cmd_export(fs, clock, &file),
        Command::Delete { name } => cmd_delete(fs, &name),
    }
}

/// Resolves a bare file name against the documents directory; paths with
/// more than one component are used as given.
fn resolve_document<F: FileSystem>(fs: &F, file: &Path) -> PathBuf {
    if file.components().count() == 1 {
        fs.documents_dir()
            .map_or_else(|_err| file.to_path_buf(), |dir| dir.join(file))
    } else {
        file.to_path_buf()
    }
}

/// Prints an `error:`-prefixed message to stderr.
fn print_error(message: &str) -> io::Result<()> {
    writeln!(io::stderr().lock(), "{} {message}", "error:".red().bold())
}

/// Executes the `list` subcommand.
fn cmd_list<F: FileSystem>(fs: &F) -> io::Result<bool> {
    match backup::list_backups(fs) {
        Ok(names) => {
            print_backup_list(&names)?;
            Ok(true)
        }
        Err(err) => {
            print_error(&format!("failed to list backups: {err}"))?;
            Ok(false)
        }
    }
}

/// Executes the `show` subcommand: import and summarize a backup.
fn cmd_show<F: FileSystem>(fs: &F, clock: &dyn Clock, file: &Path) -> io::Result<bool> {
    let path = resolve_document(fs, file);
    match backup::import_backup(fs, clock, &path) {
        Ok(state) => {
            print_state_summary(&state)?;
            Ok(true)
        }
        Err(err) => {
            print_error(&format!("import failed: {err}"))?;
            Ok(false)
        }
    }
}

/// Executes the `export` subcommand: sanitize an arbitrary JSON document
/// and write it back as a fresh backup.
fn cmd_export<F: FileSystem>(fs: &F, clock: &dyn Clock, file: &Path) -> io::Result<bool> {
    let raw = match std::fs::read_to_string(file) {
        Ok(raw) => raw,
        Err(err) => {
            print_error(&format!("failed to read {}: {err}", file.display()))?;
            return Ok(false);
        }
    };
    let document: Value = match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(err) => {
            print_error(&format!("not valid JSON: {err}"))?;
            return Ok(false);
        }
    };
    // A full envelope is accepted too; only its data block matters here.
    let data = document.get("data").unwrap_or(&document);
    let state = match backup::validate_backup_data(data, clock) {
        Ok(state) => state,
        Err(err) => {
            print_error(&format!("invalid state document: {err}"))?;
            return Ok(false);
        }
    };
    match backup::export_backup(fs, clock, &state) {
        Ok(path) => {
            let mut out = io::stdout().lock();
            writeln!(out, "{} {}", "Exported".green().bold(), path.display())?;
            Ok(true)
        }
        Err(err) => {
            print_error(&format!("export failed: {err}"))?;
            Ok(false)
        }
    }
}

/// Executes the `delete` subcommand.
fn cmd_delete<F: FileSystem>(fs: &F, name: &str) -> io::Result<bool> {
    if backup::delete_backup(fs, name) {
        writeln!(io::stdout().lock(), "{} {name}", "Deleted".green().bold())?;
        Ok(true)
    } else {
        print_error(&format!("could not delete {name}"))?;
        Ok(false)
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Prints the backup listing as a table.
fn print_backup_list(names: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if names.is_empty() {
        writeln!(out, "{}", "No backups found.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Kind").fg(Color::Cyan),
    ]);
    for name in names {
        let kind = if name.starts_with(backup::REPORT_PREFIX) {
            "report"
        } else {
            "backup"
        };
        _ = table.add_row(vec![Cell::new(name), Cell::new(kind)]);
    }

    writeln!(
        out,
        "{} {}",
        "Documents".green().bold(),
        format_args!("({})", names.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints a validated state summary: record counts and recomputed totals.
fn print_state_summary(state: &AppState) -> io::Result<()> {
    let mut out = io::stdout().lock();

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Collection").fg(Color::Cyan),
        Cell::new("Records").fg(Color::Cyan),
    ]);
    let rows = [
        ("Transactions", state.transactions.len()),
        ("Budgets", state.budgets.len()),
        ("Savings goals", state.savings.len()),
        ("Savings history", state.savings_transactions.len()),
        ("Notes", state.notes.len()),
    ];
    for (label, count) in rows {
        _ = table.add_row(vec![Cell::new(label), Cell::new(count.to_string())]);
    }

    writeln!(out, "{}", "Backup contents".green().bold())?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "  {} {}",
        "Income: ".bold(),
        format::currency(state.total_income).green()
    )?;
    writeln!(
        out,
        "  {} {}",
        "Expense:".bold(),
        format::currency(state.total_expense).red()
    )?;
    writeln!(
        out,
        "  {} {}",
        "Balance:".bold(),
        format::currency(state.balance)
    )?;
    Ok(())
}
