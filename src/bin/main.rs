//! datascope CLI - scope schemas, tables and columns of a data source
//!
//! Usage:
//!   datascope validate [--catalog <catalog.json>]
//!   datascope apply [--catalog <catalog.json>] [--script <ops.json>] [--from <selection.json>]
//!   datascope summary [--catalog <catalog.json>] <selection.json>
//!
//! Examples:
//!   datascope validate --catalog catalogs/production.json
//!   datascope apply --catalog catalogs/production.json --script session.json --require-non-empty
//!   datascope summary --catalog catalogs/production.json saved_selection.json

use clap::{Parser, Subcommand};
use datascope::catalog::{Catalog, CatalogSource, JsonFileSource};
use datascope::config::{Settings, SettingsError};
use datascope::selection::{ops, CheckState, Selection, SelectionEngine, SelectionExport, SelectionView};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datascope")]
#[command(about = "datascope - Select schemas, tables and columns of a relational data source")]
#[command(version)]
struct Cli {
    /// Path to a datascope.toml settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog and check it for duplicate names
    Validate {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Replay selection operations and print the resulting export
    Apply {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// JSON array of operations to replay
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Previously exported selection to start from
        #[arg(short, long)]
        from: Option<PathBuf>,

        /// Fail when nothing ends up selected
        #[arg(long)]
        require_non_empty: bool,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show per-schema and per-table check state of a saved selection
    Summary {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Exported selection JSON file
        selection: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings);

    match cli.command {
        Commands::Validate { catalog } => cmd_validate(&settings, catalog),
        Commands::Apply {
            catalog,
            script,
            from,
            require_non_empty,
            compact,
        } => cmd_apply(&settings, catalog, script, from, require_non_empty, compact),
        Commands::Summary { catalog, selection } => cmd_summary(&settings, catalog, selection),
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

fn init_tracing(settings: &Settings) {
    // Validated on load; RUST_LOG still wins when set.
    let level = settings
        .logging
        .level_filter()
        .unwrap_or(tracing::level_filters::LevelFilter::WARN);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(settings: &Settings, catalog: Option<PathBuf>) -> Option<Catalog> {
    let path = match catalog {
        Some(path) => path,
        None => match settings.catalog.resolved_path() {
            Ok(Some(path)) => path,
            Ok(None) => {
                eprintln!("No catalog given: pass --catalog or set [catalog].path");
                return None;
            }
            Err(e) => {
                eprintln!("Error resolving catalog path: {}", e);
                return None;
            }
        },
    };

    match JsonFileSource::new(path).load() {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            None
        }
    }
}

fn read_export(path: &Path) -> Option<SelectionExport> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            return None;
        }
    };

    match SelectionExport::from_json(&content) {
        Ok(export) => Some(export),
        Err(e) => {
            eprintln!("Error in '{}': {}", path.display(), e);
            None
        }
    }
}

fn cmd_validate(settings: &Settings, catalog: Option<PathBuf>) -> ExitCode {
    let Some(catalog) = load_catalog(settings, catalog) else {
        return ExitCode::FAILURE;
    };

    println!(
        "OK: {} schemas, {} tables, {} columns",
        catalog.schemas().len(),
        catalog.table_count(),
        catalog.column_count()
    );
    ExitCode::SUCCESS
}

fn cmd_apply(
    settings: &Settings,
    catalog: Option<PathBuf>,
    script: Option<PathBuf>,
    from: Option<PathBuf>,
    require_non_empty: bool,
    compact: bool,
) -> ExitCode {
    let Some(catalog) = load_catalog(settings, catalog) else {
        return ExitCode::FAILURE;
    };
    let engine = SelectionEngine::new(&catalog);

    let mut selection = match &from {
        Some(path) => {
            let Some(export) = read_export(path) else {
                return ExitCode::FAILURE;
            };
            let mut restored = Selection::from_export(export);
            let dropped = engine.retain_known(&mut restored);
            if dropped > 0 {
                tracing::warn!(dropped, "restored selection referenced names missing from the catalog");
            }
            restored
        }
        None => Selection::new(),
    };

    if let Some(path) = &script {
        let operations = match ops::load_script(path) {
            Ok(operations) => operations,
            Err(e) => {
                eprintln!("Error loading script: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let report = ops::replay(&engine, &mut selection, &operations);
        tracing::info!(
            applied = report.applied,
            ignored = report.ignored,
            "replayed operations"
        );
    }

    let export = selection.export();
    if require_non_empty || settings.output.require_non_empty {
        if let Err(e) = export.ensure_non_empty() {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let rendered = if compact || !settings.output.pretty {
        export.to_json()
    } else {
        export.to_json_pretty()
    };

    match rendered {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_summary(settings: &Settings, catalog: Option<PathBuf>, selection: PathBuf) -> ExitCode {
    let Some(catalog) = load_catalog(settings, catalog) else {
        return ExitCode::FAILURE;
    };
    let Some(export) = read_export(&selection) else {
        return ExitCode::FAILURE;
    };

    let selection = Selection::from_export(export);
    let view = SelectionView::new(&catalog, &selection);

    for schema in catalog.schemas() {
        let state = view.schema_state(&schema.name).unwrap_or(CheckState::Unchecked);
        println!(
            "{} {} ({} records)",
            marker(state),
            schema.name,
            schema.record_count()
        );

        for table in &schema.tables {
            let state = view
                .table_state(&schema.name, &table.name)
                .unwrap_or(CheckState::Unchecked);
            let selected = selection
                .columns(&schema.name, &table.name)
                .map(|cols| table.column_names().filter(|c| cols.contains(*c)).count())
                .unwrap_or(0);
            println!(
                "    {} {} ({}/{} columns, {} records)",
                marker(state),
                table.name,
                selected,
                table.columns.len(),
                table.record_count()
            );
        }
    }

    let summary = view.summary();
    println!();
    println!(
        "Selected: {}/{} schemas, {}/{} tables, {}/{} columns",
        summary.schemas.selected,
        summary.schemas.total,
        summary.tables.selected,
        summary.tables.total,
        summary.columns.selected,
        summary.columns.total
    );

    ExitCode::SUCCESS
}

fn marker(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Partial => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}
