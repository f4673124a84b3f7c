use crate::args::ImportCli;
use crate::config::AgendaConfig;
use agenda_engine::{ImportMode, assemble, import_forest};
use agenda_index::Database;
use anyhow::{Result, anyhow};

pub fn run_import(cli: ImportCli) -> Result<()> {
    let config = AgendaConfig::load(cli.common.config.as_deref())?;
    let db_path = config.resolve_database(cli.common.db.as_deref());
    let header_rows = cli.header_rows.unwrap_or(config.import.header_rows);
    let mode = if cli.atomic || config.import.atomic {
        ImportMode::Atomic
    } else {
        ImportMode::Incremental
    };

    // Parse everything before touching the database
    let rows = agenda_sheet::read_agenda_rows(&cli.file, header_rows)
        .map_err(|e| anyhow!("Failed to read {}: {}", cli.file.display(), e))?;
    let assembly = assemble(rows);

    tracing::info!(
        file = %cli.file.display(),
        sessions = assembly.sessions.len(),
        sub_sessions = assembly.sub_session_count(),
        orphans = assembly.orphans,
        "parsed agenda"
    );

    let mut db = Database::open(&db_path)
        .map_err(|e| anyhow!("Failed to open {}: {}", db_path.display(), e))?;

    let summary = import_forest(&mut db, &assembly.sessions, mode)
        .map_err(|e| anyhow!("error during import: {}", e))?;

    db.close()?;

    println!("Import complete!");
    println!("Imported {} into {}", summary, db_path.display());

    Ok(())
}
