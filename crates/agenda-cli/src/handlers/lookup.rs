use crate::args::LookupCli;
use crate::config::AgendaConfig;
use crate::presentation;
use crate::types::OutputFormat;
use agenda_engine::lookup;
use agenda_index::Database;
use anyhow::Result;

pub fn run_lookup(cli: LookupCli) -> Result<()> {
    let config = AgendaConfig::load(cli.common.config.as_deref())?;
    let db_path = config.resolve_database(cli.common.db.as_deref());

    let db = Database::open_existing(&db_path)?;
    let records = lookup(&db, cli.column, &cli.value)?;

    let rendered = match cli.format {
        OutputFormat::Plain => presentation::render_plain(&records, presentation::use_color()),
        OutputFormat::Json => presentation::render_json(&records)?,
    };
    print!("{}", rendered);

    db.close()?;

    Ok(())
}
