// SQLite agenda store
// One flat table; hierarchy lives only in parent_id

mod db;
mod error;
mod queries;
pub mod schema;

// Public API
pub use db::{AgendaWriter, Database, ImportBatch};
pub use error::{Error, Result};
pub use schema::{AGENDA_TABLE, ColumnDef, TableSchema};
