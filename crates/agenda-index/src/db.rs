use agenda_types::{AgendaFields, AgendaRecord, LookupColumn};
use rusqlite::{Connection, OpenFlags, Transaction};
use std::path::Path;

use crate::queries::agenda;
use crate::schema::{self, AGENDA_TABLE};
use crate::{Error, Result};

/// Anything agenda rows can be written to: the database itself (each insert
/// commits on its own) or an open [`ImportBatch`].
pub trait AgendaWriter {
    /// Insert one row and return its assigned id.
    fn insert_agenda(&self, fields: &AgendaFields, parent_id: Option<i64>) -> Result<i64>;
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database for writing and make sure the agenda
    /// table exists.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        tracing::debug!(path = %db_path.display(), "opened agenda database");
        Ok(db)
    }

    /// Open an existing database without creating anything.
    pub fn open_existing(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::NotFound(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!(path = %db_path.display(), "opened agenda database read-only");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::ensure_table(&self.conn, &AGENDA_TABLE)
    }

    /// Start a batch whose inserts become visible together on commit.
    /// Dropping the batch without committing rolls every insert back.
    pub fn begin_import(&mut self) -> Result<ImportBatch<'_>> {
        let tx = self.conn.transaction()?;
        Ok(ImportBatch { tx })
    }

    /// Rows whose `column` matches `value`, in insertion order.
    ///
    /// `speakers` is a case-sensitive substring match; every other column
    /// is a SQL `LIKE` match, so `%` and `_` in the value act as wildcards.
    pub fn find_by_column(&self, column: LookupColumn, value: &str) -> Result<Vec<AgendaRecord>> {
        agenda::find_by_column(&self.conn, column, value)
    }

    /// `Sub` rows attached to the given session, in insertion order.
    pub fn sub_sessions_of(&self, parent_id: i64) -> Result<Vec<AgendaRecord>> {
        agenda::sub_sessions_of(&self.conn, parent_id)
    }

    pub fn list_all(&self) -> Result<Vec<AgendaRecord>> {
        agenda::list_all(&self.conn)
    }

    pub fn count(&self) -> Result<usize> {
        agenda::count(&self.conn)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::Database(err))
    }
}

impl AgendaWriter for Database {
    fn insert_agenda(&self, fields: &AgendaFields, parent_id: Option<i64>) -> Result<i64> {
        agenda::insert(&self.conn, fields, parent_id)
    }
}

/// Transaction-scoped writer used for all-or-nothing imports.
pub struct ImportBatch<'a> {
    tx: Transaction<'a>,
}

impl ImportBatch<'_> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        Ok(())
    }
}

impl AgendaWriter for ImportBatch<'_> {
    fn insert_agenda(&self, fields: &AgendaFields, parent_id: Option<i64>) -> Result<i64> {
        agenda::insert(&self.tx, fields, parent_id)
    }
}
