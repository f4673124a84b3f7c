//! Table helper: create a table from a static column list and insert rows
//! into it.
//!
//! Identifiers only ever come from `'static` schema constants, so building
//! the DDL and insert statements with `format!` never touches user input.
//! Values always go through bound parameters.

use rusqlite::{Connection, ToSql};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

impl ColumnDef {
    pub const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self { name, sql_type }
    }

    fn is_primary_key(&self) -> bool {
        self.sql_type.to_ascii_uppercase().contains("PRIMARY KEY")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    /// `(index name, column)` pairs created alongside the table.
    pub indexes: &'static [(&'static str, &'static str)],
}

// No schema version and no migration: an existing table is appended to as-is.
pub const AGENDA_TABLE: TableSchema = TableSchema {
    name: "agendas",
    columns: &[
        ColumnDef::new("id", "INTEGER PRIMARY KEY"),
        ColumnDef::new("date", "TEXT"),
        ColumnDef::new("time_start", "TEXT"),
        ColumnDef::new("time_end", "TEXT"),
        ColumnDef::new("session_type", "TEXT"),
        ColumnDef::new("session_title", "TEXT"),
        ColumnDef::new("location", "TEXT"),
        ColumnDef::new("description", "TEXT"),
        ColumnDef::new("speakers", "TEXT"),
        ColumnDef::new("parent_id", "INTEGER"),
    ],
    indexes: &[("idx_agendas_parent", "parent_id")],
};

impl TableSchema {
    /// Columns supplied on insert (everything but the primary key).
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !c.is_primary_key())
    }

    pub fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("CREATE TABLE IF NOT EXISTS {} ({});", self.name, columns);
        for (index, column) in self.indexes {
            sql.push_str(&format!(
                "\nCREATE INDEX IF NOT EXISTS {} ON {}({});",
                index, self.name, column
            ));
        }
        sql
    }

    pub fn insert_sql(&self) -> String {
        let names: Vec<&str> = self.insert_columns().map(|c| c.name).collect();
        let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{}", i)).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            names.join(", "),
            placeholders.join(", ")
        )
    }
}

/// Create the table (and its indexes) unless it already exists.
pub fn ensure_table(conn: &Connection, schema: &TableSchema) -> Result<()> {
    conn.execute_batch(&schema.create_sql())?;
    Ok(())
}

/// Insert one row and return the id SQLite assigned to it.
///
/// `values` must line up with [`TableSchema::insert_columns`].
pub fn insert(conn: &Connection, schema: &TableSchema, values: &[&dyn ToSql]) -> Result<i64> {
    let expected = schema.insert_columns().count();
    if values.len() != expected {
        return Err(Error::Query(format!(
            "insert into {} expects {} values, got {}",
            schema.name,
            expected,
            values.len()
        )));
    }

    let mut stmt = conn.prepare_cached(&schema.insert_sql())?;
    stmt.execute(values)?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agenda_create_sql() {
        let sql = AGENDA_TABLE.create_sql();

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS agendas (id INTEGER PRIMARY KEY, date TEXT,"));
        assert!(sql.contains("parent_id INTEGER)"));
        assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_agendas_parent ON agendas(parent_id);"));
    }

    #[test]
    fn test_agenda_insert_sql_skips_primary_key() {
        assert_eq!(
            AGENDA_TABLE.insert_sql(),
            "INSERT INTO agendas (date, time_start, time_end, session_type, session_title, \
             location, description, speakers, parent_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        );
    }

    #[test]
    fn test_ensure_table_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        ensure_table(&conn, &AGENDA_TABLE).unwrap();
        ensure_table(&conn, &AGENDA_TABLE).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'agendas'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_generic_table_insert_returns_row_ids() {
        const NOTES: TableSchema = TableSchema {
            name: "notes",
            columns: &[
                ColumnDef::new("id", "integer PRIMARY KEY"),
                ColumnDef::new("body", "TEXT"),
            ],
            indexes: &[],
        };
        let conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, &NOTES).unwrap();

        let first = insert(&conn, &NOTES, &[&"hello"]).unwrap();
        let second = insert(&conn, &NOTES, &[&"world"]).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_insert_rejects_wrong_arity() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, &AGENDA_TABLE).unwrap();

        let err = insert(&conn, &AGENDA_TABLE, &[&"only one"]).unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }
}
