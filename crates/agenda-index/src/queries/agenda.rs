use agenda_types::{AgendaFields, AgendaRecord, LookupColumn, SessionType};
use rusqlite::{Connection, Row};

use crate::Result;
use crate::schema::{self, AGENDA_TABLE};

macro_rules! select_agendas {
    ($filter:literal) => {
        concat!(
            "SELECT id, date, time_start, time_end, session_type, session_title, ",
            "location, description, speakers, parent_id ",
            "FROM agendas WHERE ",
            $filter,
            " ORDER BY id"
        )
    };
}

// One fixed statement per lookup column; the column name is never spliced in at runtime.
fn match_query(column: LookupColumn) -> &'static str {
    match column {
        LookupColumn::Date => select_agendas!("date LIKE ?1"),
        LookupColumn::TimeStart => select_agendas!("time_start LIKE ?1"),
        LookupColumn::TimeEnd => select_agendas!("time_end LIKE ?1"),
        LookupColumn::SessionTitle => select_agendas!("session_title LIKE ?1"),
        LookupColumn::Location => select_agendas!("location LIKE ?1"),
        LookupColumn::Description => select_agendas!("description LIKE ?1"),
        // instr() keeps the substring match case-sensitive and free of LIKE wildcards
        LookupColumn::Speakers => select_agendas!("instr(speakers, ?1) > 0"),
    }
}

const SUB_SESSIONS_QUERY: &str = select_agendas!("session_type = 'Sub' AND parent_id = ?1");
const ALL_QUERY: &str = select_agendas!("1 = 1");

fn map_row(row: &Row<'_>) -> rusqlite::Result<AgendaRecord> {
    Ok(AgendaRecord {
        id: row.get(0)?,
        fields: AgendaFields {
            date: text(row, 1)?,
            time_start: text(row, 2)?,
            time_end: text(row, 3)?,
            session_type: SessionType::from(text(row, 4)?),
            session_title: text(row, 5)?,
            location: text(row, 6)?,
            description: text(row, 7)?,
            speakers: text(row, 8)?,
        },
        parent_id: row.get(9)?,
    })
}

// Rows written by other tools may hold NULLs; read them as empty text.
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

pub fn insert(conn: &Connection, fields: &AgendaFields, parent_id: Option<i64>) -> Result<i64> {
    let session_type = fields.session_type.as_str();
    schema::insert(
        conn,
        &AGENDA_TABLE,
        &[
            &fields.date,
            &fields.time_start,
            &fields.time_end,
            &session_type,
            &fields.session_title,
            &fields.location,
            &fields.description,
            &fields.speakers,
            &parent_id,
        ],
    )
}

pub fn find_by_column(
    conn: &Connection,
    column: LookupColumn,
    value: &str,
) -> Result<Vec<AgendaRecord>> {
    let mut stmt = conn.prepare_cached(match_query(column))?;
    let records = stmt
        .query_map([value], map_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

pub fn sub_sessions_of(conn: &Connection, parent_id: i64) -> Result<Vec<AgendaRecord>> {
    let mut stmt = conn.prepare_cached(SUB_SESSIONS_QUERY)?;
    let records = stmt
        .query_map([parent_id], map_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

pub fn list_all(conn: &Connection) -> Result<Vec<AgendaRecord>> {
    let mut stmt = conn.prepare(ALL_QUERY)?;
    let records = stmt
        .query_map([], map_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM agendas", [], |row| row.get(0))?;
    Ok(count as usize)
}
