//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Title rows above the first agenda row in the default sheet layout.
pub const HEADER_ROWS: usize = 16;

/// One leading orphan, three sessions, three attached sub-sessions.
pub const SAMPLE_AGENDA: [[&str; 8]; 7] = [
    ["06/16/2018", "08:30 AM", "08:45 AM", "Sub", "Orphan", "Lobby", "", "Nobody"],
    ["06/16/2018", "09:00 AM", "10:00 AM", "Session", "Keynote", "Hall A", "Opening talk", "Ada Lovelace"],
    ["06/16/2018", "10:00 AM", "10:15 AM", "Sub", "Q&A", "Hall A", "", "Ada Lovelace; Alan Kay"],
    ["06/16/2018", "11:00 AM", "12:00 PM", "Session", "Panel", "Room 2", "Tools, talks", "Grace Hopper"],
    ["06/16/2018", "11:00 AM", "11:10 AM", "Sub", "Opening remarks", "Room 2", "", "Grace Hopper"],
    ["06/16/2018", "11:10 AM", "12:00 PM", "Sub", "Debate", "Room 2", "", "alan kay"],
    ["06/16/2018", "01:00 PM", "02:00 PM", "Session", "Closing", "Hall A", "", ""],
];

pub struct TestFixture {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("agenda.db");

        Self { temp_dir, db_path }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Copy a workbook from the sheet crate's fixtures into the fixture dir.
    pub fn copy_workbook(&self, name: &str) -> PathBuf {
        let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("agenda-sheet/tests/fixtures")
            .join(name);
        let dest = self.temp_dir.path().join(name);

        std::fs::copy(&source, &dest).expect("Failed to copy workbook fixture");
        dest
    }

    /// Write a CSV agenda with the default block of title rows on top.
    pub fn write_agenda(&self, name: &str, rows: &[[&str; 8]]) -> PathBuf {
        self.write_agenda_with_header(name, HEADER_ROWS, rows)
    }

    pub fn write_agenda_with_header(
        &self,
        name: &str,
        header_rows: usize,
        rows: &[[&str; 8]],
    ) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut writer = csv::Writer::from_path(&path).expect("Failed to create agenda file");

        for index in 0..header_rows {
            let title = if index == 0 { "Conference Agenda" } else { "" };
            writer
                .write_record([title, "", "", "", "", "", "", ""])
                .expect("Failed to write header row");
        }
        for row in rows {
            writer.write_record(row).expect("Failed to write agenda row");
        }
        writer.flush().expect("Failed to flush agenda file");

        path
    }

    /// A binary running inside the fixture directory with a clean environment.
    pub fn bin(&self, name: &str) -> Command {
        let mut cmd = match name {
            "import_agenda" => assert_cmd::cargo::cargo_bin_cmd!("import_agenda"),
            _ => assert_cmd::cargo::cargo_bin_cmd!("lookup_agenda"),
        };
        cmd.current_dir(self.dir())
            .env_remove("AGENDA_DB")
            .env_remove("AGENDA_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn import_command(&self) -> Command {
        let mut cmd = self.bin("import_agenda");
        cmd.arg("--db").arg(self.db_path());
        cmd
    }

    pub fn lookup_command(&self) -> Command {
        let mut cmd = self.bin("lookup_agenda");
        cmd.arg("--db").arg(self.db_path());
        cmd
    }

    /// Import `rows` and fail the test if the importer does not succeed.
    pub fn import_rows(&self, rows: &[[&str; 8]]) {
        let file = self.write_agenda("agenda.csv", rows);
        self.import_command().arg(&file).assert().success();
    }

    pub fn row_count(&self) -> i64 {
        rusqlite::Connection::open(self.db_path())
            .expect("Failed to open database")
            .query_row("SELECT COUNT(*) FROM agendas", [], |row| row.get(0))
            .expect("Failed to count rows")
    }

    /// Make every insert of `title` fail, to simulate a storage error.
    pub fn poison_title(&self, title: &str) {
        rusqlite::Connection::open(self.db_path())
            .expect("Failed to open database")
            .execute_batch(&format!(
                "CREATE TRIGGER poison BEFORE INSERT ON agendas \
                 WHEN NEW.session_title = '{}' \
                 BEGIN SELECT RAISE(ABORT, 'poisoned row'); END;",
                title
            ))
            .expect("Failed to install trigger");
    }
}

/// `Session Title:` values of a plain lookup report, in order.
pub fn titles_in_report(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("Session Title: "))
        .map(str::to_string)
        .collect()
}
