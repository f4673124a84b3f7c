//! Command-line front end for the agenda store.
//!
//! `import_agenda` loads a spreadsheet into SQLite; `lookup_agenda` searches
//! it by one column. Both binaries are thin wrappers over this library.

mod args;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{CommonArgs, ImportCli, LookupCli};
pub use handlers::{run_import, run_lookup};
pub use logging::init_logging;
