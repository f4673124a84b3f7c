mod assemble;
mod error;
mod import;
mod lookup;

pub use assemble::{Assembly, assemble};
pub use error::{Error, Result};
pub use import::{ImportMode, ImportSummary, import_forest, write_forest};
pub use lookup::lookup;
