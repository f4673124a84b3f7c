mod import;
mod lookup;

pub use import::run_import;
pub use lookup::run_lookup;
