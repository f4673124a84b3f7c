mod column;
mod entry;
mod record;

pub use column::LookupColumn;
pub use entry::{AgendaEntry, AgendaFields, SessionType};
pub use record::AgendaRecord;
