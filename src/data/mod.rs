pub mod record;
pub mod source;

pub use record::{Record, parse_csv};
pub use source::{ConfiguredSource, CsvText, FileSource, RecordSource, SheetSource, from_config};
