pub mod csv_codec;

pub use csv_codec::{
    CodecError, CsvRow, ImportReport, ParsedRows, SkipReason, SkippedRow, export_to_string,
    import_from_reader, import_from_str, import_rows, parse_rows, write_export,
};
