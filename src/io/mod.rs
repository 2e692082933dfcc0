pub mod csv_reader;
pub mod error;
pub mod parse;
pub mod statement_writer;

// Re-export commonly used types
pub use csv_reader::CsvOperationStream;
pub use error::IoError;
pub use parse::RawOperationRecord;
pub use statement_writer::write_statements;
