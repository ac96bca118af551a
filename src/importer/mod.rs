// ==========================================
// Stockwatch - Import Layer
// ==========================================
// Turns external tabular data into validated sales records:
// column mapping -> date/quantity coercion with markers ->
// marker filtering with aggregate diagnostics.
// ==========================================

pub mod date_parser;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_validator;

// Re-export core types
pub use date_parser::DateParser;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ColumnMapping, FieldMapper};
pub use file_parser::CsvParser;
pub use record_validator::{RecordValidator, ValidationReport};
