//! I/O module
//!
//! Handles persistence of the store and CSV statements.
//!
//! # Components
//!
//! - `json_files` - The two whole-file JSON documents the store lives in
//! - `memory` - In-memory persistence for tests and benchmarks
//! - `csv_format` - CSV statement export and import

pub mod csv_format;
pub mod json_files;
pub mod memory;

pub use csv_format::{read_statement_csv, write_statement_csv, StatementRecord};
pub use json_files::JsonFiles;
pub use memory::MemoryPersistence;
