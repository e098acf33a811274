// ============================================================
// TABULAR INFRASTRUCTURE LAYER
// ============================================================
// Delimited-text decoding, parsing and schema inference

mod delimited_parser;
mod schema_inference;

pub use delimited_parser::DelimitedParser;
pub use schema_inference::SchemaInspector;
