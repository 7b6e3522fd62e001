//! Query parsing for searching documents.

pub mod parser;

pub use parser::{Query, QueryParser};
