//! Bulk import of historical moves from tabular exports.
//!
//! Game logs arrive as delimited text with a header row. Only the `player`
//! column matters: its cells, in row order, become the imported history.
mod error;
mod sheet;

pub use error::*;
pub use sheet::*;
