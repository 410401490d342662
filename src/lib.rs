//! Diacritic-insensitive live filtering of table rows.
//!
//! [`initialize_row_filters`] scans a document for inputs carrying the
//! [`SEARCH_TARGET_ATTR`] marker attribute, binds each one to the row
//! snapshot of its target table, and returns the bindings. The document,
//! inputs, tables and rows sit behind narrow traits so the filtering
//! behavior can be exercised without a rendering environment.

mod binding;
mod dom;
mod filter;
mod normalize;


pub use binding::SearchBinding;
pub use dom::{DocumentLike, InputLike, RowLike, TableLike};
pub use filter::{SEARCH_TARGET_ATTR, initialize_row_filters};
pub use normalize::normalize;
