//! Narrow interfaces over the host document.
//!
//! The original behavior duck-types against `tBodies`, `rows` and
//! `innerText`; these traits name exactly the operations the filter needs
//! so a host can adapt a real DOM and tests can substitute fakes.

/// A single table row with a rendered text representation.
pub trait RowLike {
    /// The row's rendered text content.
    fn text(&self) -> String;

    /// Show or hide the row. The only mutation this crate performs.
    fn set_visible(&self, visible: bool);
}

/// A table-like element exposing the rows of its first body section.
pub trait TableLike {
    type Row: RowLike;

    /// Rows of the first body section, in order. `None` when the table has
    /// no body section at all; an empty `Vec` is a present-but-empty body.
    fn body_rows(&self) -> Option<Vec<Self::Row>>;
}

/// A search input carrying the target marker attribute
/// ([`SEARCH_TARGET_ATTR`](crate::SEARCH_TARGET_ATTR)).
pub trait InputLike {
    /// The marker attribute's value, a selector for the target table.
    fn target_selector(&self) -> String;

    /// The input's current text, read once per change event.
    fn value(&self) -> String;
}

/// The document scanned at initialization.
pub trait DocumentLike {
    type Input: InputLike;
    type Table: TableLike;

    /// All inputs carrying [`SEARCH_TARGET_ATTR`](crate::SEARCH_TARGET_ATTR),
    /// in document order.
    fn search_inputs(&self) -> Vec<Self::Input>;

    /// Resolve a selector to a table, if any element matches.
    fn query_table(&self, selector: &str) -> Option<Self::Table>;
}
