use crate::dom::{InputLike, RowLike};
use crate::normalize::normalize;

/// One search input wired to the row snapshot of its target table.
///
/// The snapshot is fixed at creation; rows added to the table afterwards are
/// neither matched nor hidden by this binding.
pub struct SearchBinding<I: InputLike, R: RowLike> {
    input: I,
    rows: Vec<R>,
}

impl<I: InputLike, R: RowLike> SearchBinding<I, R> {
    pub fn new(input: I, rows: Vec<R>) -> Self {
        Self { input, rows }
    }

    /// Number of rows captured at initialization.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The per-event callback: read the input's current value and refilter.
    ///
    /// Invoke once per input-change event; runs synchronously to completion.
    pub fn handle_input(&self) {
        self.apply(&self.input.value());
    }

    /// Recompute every snapshotted row's visibility against `raw_query`.
    ///
    /// A row is visible when the normalized query is empty or the row's
    /// normalized text contains it as a substring.
    pub fn apply(&self, raw_query: &str) {
        let query = normalize(raw_query);
        for row in &self.rows {
            let text = normalize(&row.text());
            row.set_visible(query.is_empty() || text.contains(&query));
        }
    }
}
