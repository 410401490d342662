use crate::binding::SearchBinding;
use crate::dom::{DocumentLike, InputLike, TableLike};

/// Marker attribute carried by search inputs; its value is a selector
/// identifying the target table.
pub const SEARCH_TARGET_ATTR: &str = "data-tbs-search";

/// Scan `document` for marked search inputs and bind each one to its target
/// table's row snapshot.
///
/// Inputs whose selector resolves to nothing, or to a table without a body
/// section, are skipped silently. Call once after the document is ready and
/// invoke each binding's [`SearchBinding::handle_input`] on its input's
/// change events.
pub fn initialize_row_filters<D: DocumentLike>(
    document: &D,
) -> Vec<SearchBinding<D::Input, <D::Table as TableLike>::Row>> {
    let mut bindings = Vec::new();
    for input in document.search_inputs() {
        let selector = input.target_selector();
        let Some(table) = document.query_table(&selector) else {
            log::debug!("search target {selector:?} did not resolve, skipping input");
            continue;
        };
        let Some(rows) = table.body_rows() else {
            log::debug!("search target {selector:?} has no body section, skipping input");
            continue;
        };
        bindings.push(SearchBinding::new(input, rows));
    }
    log::debug!("initialized {} row filter binding(s)", bindings.len());
    bindings
}
