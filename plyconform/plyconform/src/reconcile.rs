//! Name-based mapping of source columns onto a target schema.

use plyconform_core::Schema;
use tracing::{debug, info};

use crate::table::{Columns, VertexTable};

/// Output of [`reconcile`]: the columns to write plus which names were
/// copied, zero-filled and dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    pub columns: Columns,
    /// Target properties sourced from the input, in schema order.
    pub copied: Vec<String>,
    /// Target properties absent from the input, in schema order.
    pub zero_filled: Vec<String>,
    /// Input properties absent from the target, sorted by name.
    pub dropped: Vec<String>,
}

/// Produce one column per property of `target`.
///
/// A same-named source column is moved over unchanged; a missing one becomes
/// `vertex_count` zeros. Source columns the target does not name are
/// dropped. Never fails.
pub fn reconcile(source: VertexTable, target: &Schema, vertex_count: usize) -> Reconciliation {
    let mut remaining = source.into_columns();
    let mut out = Reconciliation::default();

    for property in target.iter() {
        let name = property.name.clone();
        if out.columns.contains_key(&name) {
            continue;
        }
        match remaining.remove(&name) {
            Some(column) => {
                out.columns.insert(name.clone(), column);
                out.copied.push(name);
            }
            None => {
                out.columns.insert(name.clone(), vec![0.0; vertex_count]);
                out.zero_filled.push(name);
            }
        }
    }

    out.dropped = remaining.into_keys().collect();
    out.dropped.sort();

    info!(
        copied = out.copied.len(),
        zero_filled = out.zero_filled.len(),
        dropped = out.dropped.len(),
        "reconciled columns against target schema"
    );
    if !out.dropped.is_empty() {
        debug!(dropped = ?out.dropped, "source properties not in target schema");
    }
    out
}
