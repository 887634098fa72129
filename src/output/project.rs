//! Row projection over lookup batches
//!
//! Turns a batch plus a resolved [`FieldAccessor`] into an ordered sequence
//! of tabular rows, applying the header and key-column policy in one place.
//!
//! Two rules govern row counts and must hold for every path:
//!
//! - scalar paths never skip entries: an absent value becomes an empty cell,
//!   so the output stays rectangular and row count equals batch size;
//! - whole-section paths skip entries whose section is absent, so row count
//!   may be less than batch size.
//!
//! Rows are produced lazily so large batches can stream straight into the
//! tabular encoder without materializing the full row set. The iterator is
//! finite, forward-only, and single-consumer; call [`project`] again to
//! re-iterate.

use crate::output::resolver::{FieldAccessor, Projectable};
use crate::schema::Batch;

/// One output row: a flat list of printable cells
pub type Row = Vec<String>;

/// Header and key-column policy for a projection
#[derive(Debug, Clone, Copy)]
pub struct ProjectOptions {
    /// Emit a header row before any data rows
    pub emit_header: bool,
    /// Prepend the identifying key column to every row
    pub include_key_column: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            emit_header: true,
            include_key_column: true,
        }
    }
}

/// Project a batch through a resolved accessor
///
/// The header row (if requested) is yielded first, exactly once, regardless
/// of whether any data rows follow. For [`FieldAccessor::Unknown`] the header
/// names the literal path and no data rows are produced.
pub fn project<'a, R: Projectable>(
    batch: &'a Batch<R>,
    accessor: &'a FieldAccessor<R>,
    options: ProjectOptions,
) -> Rows<'a, R> {
    Rows {
        entries: batch.iter(),
        accessor,
        options,
        header_pending: options.emit_header,
    }
}

/// Lazy row sequence produced by [`project`]
pub struct Rows<'a, R> {
    entries: indexmap::map::Iter<'a, String, R>,
    accessor: &'a FieldAccessor<R>,
    options: ProjectOptions,
    header_pending: bool,
}

impl<R: Projectable> Rows<'_, R> {
    fn header_row(&self) -> Row {
        let mut row = Row::new();
        if self.options.include_key_column {
            row.push(R::KEY_COLUMN.to_string());
        }
        match self.accessor {
            FieldAccessor::Scalar { column, .. } => row.push(column.to_string()),
            FieldAccessor::Section { columns, .. } => {
                row.extend(columns.iter().map(|c| c.to_string()))
            }
            FieldAccessor::Unknown(path) => row.push(path.clone()),
        }
        row
    }
}

impl<R: Projectable> Iterator for Rows<'_, R> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.header_pending {
            self.header_pending = false;
            return Some(self.header_row());
        }

        match self.accessor {
            FieldAccessor::Unknown(_) => None,
            FieldAccessor::Scalar { get, .. } => {
                let (key, record) = self.entries.next()?;
                let mut row = Row::new();
                if self.options.include_key_column {
                    row.push(key.clone());
                }
                row.push(get(record).unwrap_or_default());
                Some(row)
            }
            FieldAccessor::Section { get, .. } => {
                // entries whose section is absent are skipped entirely
                loop {
                    let (key, record) = self.entries.next()?;
                    if let Some(cells) = get(record) {
                        let mut row = Row::new();
                        if self.options.include_key_column {
                            row.push(key.clone());
                        }
                        row.extend(cells);
                        return Some(row);
                    }
                }
            }
        }
    }
}
