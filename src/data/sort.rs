use std::cmp::Ordering;

use crate::error::DataError;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// SortedView – a dataset re-ordered by one numeric column
// ---------------------------------------------------------------------------

/// One row of the sorted view.
#[derive(Debug, Clone)]
pub struct SortedRow {
    /// Fresh 0-based rank after sorting.
    pub position: usize,
    /// Index of the row in the source dataset.
    pub source_index: usize,
    /// Value of the sort column.
    pub proportion: f64,
    pub row: Row,
}

/// A new, re-indexed copy of the dataset ordered by one column ascending.
#[derive(Debug, Clone, Default)]
pub struct SortedView {
    pub column: String,
    /// Every source cell was an integer literal.
    pub integer: bool,
    pub rows: Vec<SortedRow>,
}

impl SortedView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sorted column values, in position order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.proportion).collect()
    }

    /// `[position, value]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .map(|r| [r.position as f64, r.proportion])
            .collect()
    }
}

/// Ascending order with NaN after every number. NaNs compare equal to each
/// other so the stable sort keeps their input order.
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Stable ascending sort of `dataset` by `column`, assigning positions `0..N`.
///
/// The source dataset is left untouched.
pub fn sort_by_column(dataset: &Dataset, column: &str) -> Result<SortedView, DataError> {
    let values = dataset.numeric_column(column)?;

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| nan_last(values[a], values[b]));

    let rows = order
        .into_iter()
        .enumerate()
        .map(|(position, source_index)| SortedRow {
            position,
            source_index,
            proportion: values[source_index],
            row: dataset.rows[source_index].clone(),
        })
        .collect();

    log::debug!("Sorted {} rows by '{column}'", values.len());

    Ok(SortedView {
        column: column.to_string(),
        integer: dataset.is_integer_column(column),
        rows,
    })
}
