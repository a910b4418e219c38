/// Data layer: core types, loading, and sorting.
///
/// Architecture:
/// ```text
///      output.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  column names, Vec<Row>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  stable sort by one column → SortedView (positions 0..N)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sort;
