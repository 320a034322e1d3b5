/// Data layer: core types, loading, summaries and cleaning.
///
/// Architecture:
/// ```text
///      data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (column kinds inferred)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  describe / head / corr of numeric columns → stdout
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  drop rows with any missing value
///   └──────────┘
/// ```

pub mod clean;
pub mod loader;
pub mod model;
pub mod summary;
