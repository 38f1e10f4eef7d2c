/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StadiumTable (once per source)
///   └──────────┘
///        │
///        ├──────────────► catalog    distinct conferences → sidebar options
///        ▼
///   ┌──────────┐
///   │  filter   │  conference ∈ selection, capacity > min, built > min
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  counts per conference, mean capacity per conference
///   └───────────┘
/// ```

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

pub use error::DashboardError;
