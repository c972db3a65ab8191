/// Data layer: core types, loading, filtering and the two chart projections.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site index, payload bounds
///   └───────────────┘
///        │  (read-only, shared by reference)
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌───────────┐         ┌──────────┐
///   │ aggregate  │  site   │ project  │  site + payload range
///   └───────────┘         └──────────┘
///     pie slices           annotated scatter points
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod project;
