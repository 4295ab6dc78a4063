/// Data layer: core types, loading, classification and aggregation.
///
/// Architecture:
/// ```text
///   Table2.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  pad/truncate to schema, coerce val1 → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  disease → Group, method → Category, drop unclassified
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  (Group, Category) → n / mean / sd, absent when empty
///   └───────────┘
/// ```

pub mod aggregate;
pub mod classify;
pub mod loader;
pub mod model;
