/// Data layer: core types, loading, and the chart view model.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, derived stats
///   └──────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ view_model  │  (site, payload range) → pie / scatter data
///   └────────────┘
/// ```
///
/// The view model is pure: every chart recomputation is a fresh function of
/// the immutable dataset and the current control values.

pub mod loader;
pub mod model;
pub mod view_model;
