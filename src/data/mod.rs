/// Data layer: core types, mock generation, import, and trial filtering.
///
/// Architecture:
/// ```text
///   selectors (BiomarkerType, DiseaseFilter)        .csv / .json
///        │                                              │
///        ▼                                              ▼
///   ┌──────────┐                                   ┌──────────┐
///   │ generate │  lookup tables + formulas         │  loader  │  parse file
///   └──────────┘                                   └──────────┘
///        │                                              │
///        ▼                                              ▼
///   ┌──────────────────────────────────────────────────────┐
///   │ model     CorrelationMatrix, SeriesSet               │
///   └──────────────────────────────────────────────────────┘
///
///   trials (static catalogue) ──▶ filter (FilterCriteria) ──▶ matches
/// ```

pub mod filter;
pub mod generate;
pub mod loader;
pub mod model;
pub mod trials;
