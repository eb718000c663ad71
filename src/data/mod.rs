//! Data layer: core types, loading, and binning.
//!
//! Architecture:
//! ```text
//!  sigma1.txt / sigma-1.txt ...
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  whitespace-separated floats → DataSeries
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  model    │  DataSeries, SigmaSet, linspace x-axis
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ histogram  │  equal-width bins → counts
//!   └───────────┘
//! ```

pub mod histogram;
pub mod loader;
pub mod model;
