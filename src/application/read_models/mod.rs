//! Read models
//!
//! View-optimized structs derived from a classification for presentation.

pub mod category_summary;

pub use category_summary::{CategoryRow, CategorySummary};
