//! PoultryWatch evaluation core.
//!
//! Pure domain logic for the farm-monitoring dashboard: range
//! classification of environmental readings, standards-comparison
//! scoring, and aggregate performance scoring. This crate contains no
//! database or I/O dependencies; the caller is responsible for loading
//! readings and configuration and passing them in.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod metric_names;
pub mod performance;
pub mod range;
pub mod recommendation;
pub mod roles;
pub mod session;
pub mod standards;
pub mod types;
