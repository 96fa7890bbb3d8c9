//! PoultryWatch report assembly.
//!
//! Historical-data summarization and performance-report building on top
//! of the evaluation core. Produces plain numeric and textual fields for
//! the export collaborator; document layout is out of scope.

pub mod history;
pub mod report;
