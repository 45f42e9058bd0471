//! Domain models for Rollbook.
//!
//! # Core Concepts
//!
//! - [`Student`]: One enrolled person, identified by a roll number chosen by
//!   the user. Carries running attendance totals (not per-date records) and
//!   the most recent exam marks.
//! - [`Grade`]: Letter derived from the marks, with a separate `N/A` state for
//!   students who have not been marked yet.

mod grade;
mod student;

pub use grade::*;
pub use student::*;
