//! Rollbook: a console roster manager.
//!
//! Tracks students by roll number, counts class attendance, records one exam
//! mark per student with a derived letter grade, and keeps the roster in a
//! flat text file between runs.

pub mod console;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Result, RosterError};
