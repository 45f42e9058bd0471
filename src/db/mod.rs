mod file;
pub mod format;

pub use file::{DataFile, LoadOutcome, DEFAULT_DATA_FILE};

use crate::error::{Result, RosterError};
use crate::models::Student;

/// The in-memory roster for a session.
///
/// Students are kept in insertion order, which is also the report order.
/// Roll numbers are unique; there is no removal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the student with `roll`, by linear scan.
    pub fn position(&self, roll: i32) -> Option<usize> {
        self.students.iter().position(|s| s.roll() == roll)
    }

    pub fn find(&self, roll: i32) -> Option<&Student> {
        self.position(roll).map(|i| &self.students[i])
    }

    pub fn find_mut(&mut self, roll: i32) -> Option<&mut Student> {
        self.position(roll).map(move |i| &mut self.students[i])
    }

    pub fn contains(&self, roll: i32) -> bool {
        self.position(roll).is_some()
    }

    /// Append a student, rejecting a roll number that is already taken.
    pub fn add(&mut self, student: Student) -> Result<&Student> {
        if self.contains(student.roll()) {
            return Err(RosterError::DuplicateRoll(student.roll()));
        }

        tracing::debug!(roll = student.roll(), name = student.name(), "student added");
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Student> {
        self.students.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
