use crate::error::{Result, RosterError};

use super::Grade;

/// Inclusive bounds for exam marks.
pub const MARKS_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// One enrolled student and their running statistics.
///
/// The roll number and name are fixed at creation. Attendance only moves
/// through [`Student::record_attendance`] and marks only through
/// [`Student::set_marks`]; the grade is recomputed eagerly whenever the marks
/// change so that a student who was never marked keeps reporting `N/A`.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    roll: i32,
    name: String,
    total_classes: u32,
    attended_classes: u32,
    /// Latest exam score; earlier scores are overwritten.
    marks: f64,
    grade: Grade,
}

impl Student {
    /// Create a student with no attendance and no marks.
    pub fn new(roll: i32, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::validation("Name cannot be empty."));
        }

        Ok(Self {
            roll,
            name,
            total_classes: 0,
            attended_classes: 0,
            marks: 0.0,
            grade: Grade::NotAssigned,
        })
    }

    /// Rebuild a student from persisted fields, recomputing the grade from `marks`.
    pub fn restore(
        roll: i32,
        name: impl Into<String>,
        total_classes: u32,
        attended_classes: u32,
        marks: f64,
    ) -> Result<Self> {
        if attended_classes > total_classes {
            return Err(RosterError::validation(format!(
                "Roll {roll}: attended classes ({attended_classes}) exceed total classes ({total_classes})"
            )));
        }
        check_marks(marks)?;

        let mut student = Self::new(roll, name)?;
        student.total_classes = total_classes;
        student.attended_classes = attended_classes;
        student.marks = marks;
        student.grade = Grade::from_marks(marks);
        Ok(student)
    }

    pub fn roll(&self) -> i32 {
        self.roll
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_classes(&self) -> u32 {
        self.total_classes
    }

    pub fn attended_classes(&self) -> u32 {
        self.attended_classes
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Whether another session can be counted without overflowing the totals.
    pub fn has_attendance_room(&self) -> bool {
        self.total_classes < u32::MAX
    }

    /// Count one class session, attended or not.
    ///
    /// Fails, leaving the record untouched, once `total_classes` is saturated.
    pub fn record_attendance(&mut self, present: bool) -> Result<()> {
        let total = self.total_classes.checked_add(1).ok_or_else(|| {
            RosterError::validation(format!(
                "Roll {}: no more class sessions can be recorded.",
                self.roll
            ))
        })?;

        self.total_classes = total;
        // attended <= old total < u32::MAX
        if present {
            self.attended_classes += 1;
        }
        Ok(())
    }

    /// Replace the exam marks. Out-of-range values leave the record untouched.
    pub fn set_marks(&mut self, marks: f64) -> Result<()> {
        check_marks(marks)?;
        self.marks = marks;
        self.grade = Grade::from_marks(marks);
        Ok(())
    }

    /// Share of sessions attended, 0.0 when no session has been recorded.
    pub fn attendance_percent(&self) -> f64 {
        if self.total_classes == 0 {
            return 0.0;
        }
        f64::from(self.attended_classes) / f64::from(self.total_classes) * 100.0
    }
}

fn check_marks(marks: f64) -> Result<()> {
    // NaN fails contains()
    if MARKS_RANGE.contains(&marks) {
        Ok(())
    } else {
        Err(RosterError::validation("Marks must be between 0 and 100."))
    }
}
