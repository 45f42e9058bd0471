//! The operations behind each menu entry.
//!
//! Every operation validates its input before touching the roster, so an
//! error leaves the roster exactly as it was.

use std::io::{BufRead, Write};

use crate::db::{DataFile, Roster};
use crate::error::{Result, RosterError};
use crate::models::Student;

use super::{report, Console};

const NO_STUDENTS: &str = "\nNo students found. Please add students first.";

/// Register a new student with no attendance and no marks.
pub fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Add New Student ---")?;
    let roll: i32 = console.prompt_parse("Enter Roll Number: ", "roll number")?;

    // checked before asking for the name
    if roster.contains(roll) {
        return Err(RosterError::DuplicateRoll(roll));
    }

    let name = console.prompt("Enter Student Name: ")?;
    let student = Student::new(roll, name.trim())?;
    roster.add(student)?;

    console.say("Student added successfully!")
}

/// Record one class session for every student, asking present/absent in roster order.
pub fn mark_attendance<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<()> {
    if roster.is_empty() {
        return console.say(NO_STUDENTS);
    }

    if let Some(full) = roster.iter().find(|s| !s.has_attendance_room()) {
        return Err(RosterError::validation(format!(
            "Roll {}: no more class sessions can be recorded.",
            full.roll()
        )));
    }

    console.say("\n--- Mark Attendance ---")?;
    console.say("Marking attendance for ALL students for today's class.\n")?;

    let mut answers = Vec::with_capacity(roster.len());
    for student in roster.iter() {
        let answer = console.prompt(&format!(
            "Roll {} - {} | Present? (y/n): ",
            student.roll(),
            student.name()
        ))?;
        answers.push(is_yes(&answer));
    }

    // applied only once every answer is in
    console.say("")?;
    for (student, present) in roster.iter_mut().zip(answers) {
        student.record_attendance(present)?;
        tracing::debug!(roll = student.roll(), present, "attendance recorded");

        let status = if present { "Present" } else { "Absent" };
        console.say(format!("  Roll {} marked: {status}", student.roll()))?;
    }

    console.say("\nAttendance marked for all students!")
}

/// Overwrite the exam marks of one student.
pub fn enter_marks<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<()> {
    if roster.is_empty() {
        return console.say(NO_STUDENTS);
    }

    console.say("\n--- Enter Marks ---")?;
    let roll: i32 = console.prompt_parse("Enter Roll Number: ", "roll number")?;

    let name = roster
        .find(roll)
        .map(|s| s.name().to_string())
        .ok_or(RosterError::NotFound(roll))?;
    let marks: f64 =
        console.prompt_parse(&format!("Enter Marks for {name} (0 to 100): "), "marks value")?;

    let student = roster.find_mut(roll).ok_or(RosterError::NotFound(roll))?;
    student.set_marks(marks)?;
    tracing::debug!(roll, marks, grade = %student.grade(), "marks entered");

    let grade = student.grade();
    console.say(format!("Marks entered. Grade assigned: {grade}"))
}

/// Print the fixed-width report for every student.
pub fn view_report<R: BufRead, W: Write>(roster: &Roster, console: &mut Console<R, W>) -> Result<()> {
    if roster.is_empty() {
        return console.say("\nNo student records to display.");
    }

    console.say("")?;
    console.show(report::render_report(roster))
}

/// Write the roster to the data file.
pub fn save<R: BufRead, W: Write>(
    roster: &Roster,
    file: &DataFile,
    console: &mut Console<R, W>,
) -> Result<()> {
    file.save(roster)?;
    console.say(format!(
        "Data saved to {} successfully!",
        file.path().display()
    ))
}

/// Present iff the first non-blank character is `y` or `Y`.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}
