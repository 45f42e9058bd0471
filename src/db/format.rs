//! Plain-text record format for the data file.
//!
//! Each student is written as one line of five space-separated fields:
//!
//! ```text
//! <roll> <name> <total_classes> <attended_classes> <marks>
//! ```
//!
//! Reading treats the whole file as a single whitespace-separated token stream
//! consumed five tokens at a time, so a name containing whitespace shifts every
//! later field. That is a known limit of the format and is kept for
//! compatibility with existing data files.

use std::str::{FromStr, SplitWhitespace};

use crate::error::{Result, RosterError};
use crate::models::Student;

/// Number of whitespace-separated fields in one record.
pub const FIELDS_PER_RECORD: usize = 5;

/// Render one student as a record line, without the trailing newline.
pub fn encode_student(student: &Student) -> String {
    format!(
        "{} {} {} {} {}",
        student.roll(),
        student.name(),
        student.total_classes(),
        student.attended_classes(),
        student.marks()
    )
}

/// Render every student, one record per line.
pub fn encode<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let mut output = String::new();
    for student in students {
        output.push_str(&encode_student(student));
        output.push('\n');
    }
    output
}

/// Iterate over the records in `contents`.
///
/// The iterator yields one error for the first malformed record and then ends.
pub fn records(contents: &str) -> Records<'_> {
    Records {
        tokens: contents.split_whitespace(),
        index: 0,
        done: false,
    }
}

pub struct Records<'a> {
    tokens: SplitWhitespace<'a>,
    index: usize,
    done: bool,
}

impl Records<'_> {
    fn next_record(&mut self) -> Option<Result<Student>> {
        let mut fields = [""; FIELDS_PER_RECORD];
        let mut found = 0;
        for slot in fields.iter_mut() {
            match self.tokens.next() {
                Some(token) => {
                    *slot = token;
                    found += 1;
                }
                None => break,
            }
        }

        match found {
            0 => None,
            FIELDS_PER_RECORD => Some(self.parse(fields)),
            _ => Some(Err(RosterError::validation(format!(
                "record {} ends after {found} of {FIELDS_PER_RECORD} fields",
                self.index + 1
            )))),
        }
    }

    fn parse(&self, [roll, name, total, attended, marks]: [&str; FIELDS_PER_RECORD]) -> Result<Student> {
        let record = self.index + 1;
        Student::restore(
            parse_field(record, "roll number", roll)?,
            name,
            parse_field(record, "total classes", total)?,
            parse_field(record, "attended classes", attended)?,
            parse_field(record, "marks", marks)?,
        )
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Student>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_record();
        match item {
            Some(Ok(_)) => self.index += 1,
            _ => self.done = true,
        }
        item
    }
}

fn parse_field<T: FromStr>(record: usize, field: &str, token: &str) -> Result<T> {
    token.parse().map_err(|_| {
        RosterError::validation(format!("record {record}: '{token}' is not a valid {field}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(roll: i32, name: &str, total: u32, attended: u32, marks: f64) -> Student {
        Student::restore(roll, name, total, attended, marks).expect("valid student")
    }

    #[test]
    fn test_encode_uses_plain_numbers() {
        let students = vec![student(1, "Alice", 3, 2, 90.0), student(2, "Bob", 3, 0, 84.999)];
        assert_eq!(encode(&students), "1 Alice 3 2 90\n2 Bob 3 0 84.999\n");
    }

    #[test]
    fn test_line_breaks_are_not_significant() {
        let parsed: Vec<_> = records("1 Alice\n3 2 90 2\nBob 3 0 12.5\n")
            .collect::<Result<_>>()
            .expect("all records parse");
        assert_eq!(parsed, vec![student(1, "Alice", 3, 2, 90.0), student(2, "Bob", 3, 0, 12.5)]);
    }

    #[test]
    fn test_stops_after_first_malformed_record() {
        let mut iter = records("1 Alice 3 2 90\n2 Bob x 0 10\n3 Carol 1 1 50\n");
        assert!(matches!(iter.next(), Some(Ok(_))));
        assert!(matches!(iter.next(), Some(Err(RosterError::Validation(_)))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_name_with_space_desynchronizes() {
        let mut iter = records("1 Mary Ann 0 0 0\n");
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_partial_trailing_record() {
        let mut iter = records("1 Alice 3 2 90\n2 Bob 3");
        assert!(matches!(iter.next(), Some(Ok(_))));
        let err = iter.next().expect("error item").unwrap_err();
        assert!(err.to_string().contains("3 of 5"));
    }

    #[test]
    fn test_rejects_invariant_violations() {
        assert!(records("1 Alice 2 3 50").next().expect("item").is_err());
        assert!(records("1 Alice -1 0 50").next().expect("item").is_err());
        assert!(records("1 Alice 2 1 101").next().expect("item").is_err());
        assert!(records("1 Alice 2 1 NaN").next().expect("item").is_err());
    }

    #[test]
    fn test_empty_input_has_no_records() {
        assert!(records("").next().is_none());
        assert!(records("  \n\n").next().is_none());
    }
}
