//! Fixed-width student report.

use crate::models::Student;

/// One report column: its header title and padded width.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

/// Report columns in display order. Cells are left-aligned and padded to the
/// column width; longer values overflow rather than being cut.
pub const COLUMNS: [Column; 7] = [
    Column { title: "Roll", width: 8 },
    Column { title: "Name", width: 20 },
    Column { title: "Total", width: 10 },
    Column { title: "Present", width: 10 },
    Column { title: "Attend%", width: 12 },
    Column { title: "Marks", width: 8 },
    Column { title: "Grade", width: 6 },
];

/// Decimal places for the attendance percent and marks cells.
pub const PRECISION: usize = 1;

pub const TITLE: &str = "========== STUDENT REPORT ==========";

/// Width of the separator rules, the sum of all column widths.
pub fn table_width() -> usize {
    COLUMNS.iter().map(|c| c.width).sum()
}

fn render_row(cells: [String; 7]) -> String {
    let mut line = String::new();
    for (cell, column) in cells.iter().zip(COLUMNS.iter()) {
        line.push_str(&format!("{:<width$}", cell, width = column.width));
    }
    line
}

pub fn header_row() -> String {
    render_row(COLUMNS.map(|c| c.title.to_string()))
}

pub fn student_row(student: &Student) -> String {
    render_row([
        student.roll().to_string(),
        student.name().to_string(),
        student.total_classes().to_string(),
        student.attended_classes().to_string(),
        format!("{:.PRECISION$}", student.attendance_percent()),
        format!("{:.PRECISION$}", student.marks()),
        student.grade().to_string(),
    ])
}

/// Render the full report for `students`, ending with a newline.
///
/// Example output (rows abbreviated):
/// ```text
/// ========== STUDENT REPORT ==========
/// Roll    Name                Total     Present   Attend%     Marks   Grade
/// --------------------------------------------------------------------------
/// 1       Alice               1         1         100.0       90.0    A
/// ==========================================================================
/// Total Students: 1
/// ```
pub fn render_report<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let width = table_width();
    let mut output = String::new();
    let mut count = 0;

    output.push_str(TITLE);
    output.push('\n');
    output.push_str(&header_row());
    output.push('\n');
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for student in students {
        output.push_str(&student_row(student));
        output.push('\n');
        count += 1;
    }

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output.push_str(&format!("Total Students: {count}\n"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_width() {
        assert_eq!(table_width(), 74);
        assert_eq!(header_row().len(), 74);
    }

    #[test]
    fn test_header_row() {
        assert_eq!(
            header_row(),
            "Roll    Name                Total     Present   Attend%     Marks   Grade "
        );
    }

    #[test]
    fn test_student_row() {
        let mut alice = Student::new(1, "Alice").expect("valid student");
        alice.record_attendance(true).expect("Attendance recorded");
        alice.set_marks(90.0).expect("valid marks");

        assert_eq!(
            student_row(&alice),
            "1       Alice               1         1         100.0       90.0    A     "
        );
    }

    #[test]
    fn test_unmarked_student_row() {
        let mut bob = Student::new(2, "Bob").expect("valid student");
        bob.record_attendance(false).expect("Attendance recorded");

        assert_eq!(
            student_row(&bob),
            "2       Bob                 1         0         0.0         0.0     N/A   "
        );
    }

    #[test]
    fn test_long_name_overflows() {
        let student = Student::new(7, "Bartholomew_Featherstonehaugh").expect("valid student");
        let row = student_row(&student);
        assert!(row.starts_with("7       Bartholomew_Featherstonehaugh0"));
    }

    #[test]
    fn test_render_report() {
        let students = vec![
            Student::new(1, "Alice").expect("valid student"),
            Student::new(2, "Bob").expect("valid student"),
        ];
        let report = render_report(&students);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[2], "-".repeat(74));
        assert!(lines[3].starts_with("1       Alice"));
        assert!(lines[4].starts_with("2       Bob"));
        assert_eq!(lines[5], "=".repeat(74));
        assert_eq!(lines[6], "Total Students: 2");
    }
}
