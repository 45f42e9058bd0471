use std::fmt;

/// Letter grade derived from a student's latest exam marks.
///
/// - `NotAssigned`: no marks entered yet (prints as `N/A`)
/// - `A`: 85 and above
/// - `B`: 70 and above
/// - `C`: 50 and above
/// - `Fail`: below 50
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    NotAssigned,
    A,
    B,
    C,
    Fail,
}

impl Grade {
    /// Derive the grade for a marks value already known to be in range.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 85.0 {
            Self::A
        } else if marks >= 70.0 {
            Self::B
        } else if marks >= 50.0 {
            Self::C
        } else {
            Self::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAssigned => "N/A",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers in the report table apply
        f.pad(self.as_str())
    }
}
