use std::io::{BufRead, Write};

use crate::db::{DataFile, LoadOutcome, Roster};
use crate::error::{Result, RosterError};

use super::{commands, Console};

const BANNER_RULE: &str = "======================================";
const MENU: &str = "\n====== MAIN MENU ======\n\
1. Add Student\n\
2. Mark Attendance\n\
3. Enter Marks\n\
4. View Report\n\
5. Save Data\n\
0. Exit\n\
========================";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    MarkAttendance,
    EnterMarks,
    ViewReport,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::AddStudent),
            2 => Some(Self::MarkAttendance),
            3 => Some(Self::EnterMarks),
            4 => Some(Self::ViewReport),
            5 => Some(Self::Save),
            0 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parse a line of menu input; anything that is not a listed number is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse().ok().and_then(Self::from_number)
    }
}

/// Whether the command loop should keep prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal: reached only through the exit choice (or end of input).
    Exited,
}

/// The menu-driven session: one roster, its data file and the console.
pub struct Tracker<R, W> {
    roster: Roster,
    file: DataFile,
    console: Console<R, W>,
    state: LoopState,
}

impl<R: BufRead, W: Write> Tracker<R, W> {
    pub fn new(console: Console<R, W>, file: DataFile) -> Self {
        Self {
            roster: Roster::new(),
            file,
            console,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_parts(self) -> (Roster, Console<R, W>) {
        (self.roster, self.console)
    }

    /// Print the banner, load the data file and run the menu until exit.
    pub fn run(&mut self) -> Result<()> {
        self.console.say(BANNER_RULE)?;
        self.console.say("  Smart Attendance & Performance Tracker")?;
        self.console.say(BANNER_RULE)?;

        self.load()?;
        while self.state == LoopState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Replace the roster with the data file's contents and report the result.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let outcome = self.file.load_into(&mut self.roster);
        match outcome {
            LoadOutcome::Missing => self
                .console
                .say("No existing data file found. Starting fresh.")?,
            LoadOutcome::Loaded { count, .. } => self
                .console
                .say(format!("Loaded {count} student(s) from file."))?,
        }
        Ok(outcome)
    }

    /// Show the menu, read one choice and run it.
    pub fn step(&mut self) -> Result<LoopState> {
        self.console.say(MENU)?;
        let choice = match self.console.prompt("Enter your choice: ") {
            Ok(line) => MenuChoice::parse(&line),
            Err(RosterError::InputClosed) => {
                tracing::debug!("input closed at menu, exiting");
                Some(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };

        match choice {
            Some(choice) => self.dispatch(choice)?,
            None => self.console.say("Invalid choice! Please enter 0-5.")?,
        }
        Ok(self.state)
    }

    /// Run one operation, turning recoverable errors into console messages.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let console = &mut self.console;
        let result = match choice {
            MenuChoice::AddStudent => commands::add_student(&mut self.roster, console),
            MenuChoice::MarkAttendance => commands::mark_attendance(&mut self.roster, console),
            MenuChoice::EnterMarks => commands::enter_marks(&mut self.roster, console),
            MenuChoice::ViewReport => commands::view_report(&self.roster, console),
            MenuChoice::Save => commands::save(&self.roster, &self.file, console),
            MenuChoice::Exit => {
                console.say("\nSaving data before exit...")?;
                let saved = commands::save(&self.roster, &self.file, console);
                self.report(saved)?;
                self.console.say("Goodbye!")?;
                self.state = LoopState::Exited;
                return Ok(());
            }
        };
        self.report(result)
    }

    fn report(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(RosterError::InputClosed) => Ok(()),
            Err(e @ RosterError::Console(_)) => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "operation rejected");
                self.console.say(format!("Error: {e}"))
            }
        }
    }
}
