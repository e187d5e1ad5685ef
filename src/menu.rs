//! Menu choices and console rendering for the interactive planner.

use crate::record::CourseRecord;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Entries of the main menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

/// Why a menu answer was rejected. The message is shown to the user as is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Please enter a valid option.")]
    NotANumber,

    #[error("{0} is not a valid option.")]
    Unknown(i32),
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = leading_int(s).ok_or(ChoiceError::NotANumber)?;
        match number {
            1 => Ok(MenuChoice::Load),
            2 => Ok(MenuChoice::List),
            3 => Ok(MenuChoice::Show),
            9 => Ok(MenuChoice::Exit),
            other => Err(ChoiceError::Unknown(other)),
        }
    }
}

/// Integer prefix of `s` after leading whitespace, the way C `stoi` reads it:
/// `"1abc"` is 1 and `"3.5"` is 3. `None` when there are no digits or the
/// value does not fit.
fn leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Printed once when the session starts.
pub const GREETING: &str = "Welcome to the course planner.";
/// Printed when the user picks `9`.
pub const FAREWELL: &str = "Thank you for using the course planner!";
/// Asks for a menu number after the menu is shown.
pub const CHOICE_PROMPT: &str = "What would you like to do? ";
/// Asks for the course file to load (choice `1`).
pub const FILE_PROMPT: &str = "Enter the file name: ";
/// Asks for the course number to show (choice `3`).
pub const COURSE_PROMPT: &str = "What course do you want to know about? ";

/// The four menu entries followed by a blank line.
pub fn write_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "1. Load Data Structure.")?;
    writeln!(out, "2. Print Course List.")?;
    writeln!(out, "3. Print Course.")?;
    writeln!(out, "9. Exit")?;
    writeln!(out)
}

/// Sorted `ID, Title` listing under a heading.
pub fn write_course_list(out: &mut dyn Write, courses: &[&CourseRecord]) -> io::Result<()> {
    writeln!(out, "Here is a sample schedule:")?;
    writeln!(out)?;
    for course in courses {
        writeln!(out, "{}", course)?;
    }
    writeln!(out)
}

/// A single course with its prerequisites, or `None` when it has none.
pub fn write_course(out: &mut dyn Write, course: &CourseRecord) -> io::Result<()> {
    writeln!(out, "{}", course)?;
    if course.prerequisites.is_empty() {
        writeln!(out, "Prerequisites: None")?;
    } else {
        writeln!(out, "Prerequisites: {}", course.prerequisites.join(", "))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Load));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::List));
        assert_eq!("3\n".parse::<MenuChoice>(), Ok(MenuChoice::Show));
        assert_eq!("9".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_menu_choice_reads_leading_integer() {
        assert_eq!("1abc".parse::<MenuChoice>(), Ok(MenuChoice::Load));
        assert_eq!("3.5".parse::<MenuChoice>(), Ok(MenuChoice::Show));
        assert_eq!("  +9 please".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("12x".parse::<MenuChoice>(), Err(ChoiceError::Unknown(12)));
        assert_eq!("x1".parse::<MenuChoice>(), Err(ChoiceError::NotANumber));
        assert_eq!("-".parse::<MenuChoice>(), Err(ChoiceError::NotANumber));
        assert_eq!(
            "99999999999".parse::<MenuChoice>(),
            Err(ChoiceError::NotANumber)
        );
    }

    #[test]
    fn test_parse_menu_choice_errors() {
        assert_eq!("abc".parse::<MenuChoice>(), Err(ChoiceError::NotANumber));
        assert_eq!("".parse::<MenuChoice>(), Err(ChoiceError::NotANumber));
        assert_eq!("4".parse::<MenuChoice>(), Err(ChoiceError::Unknown(4)));
        assert_eq!("-1".parse::<MenuChoice>(), Err(ChoiceError::Unknown(-1)));
        assert_eq!(
            ChoiceError::Unknown(7).to_string(),
            "7 is not a valid option."
        );
    }

    #[test]
    fn test_write_course_list() {
        let a = CourseRecord::new("CSCI100", "Intro", &[]);
        let b = CourseRecord::new("CSCI200", "Data Structures", &["CSCI100"]);
        let mut out = Vec::new();
        write_course_list(&mut out, &[&a, &b]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Here is a sample schedule:\n\nCSCI100, Intro\nCSCI200, Data Structures\n\n"
        );
    }

    #[test]
    fn test_write_course_with_and_without_prerequisites() {
        let mut out = Vec::new();
        let course = CourseRecord::new("CSCI300", "Algorithms", &["CSCI200", "MATH201"]);
        write_course(&mut out, &course).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CSCI300, Algorithms\nPrerequisites: CSCI200, MATH201\n\n"
        );

        let mut out = Vec::new();
        let course = CourseRecord::new("CSCI101", "Intro to Programming", &[]);
        write_course(&mut out, &course).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CSCI101, Intro to Programming\nPrerequisites: None\n\n"
        );
    }
}
