//! Day 1: Trebuchet?!
//!
//! Each line hides a calibration value: first digit * 10 + last digit.
//! Part 2 also counts spelled-out digits, which may overlap ("twone" reads
//! as both 2 and 1), so the line is scanned position by position.

use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegister};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegister)]
#[advent_solver(parts = 2)]
#[advent(year = 2023, day = 1, tags = ["parsing"])]
pub struct Solver;

impl AdventParser for Solver {
    type Shared<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError> {
        Ok(input.trim().lines().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        sum_calibrations(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        sum_calibrations(shared, true)
    }
}

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// The digit starting at byte position `i`, if any.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let b = line.as_bytes()[i];
    if b.is_ascii_digit() {
        return Some(u32::from(b - b'0'));
    }
    if spelled {
        let rest = line.get(i..)?;
        SPELLED
            .iter()
            .find(|(word, _)| rest.starts_with(word))
            .map(|&(_, value)| value)
    } else {
        None
    }
}

fn calibration(line: &str, spelled: bool) -> Result<u32, SolveError> {
    let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, spelled));
    let first = digits
        .next()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no digit in line {line:?}").into()))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn sum_calibrations(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| calibration(line, spelled))
        .sum::<Result<u32, _>>()
        .map(|total| total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    #[test]
    fn part_one_solves_example() {
        let mut shared = Solver::parse("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "142");
    }

    #[test]
    fn part_two_solves_example() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "281");
    }

    #[test]
    fn overlapping_words_read_from_both_ends() {
        assert_eq!(calibration("twone", true).unwrap(), 21);
        assert_eq!(calibration("eightwo", true).unwrap(), 82);
    }

    #[test]
    fn line_without_digits_fails() {
        assert!(calibration("nodigitshere", false).is_err());
    }
}
