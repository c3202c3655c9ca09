//! Day 4: Scratchcards
//!
//! Each card lists winning numbers and owned numbers. Part 1 scores each
//! card as 2^(matches-1); part 2 cascades copies of following cards and
//! counts the total pile.

use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegister};
use anyhow::anyhow;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

#[derive(AdventSolver, AutoRegister)]
#[advent_solver(parts = 2)]
#[advent(year = 2023, day = 4, tags = ["parsing"])]
pub struct Solver;

static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Card +(\d+): ([^|]+) \| (.*)$").expect("valid regex"));

#[derive(Debug)]
pub struct Scratchcard {
    matches: usize,
}

impl Scratchcard {
    fn parse(line: &str) -> Result<Self, anyhow::Error> {
        let caps = CARD_RE
            .captures(line)
            .ok_or_else(|| anyhow!("not a card line: {line:?}"))?;

        let winning = parse_numbers(&caps[2])?;
        let owned = parse_numbers(&caps[3])?;
        Ok(Self {
            matches: winning.intersection(&owned).count(),
        })
    }

    fn score(&self) -> u64 {
        if self.matches == 0 {
            0
        } else {
            1 << (self.matches - 1)
        }
    }
}

fn parse_numbers(s: &str) -> Result<HashSet<u32>, anyhow::Error> {
    s.split_whitespace()
        .map(|n| n.parse().map_err(anyhow::Error::from))
        .collect()
}

impl AdventParser for Solver {
    type Shared<'a> = Vec<Scratchcard>;

    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                Scratchcard::parse(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(Scratchcard::score).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        // Each card starts as one copy; a card with m matches clones the
        // next m cards once per copy of itself.
        let mut copies = vec![1u64; shared.len()];
        for (i, card) in shared.iter().enumerate() {
            let end = (i + 1 + card.matches).min(shared.len());
            for j in i + 1..end {
                copies[j] += copies[i];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE_INPUT: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn part_one_solves_example() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn part_two_solves_example() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");
    }

    #[test]
    fn card_without_matches_scores_zero() {
        let card = Scratchcard::parse("Card 9: 1 2 3 | 4 5 6").unwrap();
        assert_eq!(card.matches, 0);
        assert_eq!(card.score(), 0);
    }

    #[test]
    fn non_card_line_fails_parse() {
        assert!(Solver::parse("Cord 1: 1 2 | 3 4").is_err());
    }
}
