//! Day 7: Camel Cards
//!
//! Rank 5-card hands, score each bid by its 1-based rank, and sum. Part 1
//! uses standard jack rules; part 2 turns every `J` into a joker.

pub mod cards;

use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegister};
use anyhow::anyhow;
use cards::{Bid, Card, Game, Hand, RuleVariant, parse_deal};

#[derive(AdventSolver, AutoRegister)]
#[advent_solver(parts = 2)]
#[advent(year = 2023, day = 7, tags = ["cards"])]
pub struct Solver;

/// Card arrays are validated once at parse time; each part builds hands
/// under its own rule variant from the same deals.
#[derive(Debug)]
pub struct SharedData {
    deals: Vec<([Card; 5], u64)>,
}

impl AdventParser for Solver {
    type Shared<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_deal(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|deals| SharedData { deals })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, RuleVariant::Standard).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, RuleVariant::JokerWild).to_string())
    }
}

fn total_winnings(shared: &SharedData, variant: RuleVariant) -> u64 {
    let bids = shared
        .deals
        .iter()
        .map(|&(cards, amount)| Bid {
            hand: Hand::new(cards, variant),
            amount,
        })
        .collect();
    Game::new(bids).total_winnings()
}
