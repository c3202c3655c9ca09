//! Day 2: Cube Conundrum
//!
//! Each line is a game of semicolon-separated draws of colored cubes.
//! Part 1 sums the ids of games possible with a 12/13/14 bag; part 2 sums
//! the power of each game's minimal bag.

use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegister};
use anyhow::anyhow;
use regex::Regex;
use std::sync::LazyLock;

#[derive(AdventSolver, AutoRegister)]
#[advent_solver(parts = 2)]
#[advent(year = 2023, day = 2, tags = ["parsing"])]
pub struct Solver;

static GAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game (\d+):").expect("valid regex"));
static CUBES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) (red|green|blue)").expect("valid regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    fn fits_in(self, bag: CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct CubeGame {
    id: u32,
    draws: Vec<CubeSet>,
}

impl CubeGame {
    fn parse(line: &str) -> Result<Self, anyhow::Error> {
        let caps = GAME_RE
            .captures(line)
            .ok_or_else(|| anyhow!("not a game line: {line:?}"))?;
        let id = caps[1].parse()?;

        let draws = line[caps[0].len()..]
            .split(';')
            .map(|draw| {
                let mut cubes = CubeSet::default();
                for caps in CUBES_RE.captures_iter(draw) {
                    let count: u32 = caps[1].parse()?;
                    match &caps[2] {
                        "red" => cubes.red = count,
                        "green" => cubes.green = count,
                        _ => cubes.blue = count,
                    }
                }
                Ok(cubes)
            })
            .collect::<Result<_, anyhow::Error>>()?;

        Ok(Self { id, draws })
    }

    fn is_possible(&self, bag: CubeSet) -> bool {
        self.draws.iter().all(|draw| draw.fits_in(bag))
    }

    fn min_possible_bag(&self) -> CubeSet {
        self.draws
            .iter()
            .fold(CubeSet::default(), |bag, &draw| bag.max(draw))
    }
}

impl AdventParser for Solver {
    type Shared<'a> = Vec<CubeGame>;

    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                CubeGame::parse(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let bag = CubeSet {
            red: 12,
            green: 13,
            blue: 14,
        };
        let total: u32 = shared
            .iter()
            .filter(|game| game.is_possible(bag))
            .map(|game| game.id)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|game| game.min_possible_bag().power())
            .sum();
        Ok(total.to_string())
    }
}
