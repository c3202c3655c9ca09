//! Sequential solver runner
//!
//! Runs every registered solver matching the filters, in (year, day) order.
//! The first parse or solve failure aborts the run; there is no partial
//! scoring for a broken input.

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputStore;
use advent_solver::{DynSolver as _, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Result from a single solved part
pub struct PartOutcome {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Parse timing, reported once per day on its first part
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

pub struct Runner {
    registry: SolverRegistry,
    store: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Runner {
    pub fn new(registry: SolverRegistry, store: InputStore, args: &Args) -> Self {
        Self {
            registry,
            store,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Intersect the part filter with the solver's part range
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items in order
    pub fn run(&self) -> Result<Vec<PartOutcome>, CliError> {
        let mut outcomes = Vec::new();

        for work in self.collect_work_items() {
            let input = self.store.load(work.year, work.day)?;
            let mut solver = self.registry.create_solver(work.year, work.day, &input)?;

            let mut first_part = true;
            for part in work.parts.clone() {
                let result = solver.solve(part).map_err(SolverError::from)?;
                let solve_duration = result.duration();
                outcomes.push(PartOutcome {
                    year: work.year,
                    day: work.day,
                    part,
                    answer: result.answer,
                    parse_duration: first_part.then(|| solver.parse_duration()),
                    solve_duration,
                });
                first_part = false;
            }
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::{AdventParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver};
    use clap::Parser;

    struct LineCount;

    impl AdventParser for LineCount {
        type Shared<'a> = usize;

        fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
            Ok(input.lines().count())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
            Ok((*shared * part as usize).to_string())
        }
    }

    fn runner_with_input(argv: &[&str]) -> (tempfile::TempDir, Runner) {
        let dir = tempfile::tempdir().unwrap();
        let store = InputStore::new(dir.path().to_path_buf());
        let path = store.path_for(2023, 7);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "a\nb\nc\n").unwrap();

        let registry = LineCount
            .register_with(RegistryBuilder::new(), 2023, 7)
            .unwrap()
            .build();

        let mut args = vec!["advent"];
        args.extend_from_slice(argv);
        let args = Args::parse_from(args);
        (dir, Runner::new(registry, store, &args))
    }

    #[test]
    fn runs_all_parts_in_order() {
        let (_dir, runner) = runner_with_input(&[]);
        let outcomes = runner.run().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].answer, "3");
        assert_eq!(outcomes[1].answer, "6");
        assert!(outcomes[0].parse_duration.is_some());
        assert!(outcomes[1].parse_duration.is_none());
    }

    #[test]
    fn part_filter_narrows_work() {
        let (_dir, runner) = runner_with_input(&["--part", "2"]);
        let outcomes = runner.run().unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!((outcomes[0].part, outcomes[0].answer.as_str()), (2, "6"));
    }

    #[test]
    fn day_filter_excludes_everything_else() {
        let (_dir, runner) = runner_with_input(&["--day", "5"]);
        assert!(runner.collect_work_items().is_empty());
    }

    #[test]
    fn missing_input_aborts_run() {
        let (_dir, runner) = runner_with_input(&[]);
        std::fs::remove_file(runner.store.path_for(2023, 7)).unwrap();
        assert!(matches!(
            runner.run(),
            Err(CliError::MissingInput { year: 2023, day: 7, .. })
        ));
    }
}
