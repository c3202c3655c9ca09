//! Output formatting for solver results

use crate::runner::PartOutcome;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print all part results, grouped by day
    pub fn print_results(&self, results: &[PartOutcome]) {
        if self.quiet {
            for result in results {
                println!("{}", result.answer);
            }
            return;
        }

        for ((year, day), parts) in &results.iter().chunk_by(|r| (r.year, r.day)) {
            println!("{} day {:02}", year, day);
            for result in parts {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                println!(
                    "Part {}: {} ({}solve: {})",
                    result.part,
                    result.answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                );
            }
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[PartOutcome]) {
        if self.quiet {
            return;
        }

        let total_parse = results
            .iter()
            .filter_map(|r| r.parse_duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d);
        let total_solve = results
            .iter()
            .map(|r| r.solve_duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d);

        println!();
        println!("--- Summary ---");
        println!("Parts solved: {}", results.len());
        println!("Total parse time: {}", format_duration(total_parse));
        println!("Total solve time: {}", format_duration(total_solve));
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-1500)), "-1.50ms");
    }
}
