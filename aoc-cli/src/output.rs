//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result; failures go to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match self.format_result(result) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    /// Line for one result, `Err` when the part failed
    fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        let answer = match &result.answer {
            Ok(answer) => answer,
            Err(e) if self.quiet => return Err(format!("Error: {}", e)),
            Err(e) => {
                return Err(format!(
                    "{}/{:02} Part {}: Error - {}",
                    result.year, result.day, result.part, e
                ));
            }
        };

        if self.quiet {
            return Ok(answer.clone());
        }

        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        Ok(format!(
            "{}/{:02} Part {}: {} ({}solve: {})",
            result.year,
            result.day,
            result.part,
            answer,
            parse_timing,
            format_duration(result.solve_duration)
        ))
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        println!();
        for line in self.summary_lines(results, self.start_time.elapsed()) {
            println!("{}", line);
        }
    }

    fn summary_lines(&self, results: &[SolverResult], elapsed_time: Duration) -> Vec<String> {
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;

        let mut lines = vec![
            "--- Summary ---".to_string(),
            format!("Parts: {} solved, {} failed", successes, failures),
            format!("Total parse time: {}", format_duration(total_parse_time)),
            format!("Total solve time: {}", format_duration(total_solve_time)),
            format!(
                "Elapsed wall-clock time: {}",
                format_std_duration(elapsed_time)
            ),
        ];
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            lines.push(format!("Speedup factor: {:.2}x", speedup));
        }
        lines
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
    format_micros(micros.unsigned_abs())
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    format_micros(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

fn format_micros(micros: u64) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
