//! Parsed solver instances and their type-erased interface

use std::ops::RangeInclusive;

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with the time it took
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Part this answer belongs to
    pub part: u8,
    /// The answer text
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving finished (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Outcome of one part in a [`DynSolver::solve_parts`] run, keyed by part number
pub type PartOutcome = (u8, Result<SolveResult, SolveError>);

/// Parsed input of one puzzle, ready to solve any of its parts
///
/// Holds the solver's shared data, so parts solved later see whatever
/// earlier parts stored in it, along with the parse timestamps.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S` and record how long it took
    ///
    /// # Arguments
    /// * `year` - Puzzle year
    /// * `day` - Puzzle day (1-25)
    /// * `input` - Raw puzzle input; `SharedData` may borrow from it
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed, with parse timestamps recorded
    /// * `Err(ParseError)` - Whatever `S::parse` rejected
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`SolverInstance`]
///
/// The registry hands these out so callers can drive any solver without
/// knowing its concrete type.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for (part, outcome) in solver.solve_parts(1..=solver.parts()) {
///         match outcome {
///             Ok(result) => println!("Part {part}: {} ({})", result.answer, result.duration()),
///             Err(e) => eprintln!("Part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, timing it
    ///
    /// # Arguments
    /// * `part` - Part number, 1 to [`DynSolver::parts`]
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - Answer with its solve timestamps
    /// * `Err(SolveError::PartOutOfRange)` - `part` is 0 or above `parts()`
    /// * `Err(SolveError)` - The part is not implemented or failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Solve every part in `parts`, in order, on the same parsed data
    ///
    /// A failing part does not stop the later ones.
    fn solve_parts(&mut self, parts: RangeInclusive<u8>) -> Vec<PartOutcome> {
        parts.map(|part| (part, self.solve(part))).collect()
    }

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Puzzle year
    fn year(&self) -> u16;

    /// Puzzle day
    fn day(&self) -> u8;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;

    /// Time spent parsing
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Part 1 counts calls into shared data, part 2 reads the count, part 3 always fails
    struct Counter;

    impl AocParser for Counter {
        type SharedData<'a> = (Vec<&'a str>, u32);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty".into()));
            }
            Ok((input.split(',').collect(), 0))
        }
    }

    impl Solver for Counter {
        const PARTS: u8 = 3;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => {
                    shared.1 += 1;
                    Ok(shared.0.len().to_string())
                }
                2 => Ok(shared.1.to_string()),
                3 => Err(SolveError::SolveFailed("unsolvable".into())),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_new_records_metadata() {
        let instance = SolverInstance::<Counter>::new(2021, 18, "a,b,c").unwrap();
        assert_eq!((instance.year(), instance.day(), instance.parts()), (2021, 18, 3));
        assert!(instance.parse_end() >= instance.parse_start());
        assert!(matches!(
            SolverInstance::<Counter>::new(2021, 18, ""),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn test_solve_tags_result_with_part() {
        let mut instance = SolverInstance::<Counter>::new(2021, 18, "a,b").unwrap();
        let result = instance.solve(1).unwrap();
        assert_eq!((result.part, result.answer.as_str()), (1, "2"));
        assert!(result.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_parts_shares_state_and_continues_past_failures() {
        let mut instance = SolverInstance::<Counter>::new(2021, 18, "a,b,c").unwrap();
        let solver: &mut dyn DynSolver = &mut instance;

        let outcomes = solver.solve_parts(0..=3);
        let parts: Vec<u8> = outcomes.iter().map(|(part, _)| *part).collect();
        assert_eq!(parts, [0, 1, 2, 3]);

        assert!(matches!(outcomes[0].1, Err(SolveError::PartOutOfRange(0))));
        assert_eq!(outcomes[1].1.as_ref().unwrap().answer, "3");
        assert_eq!(outcomes[2].1.as_ref().unwrap().answer, "1");
        assert!(matches!(outcomes[3].1, Err(SolveError::SolveFailed(_))));
    }
}
