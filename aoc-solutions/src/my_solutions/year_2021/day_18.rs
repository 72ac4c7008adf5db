use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::utils::snailfish::SnailNumber;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 18, tags = ["snailfish", "tree"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<SnailNumber>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.parse::<SnailNumber>()
                    .map_err(anyhow::Error::from)
                    .with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;

        if numbers.is_empty() {
            return Err(ParseError::MissingData(
                "expected at least one snailfish number".into(),
            ));
        }

        debug!(count = numbers.len(), "parsed snailfish numbers");
        Ok(numbers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared
            .iter()
            .cloned()
            .fold(None, |total, next| Some(SnailNumber::accumulate(total, next)))
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no numbers to add").into()))?;

        trace!(total = %total.colored(), "final sum");
        Ok(total.magnitude().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let numbers: &[SnailNumber] = shared;
        let count = numbers.len();
        if count < 2 {
            return Err(SolveError::SolveFailed(
                anyhow!("need at least two numbers, got {}", count).into(),
            ));
        }

        // Addition is not commutative, so both orders of every pair count
        let best = (0..count)
            .into_par_iter()
            .flat_map_iter(move |i| (0..count).filter(move |&j| j != i).map(move |j| (i, j)))
            .map(|(i, j)| (numbers[i].clone() + numbers[j].clone()).magnitude())
            .max()
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no pairs to add").into()))?;

        debug!(pairs = count * (count - 1), best, "largest pairwise magnitude");
        Ok(best.to_string())
    }
}
