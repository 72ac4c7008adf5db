//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{PartOutcome, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, instrument, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Parse time, reported once per parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutorContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs, shared by reference
struct ExecutorContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .thread_name(|i| format!("aoc-worker-{}", i))
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutorContext {
                registry,
                inputs: config.input_store(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Input store the executor reads from
    pub fn inputs(&self) -> &InputStore {
        &self.context.inputs
    }

    /// Collect work items by filtering from registry metadata, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cx = &self.context;
        cx.registry
            .storage()
            .iter_info()
            .filter(|info| cx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cx.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    ///
    /// Solver failures are reported as error results; the returned error
    /// only covers results that could not be delivered.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            solvers = work_items.len(),
            mode = ?self.context.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "executing"
        );

        match self.context.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work(work, &tx, &self.context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_groups(by_year, &tx)
            }
            // Part mode also fans out inside each work item, see `run_work`
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_groups(singles, &tx)
            }
        }
    }

    /// Run groups in parallel on the pool; items within a group run in order
    fn execute_groups(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .filter_map(|items| {
                    items
                        .iter()
                        .filter_map(|work| run_work(work, tx, context).err())
                        .reduce(ArcExecutorError::combine)
                })
                .reduce_with(ArcExecutorError::combine)
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts of a solver selected by the part filter
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    debug!(
        year = result.year,
        day = result.day,
        part = result.part,
        ok = result.answer.is_ok(),
        "part finished"
    );
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Read the input and run every selected part of one solver
#[instrument(level = "debug", skip_all, fields(year = work.year, day = work.day))]
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &ExecutorContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match context.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(%source, "skipping solver");
            let error: ArcExecutorError = ExecutorError::Input { year, day, source }.into();
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(context.parallelize_by, ParallelizeBy::Part) {
        // Each part parses its own instance; collect keeps part order
        let results: Vec<SolverResult> = work
            .parts
            .clone()
            .into_par_iter()
            .flat_map_iter(|part| solve_parts(&context.registry, year, day, &input, part..=part))
            .collect();
        results.into_iter().try_for_each(|result| send(tx, result))
    } else {
        solve_parts(&context.registry, year, day, &input, work.parts.clone())
            .into_iter()
            .try_for_each(|result| send(tx, result))
    }
}

/// Parse once and solve `parts` in order, one result per part
fn solve_parts(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    input: &str,
    parts: RangeInclusive<u8>,
) -> Vec<SolverResult> {
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error: ArcExecutorError = ExecutorError::Solver(e).into();
            return parts
                .map(|part| SolverResult::failed(year, day, part, error.clone()))
                .collect();
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    solver
        .solve_parts(parts)
        .into_iter()
        .map(|outcome| part_result(year, day, outcome, parse_duration.take()))
        .collect()
}

/// Turn one part outcome into a reportable result
fn part_result(
    year: u16,
    day: u8,
    (part, outcome): PartOutcome,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match outcome {
        Ok(result) => SolverResult {
            year,
            day,
            part: result.part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(year, day, part, ExecutorError::Solver(SolverError::from(e)).into())
        },
    }
}
