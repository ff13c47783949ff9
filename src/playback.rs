//! Drives a [`Solver`] one step at a time for display.
//!
//! [`Playback`] is the headless half of the viewer: it paces pulls from the
//! step sequence, tracks pause/step state and the first-row lock, and turns
//! the current step into cell highlights. The egui front end only draws it.

use std::time::Duration;

use crate::board::{Board, Cell};
use crate::config;
use crate::solver::Solver;
use crate::step::{Step, StepKind};

const READY: &str = "Board reset. Click row 0 to lock start. Press Start.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No search; the lock may be changed.
    Idle,
    Running,
    Paused,
    Solved,
    /// The sequence ended without a solution.
    Exhausted,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Solved | Phase::Exhausted)
    }
}

/// How a cell is highlighted for the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Current,
    Safe,
    Conflict,
    Backtrack,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    pub cells: Vec<(Cell, Mark)>,
    /// Drawn from the placed cell to the queen attacking it.
    pub conflict_line: Option<(Cell, Cell)>,
}

impl Highlights {
    pub fn for_step(step: &Step) -> Self {
        let mut out = Self::default();
        match step.kind() {
            StepKind::Placing => out.mark(step.cell(), Mark::Current),
            StepKind::Safe => out.mark(step.cell(), Mark::Safe),
            StepKind::Conflict => {
                out.mark(step.cell(), Mark::Conflict);
                out.mark(step.conflicting(), Mark::Conflict);
                out.conflict_line = step.cell().zip(step.conflicting());
            }
            StepKind::Backtracking => out.mark(step.cell(), Mark::Backtrack),
            StepKind::FoundSolution => {
                out.cells = step.board().queens().map(|q| (q, Mark::Safe)).collect();
            }
        }
        out
    }

    fn mark(&mut self, cell: Option<Cell>, mark: Mark) {
        if let Some(cell) = cell {
            self.cells.push((cell, mark));
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells
            .iter()
            .find(|(cell, _)| cell.row == row && cell.col == col)
            .map(|(_, mark)| *mark)
    }
}

pub struct Playback {
    n: usize,
    first_row_lock: Option<usize>,
    delay: f32,

    solver: Option<Solver>,
    current: Option<Step>,
    phase: Phase,
    status: String,
    steps_taken: usize,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(config::DEFAULT_N)
    }
}

impl Playback {
    pub fn new(n: usize) -> Self {
        Self {
            n: config::clamp_size(n),
            first_row_lock: None,
            delay: config::DEFAULT_DELAY,
            solver: None,
            current: None,
            phase: Phase::Idle,
            status: READY.to_owned(),
            steps_taken: 0,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn first_row_lock(&self) -> Option<usize> {
        self.first_row_lock
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn current(&self) -> Option<&Step> {
        self.current.as_ref()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f32) {
        self.delay = config::clamp_delay(delay);
    }

    /// The board to draw: the latest snapshot, or an empty board before start.
    pub fn board(&self) -> Board {
        match &self.current {
            Some(step) => step.board().clone(),
            None => Board::empty(self.n),
        }
    }

    pub fn highlights(&self) -> Highlights {
        self.current
            .as_ref()
            .map(Highlights::for_step)
            .unwrap_or_default()
    }

    /// Resizes the board and abandons any search in progress.
    pub fn set_n(&mut self, n: usize) {
        let n = config::clamp_size(n);
        if n == self.n {
            return;
        }
        self.n = n;
        if self.first_row_lock.is_some_and(|lock| lock >= n) {
            self.first_row_lock = None;
        }
        self.clear_search();
        self.status = READY.to_owned();
    }

    /// Toggles the first-row lock on `col`. Only allowed while idle.
    pub fn toggle_lock(&mut self, col: usize) -> bool {
        if self.phase != Phase::Idle || col >= self.n {
            return false;
        }
        if self.first_row_lock == Some(col) {
            self.first_row_lock = None;
            self.status = "Start lock removed.".to_owned();
        } else {
            self.first_row_lock = Some(col);
            self.status = format!("Start locked to Col {col}.");
        }
        log::debug!("first-row lock now {:?}", self.first_row_lock);
        true
    }

    /// Starts a fresh search and takes its first step.
    pub fn start(&mut self) {
        self.clear_search();
        match Solver::new(self.n, self.first_row_lock) {
            Ok(solver) => {
                log::info!(
                    "starting search: n={} lock={:?}",
                    self.n,
                    self.first_row_lock
                );
                self.solver = Some(solver);
                self.phase = Phase::Running;
                self.advance();
            }
            Err(err) => {
                log::error!("cannot start search: {err}");
                self.status = err.to_string();
            }
        }
    }

    /// Abandons the search and clears the lock.
    pub fn reset(&mut self) {
        self.clear_search();
        self.first_row_lock = None;
        self.status = READY.to_owned();
    }

    /// Pauses a running search, or resumes a paused one with an immediate step.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => {
                self.phase = Phase::Running;
                self.advance();
            }
            _ => {}
        }
    }

    /// Pulls a single step while paused.
    pub fn step_forward(&mut self) -> bool {
        self.phase == Phase::Paused && self.advance()
    }

    /// Pulls a step once `elapsed` reaches the delay. Returns whether one was
    /// pulled, so the caller can restart its timer.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Running || elapsed.as_secs_f32() < self.delay {
            return false;
        }
        self.advance()
    }

    fn clear_search(&mut self) {
        self.solver = None;
        self.current = None;
        self.phase = Phase::Idle;
        self.steps_taken = 0;
    }

    /// Pulls the next step. Returns false once the sequence has ended.
    fn advance(&mut self) -> bool {
        let Some(solver) = self.solver.as_mut() else {
            return false;
        };
        match solver.next() {
            Some(step) => {
                self.steps_taken += 1;
                if step.kind() == StepKind::FoundSolution {
                    log::info!(
                        "solution {} after {} steps",
                        step.board(),
                        self.steps_taken
                    );
                    self.phase = Phase::Solved;
                }
                self.status = step.message().to_owned();
                self.current = Some(step);
                true
            }
            None => {
                log::info!("no solution after {} steps", self.steps_taken);
                self.phase = Phase::Exhausted;
                self.status = "No solution found or finished.".to_owned();
                false
            }
        }
    }
}
