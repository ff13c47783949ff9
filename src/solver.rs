use std::iter::FusedIterator;
use std::ops::Range;

use crate::board::{Board, Cell, Safety};
use crate::error::{Error, Result};
use crate::step::Step;

/// One level of the depth-first search: a row and the columns it has left.
#[derive(Clone, Debug)]
struct Frame {
    row: usize,
    cols: Range<usize>,
    col: usize,
}

/// Where the search picks up on the next pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resume {
    /// Open a frame for the row below the current top frame.
    Descend,
    /// Try the next candidate column of the top frame.
    NextColumn,
    /// The top frame's column was just placed and needs checking.
    Check,
    /// The top frame's column led nowhere.
    Backtrack,
    /// Lift the top frame's queen before moving on.
    Lift,
    Done,
}

/// Lazy backtracking search that reports every checkpoint as a [`Step`].
///
/// Each call to [`Iterator::next`] advances the search to the next checkpoint.
/// The sequence ends after the first `FoundSolution` step, or without one when
/// no solution is reachable. A new search needs a new solver.
#[derive(Debug)]
pub struct Solver {
    n: usize,
    first_row_lock: Option<usize>,
    board: Board,

    // DFS State
    stack: Vec<Frame>,
    resume: Resume,
    solved: bool,
}

impl Solver {
    /// Prepares a search on an `n`x`n` board, optionally restricting row 0 to
    /// a single column. No search work happens until the first pull.
    pub fn new(n: usize, first_row_lock: Option<usize>) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyBoard);
        }
        if let Some(lock) = first_row_lock {
            if lock >= n {
                return Err(Error::LockOutOfRange { lock, n });
            }
        }
        log::debug!("new search: n={n} first_row_lock={first_row_lock:?}");
        Ok(Self {
            n,
            first_row_lock,
            board: Board::empty(n),
            stack: Vec::with_capacity(n),
            resume: Resume::Descend,
            solved: false,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn first_row_lock(&self) -> Option<usize> {
        self.first_row_lock
    }

    /// The live board. Steps carry their own snapshots.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Checks a queen at (`row`, `col`) against the queens placed above it.
    pub fn is_safe(&self, row: usize, col: usize) -> Safety {
        self.board.is_safe(row, col)
    }

    /// True once the sequence has ended.
    pub fn finished(&self) -> bool {
        self.resume == Resume::Done
    }

    /// True once a `FoundSolution` step has been produced.
    pub fn solved(&self) -> bool {
        self.solved
    }

    fn candidates(&self, row: usize) -> Range<usize> {
        match self.first_row_lock {
            Some(lock) if row == 0 => lock..lock + 1,
            _ => 0..self.n,
        }
    }

    fn top(&self) -> Option<Cell> {
        self.stack.last().map(|f| Cell::new(f.row, f.col))
    }

    fn step(&mut self) -> Option<Step> {
        loop {
            match self.resume {
                Resume::Done => return None,
                Resume::Descend => {
                    let row = self.stack.len();
                    if row == self.n {
                        self.resume = Resume::Done;
                        self.solved = true;
                        log::debug!("solution found: {}", self.board);
                        return Some(Step::found_solution(&self.board));
                    }
                    let cols = self.candidates(row);
                    self.stack.push(Frame { row, cols, col: 0 });
                    self.resume = Resume::NextColumn;
                }
                Resume::NextColumn => {
                    let frame = self.stack.last_mut()?;
                    match frame.cols.next() {
                        Some(col) => {
                            frame.col = col;
                            let cell = Cell::new(frame.row, col);
                            self.board.place(cell.row, cell.col);
                            self.resume = Resume::Check;
                            return Some(Step::placing(&self.board, cell));
                        }
                        None => {
                            // Row exhausted: the parent's column failed.
                            self.stack.pop();
                            if self.stack.is_empty() {
                                self.resume = Resume::Done;
                                log::debug!("search exhausted without a solution");
                                return None;
                            }
                            self.resume = Resume::Backtrack;
                        }
                    }
                }
                Resume::Check => {
                    let cell = self.top()?;
                    return match self.board.is_safe(cell.row, cell.col) {
                        Safety::Safe => {
                            self.resume = Resume::Descend;
                            Some(Step::safe(&self.board, cell))
                        }
                        Safety::Conflict(with) => {
                            self.resume = Resume::Backtrack;
                            Some(Step::conflict(&self.board, cell, with))
                        }
                    };
                }
                Resume::Backtrack => {
                    let cell = self.top()?;
                    self.resume = Resume::Lift;
                    return Some(Step::backtracking(&self.board, cell));
                }
                Resume::Lift => {
                    let cell = self.top()?;
                    self.board.clear(cell.row);
                    self.resume = Resume::NextColumn;
                }
            }
        }
    }
}

impl Iterator for Solver {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let step = self.step();
        match &step {
            Some(step) => log::trace!("{step}"),
            None => self.resume = Resume::Done,
        }
        step
    }
}

impl FusedIterator for Solver {}
