use std::fmt;

use crate::board::{Board, Cell};

/// The checkpoints a search can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    Placing,
    Safe,
    Conflict,
    Backtracking,
    FoundSolution,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Placing => "placing",
            StepKind::Safe => "safe",
            StepKind::Conflict => "conflict",
            StepKind::Backtracking => "backtracking",
            StepKind::FoundSolution => "found solution",
        };
        f.write_str(name)
    }
}

/// Step-dependent auxiliary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metadata {
    /// The cell being placed, checked or removed.
    Cell(Cell),
    /// The cell being placed and the first queen attacking it.
    Conflict { cell: Cell, with: Cell },
}

/// One observable checkpoint of the search.
///
/// The board is a snapshot taken when the step was emitted and never changes
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    kind: StepKind,
    board: Board,
    message: String,
    metadata: Option<Metadata>,
}

impl Step {
    pub(crate) fn placing(board: &Board, cell: Cell) -> Self {
        Self {
            kind: StepKind::Placing,
            board: board.clone(),
            message: format!("Checking Row {}, Col {}...", cell.row, cell.col),
            metadata: Some(Metadata::Cell(cell)),
        }
    }

    pub(crate) fn safe(board: &Board, cell: Cell) -> Self {
        Self {
            kind: StepKind::Safe,
            board: board.clone(),
            message: format!("Safe at {cell}. Proceeding..."),
            metadata: Some(Metadata::Cell(cell)),
        }
    }

    pub(crate) fn conflict(board: &Board, cell: Cell, with: Cell) -> Self {
        Self {
            kind: StepKind::Conflict,
            board: board.clone(),
            message: format!("Conflict with {with}!"),
            metadata: Some(Metadata::Conflict { cell, with }),
        }
    }

    pub(crate) fn backtracking(board: &Board, cell: Cell) -> Self {
        Self {
            kind: StepKind::Backtracking,
            board: board.clone(),
            message: format!("Backtracking from {cell}..."),
            metadata: Some(Metadata::Cell(cell)),
        }
    }

    pub(crate) fn found_solution(board: &Board) -> Self {
        Self {
            kind: StepKind::FoundSolution,
            board: board.clone(),
            message: "Solution Found!".to_owned(),
            metadata: None,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The (row, col) this step is about, if it names one.
    pub fn cell(&self) -> Option<Cell> {
        match self.metadata? {
            Metadata::Cell(cell) | Metadata::Conflict { cell, .. } => Some(cell),
        }
    }

    /// The attacking queen reported by a `Conflict` step.
    pub fn conflicting(&self) -> Option<Cell> {
        match self.metadata? {
            Metadata::Conflict { with, .. } => Some(with),
            Metadata::Cell(_) => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.board, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cells() {
        let board = Board::empty(4);
        let cell = Cell::new(1, 3);
        assert_eq!(Step::placing(&board, cell).message(), "Checking Row 1, Col 3...");
        assert_eq!(Step::safe(&board, cell).message(), "Safe at (1, 3). Proceeding...");
        assert_eq!(
            Step::conflict(&board, cell, Cell::new(0, 2)).message(),
            "Conflict with (0, 2)!"
        );
        assert_eq!(
            Step::backtracking(&board, cell).message(),
            "Backtracking from (1, 3)..."
        );
        assert_eq!(Step::found_solution(&board).message(), "Solution Found!");
    }

    #[test]
    fn snapshot_is_detached_from_the_source_board() {
        let mut board = Board::empty(3);
        board.place(0, 1);
        let step = Step::placing(&board, Cell::new(0, 1));
        board.clear(0);
        assert_eq!(step.board().get(0), Some(1));
    }

    #[test]
    fn metadata_accessors() {
        let board = Board::empty(4);
        let conflict = Step::conflict(&board, Cell::new(2, 0), Cell::new(1, 1));
        assert_eq!(conflict.cell(), Some(Cell::new(2, 0)));
        assert_eq!(conflict.conflicting(), Some(Cell::new(1, 1)));

        let found = Step::found_solution(&board);
        assert_eq!(found.cell(), None);
        assert_eq!(found.metadata(), None);
    }
}
