use std::fmt;

/// A square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of checking a tentative placement against the rows above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Safety {
    Safe,
    /// The first queen (lowest row) that attacks the placement.
    Conflict(Cell),
}

impl Safety {
    pub fn is_safe(&self) -> bool {
        matches!(self, Safety::Safe)
    }
}

/// Column assignment indexed by row.
///
/// `board[row]` holds the column of the queen in that row, or `None` while
/// the row is unplaced. The length always equals the board size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board(Vec<Option<usize>>);

impl Board {
    /// An `n`-row board with no queens.
    pub fn empty(n: usize) -> Self {
        Self(vec![None; n])
    }

    /// Builds a fully placed board from one column per row.
    pub fn from_columns(cols: &[usize]) -> Self {
        Self(cols.iter().copied().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column of the queen in `row`, if any.
    pub fn get(&self, row: usize) -> Option<usize> {
        self.0.get(row).copied().flatten()
    }

    pub fn place(&mut self, row: usize, col: usize) {
        self.0[row] = Some(col);
    }

    pub fn clear(&mut self, row: usize) {
        self.0[row] = None;
    }

    pub fn rows(&self) -> &[Option<usize>] {
        &self.0
    }

    /// Placed queens in row order.
    pub fn queens(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| Cell::new(row, col)))
    }

    /// Checks a queen at (`row`, `col`) against every row above it.
    ///
    /// Rows are scanned from 0 upward, so the reported conflict is the one
    /// with the lowest row index.
    pub fn is_safe(&self, row: usize, col: usize) -> Safety {
        for (r, placed) in self.0.iter().take(row).enumerate() {
            let Some(c) = *placed else {
                continue;
            };
            if c == col || c.abs_diff(col) == r.abs_diff(row) {
                return Safety::Conflict(Cell::new(r, c));
            }
        }
        Safety::Safe
    }

    /// True when every row holds a queen and no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.0.iter().all(Option::is_some)
            && (0..self.len()).all(|row| match self.get(row) {
                Some(col) => self.is_safe(row, col).is_safe(),
                None => false,
            })
    }

    /// Whether a square is attacked by a placed queen other than one on it.
    pub fn threatened(&self, row: usize, col: usize) -> bool {
        self.queens().any(|q| {
            (q.row != row || q.col != col)
                && (q.row == row || q.col == col || q.row.abs_diff(row) == q.col.abs_diff(col))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, col) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match col {
                Some(col) => write!(f, "{col}")?,
                None => f.write_str("-")?,
            }
        }
        f.write_str("]")
    }
}
