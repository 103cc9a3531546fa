//! The [`Maze`] type — a rectangular character grid with designated
//! entry/exit and wall symbols.
//!
//! Cells live in a dense row-major arena indexed by `y * width + x`, so
//! the "exists but out of bounds" check is a single range comparison and
//! boundary lookups return `None` rather than panicking.

use std::fmt;

use crate::geom::Point;

/// A rectangular maze parsed from equal-length rows of symbols.
///
/// Positions are addressed by [`Point`] with `x` as the column and `y`
/// as the row. The same symbol marks both the source and the destination
/// cell; a second symbol marks impassable cells.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<char>,
    width: i32,
    height: i32,
    entry: char,
    wall: char,
}

impl Maze {
    /// Build a maze from its rows.
    ///
    /// Fails if `rows` is empty, the first row is empty, or any row's
    /// length differs from the first row's.
    pub fn new<S: AsRef<str>>(entry: char, wall: char, rows: &[S]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let got = cells.len() - before;
            if got != width {
                return Err(MazeError::InconsistentSize {
                    row: y,
                    expected: width,
                    got,
                });
            }
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: rows.len() as i32,
            entry,
            wall,
        })
    }

    /// Size of the maze as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The symbol marking both the source and the destination cell.
    #[inline]
    pub fn entry_symbol(&self) -> char {
        self.entry
    }

    /// The symbol marking impassable cells.
    #[inline]
    pub fn wall_symbol(&self) -> char {
        self.wall
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Symbol at `p`, or `None` if `p` is out of bounds.
    pub fn at(&self, p: Point) -> Option<char> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Locate the source and destination cells.
    ///
    /// Scans in row-major order for cells carrying the entry symbol. The
    /// first match is the source and the second the destination; any
    /// further matches are ignored.
    pub fn find_entry_points(&self) -> Result<(Point, Point), MazeError> {
        let mut entries = (0..self.cells.len())
            .filter(|&i| self.cells[i] == self.entry)
            .map(|i| Point::new(i as i32 % self.width, i as i32 / self.width));
        match (entries.next(), entries.next()) {
            (Some(source), Some(destination)) => Ok((source, destination)),
            (first, _) => Err(MazeError::NoEntry {
                found: first.map_or(0, |_| 1),
            }),
        }
    }
}

impl fmt::Display for Maze {
    /// The raw maze, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors from maze construction and entry-point discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Fewer than two entry-symbol cells were found.
    NoEntry { found: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty input"),
            Self::InconsistentSize { row, expected, got } => {
                write!(f, "maze: row {row} has {got} cells, expected {expected}")
            }
            Self::NoEntry { found } => {
                write!(f, "maze: found {found} entry point(s), need 2")
            }
        }
    }
}

impl std::error::Error for MazeError {}
