use std::fmt;

use mazewalk_core::{Maze, Pattern, Point};

/// Terrain interface for the pattern walk — symbol lookup plus the two
/// special symbols.
pub trait PatternPather {
    /// Symbol at `p`, or `None` outside the grid.
    fn symbol(&self, p: Point) -> Option<char>;
    /// The symbol marking both the source and the destination cell.
    fn entry_symbol(&self) -> char;
    /// The symbol marking impassable cells.
    fn wall_symbol(&self) -> char;
    /// Grid dimensions (width = x, height = y).
    fn size(&self) -> Point;
}

impl PatternPather for Maze {
    fn symbol(&self, p: Point) -> Option<char> {
        self.at(p)
    }

    fn entry_symbol(&self) -> char {
        Maze::entry_symbol(self)
    }

    fn wall_symbol(&self) -> char {
        Maze::wall_symbol(self)
    }

    fn size(&self) -> Point {
        Maze::size(self)
    }
}

/// Sentinel cost meaning "this step cannot be taken".
pub const UNREACHABLE: i32 = i32::MAX;

/// Neighbor scan order: above, below, left, right. Selection is
/// first-fit, so this order is part of the observable contract.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Cost of stepping onto a cell showing `sym` while the cursor expects
/// `expected`: 1 for a pattern match or the entry symbol, otherwise the
/// step is inadmissible.
fn step_cost<P: PatternPather>(pather: &P, sym: char, expected: char) -> i32 {
    if sym != pather.wall_symbol() && (sym == expected || sym == pather.entry_symbol()) {
        1
    } else {
        UNREACHABLE
    }
}

/// Outcome of a walk attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkOutcome {
    /// A path was found; `length` counts its cells, source and
    /// destination inclusive.
    Found { length: usize },
    /// Backtracking exhausted every ancestor without reaching the
    /// destination.
    NoPath,
}

impl WalkOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { length } => write!(f, "Path Found of length: {length}"),
            Self::NoPath => write!(f, "No Path found!"),
        }
    }
}

/// Search state for the pattern walk.
///
/// Owns flat per-cell arenas — distance, visited flag, parent index —
/// sized to the grid, so repeated walks incur no allocations. Parent
/// links are indices into the arena (`usize::MAX` = no parent), never
/// owning references; the arena is the single owner of all cell state.
pub struct Walker {
    width: usize,
    height: usize,
    dist: Vec<i32>,
    visited: Vec<bool>,
    parent: Vec<usize>,
    path: Vec<Point>,
}

impl Walker {
    /// Create a walker for a grid of the given size.
    pub fn new(size: Point) -> Self {
        let width = size.x.max(0) as usize;
        let height = size.y.max(0) as usize;
        let len = width * height;
        Self {
            width,
            height,
            dist: vec![UNREACHABLE; len],
            visited: vec![false; len],
            parent: vec![usize::MAX; len],
            path: Vec::new(),
        }
    }

    /// The path found by the last successful [`walk`](Self::walk), in
    /// traversal order from source to destination. Empty if the last
    /// walk failed or after a [`reset`](Self::reset).
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Restore every cell to its pre-walk state and clear the path.
    pub fn reset(&mut self) {
        self.dist.fill(UNREACHABLE);
        self.visited.fill(false);
        self.parent.fill(usize::MAX);
        self.path.clear();
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The cell adjacent to `p` in direction `dir`, only if it exists
    /// and has not been visited yet.
    #[inline]
    fn unvisited_neighbor(&self, p: Point, dir: Point) -> Option<usize> {
        let ni = self.idx(p + dir)?;
        (!self.visited[ni]).then_some(ni)
    }

    /// Walk from `source` toward `destination`, consuming the pattern.
    ///
    /// At every cell the first admissible neighbor in scan order (above,
    /// below, left, right) is taken and the pattern cursor advances; when
    /// no neighbor qualifies the walk backs up one parent link and the
    /// cursor retreats. The walk succeeds as soon as it steps onto a cell
    /// carrying the entry symbol, and fails once backtracking runs out of
    /// ancestors.
    ///
    /// If a previous walk left a path behind, the walker and the pattern
    /// cursor are reset first — a re-solve always re-runs the algorithm.
    pub fn walk<P: PatternPather>(
        &mut self,
        pather: &P,
        pattern: &mut Pattern,
        source: Point,
        destination: Point,
    ) -> WalkOutcome {
        if !self.path.is_empty() {
            self.reset();
            pattern.reset();
        }
        log::debug!("walking from {source} to {destination} with pattern '{pattern}'");

        let Some(src) = self.idx(source) else {
            return WalkOutcome::NoPath;
        };
        self.dist[src] = 0;
        let mut current = Some(src);

        while let Some(ci) = current {
            let cp = self.point(ci);
            let expected = pattern.expected();

            // First admissible neighbor in scan order, if any.
            let mut chosen = None;
            for d in DIRS {
                let Some(ni) = self.unvisited_neighbor(cp, d) else {
                    continue;
                };
                let Some(sym) = pather.symbol(self.point(ni)) else {
                    continue;
                };
                let cost = step_cost(pather, sym, expected);
                if cost == UNREACHABLE {
                    continue;
                }
                if self.dist[ci] + cost < self.dist[ni] {
                    self.dist[ni] = self.dist[ci] + cost;
                    self.parent[ni] = ci;
                    chosen = Some((ni, sym));
                    break;
                }
            }
            self.visited[ci] = true;

            match chosen {
                Some((ni, sym)) => {
                    pattern.advance();
                    current = Some(ni);
                    if sym == pather.entry_symbol() {
                        // Stepped onto the destination.
                        break;
                    }
                }
                None => {
                    // Undo one step of the walk and one step of the
                    // pattern. A missing parent ends the search.
                    pattern.retreat();
                    let pi = self.parent[ci];
                    current = (pi != usize::MAX).then_some(pi);
                }
            }
        }

        let Some(mut ci) = current else {
            return WalkOutcome::NoPath;
        };

        // Reconstruct source -> destination by following parent links.
        self.path.clear();
        while ci != usize::MAX {
            self.path.push(self.point(ci));
            ci = self.parent[ci];
        }
        self.path.reverse();
        WalkOutcome::Found {
            length: self.path.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[&str]) -> Maze {
        Maze::new('E', '#', rows).unwrap()
    }

    fn solve(m: &Maze, pattern: &str) -> (WalkOutcome, Vec<Point>) {
        let mut pattern = Pattern::new(pattern).unwrap();
        let (source, destination) = m.find_entry_points().unwrap();
        let mut walker = Walker::new(m.size());
        let outcome = walker.walk(m, &mut pattern, source, destination);
        (outcome, walker.path().to_vec())
    }

    #[test]
    fn straight_corridor() {
        let m = maze(&["EaaE"]);
        let (outcome, path) = solve(&m, "a");
        assert_eq!(outcome, WalkOutcome::Found { length: 4 });
        assert_eq!(outcome.to_string(), "Path Found of length: 4");
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
            ]
        );
    }

    #[test]
    fn wall_blocks_path() {
        let m = maze(&["E#aE"]);
        let (outcome, path) = solve(&m, "a");
        assert_eq!(outcome, WalkOutcome::NoPath);
        assert_eq!(outcome.to_string(), "No Path found!");
        assert!(path.is_empty());
    }

    #[test]
    fn adjacent_entries() {
        let m = maze(&["EE"]);
        let (outcome, path) = solve(&m, "a");
        assert_eq!(outcome, WalkOutcome::Found { length: 2 });
        assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn alternating_pattern_followed() {
        let m = maze(&["EabE"]);
        let (outcome, _) = solve(&m, "ab");
        assert_eq!(outcome, WalkOutcome::Found { length: 4 });
    }

    #[test]
    fn phase_mismatch_blocks_neighbor() {
        // Second step expects 'b'; the only neighbor is 'a', so the walk
        // must treat it as inadmissible and fail after backtracking.
        let m = maze(&["EaaE"]);
        let (outcome, _) = solve(&m, "ab");
        assert_eq!(outcome, WalkOutcome::NoPath);
    }

    #[test]
    fn walk_turns_corners() {
        let m = maze(&[
            "Ea#", //
            "#a#", //
            "#aE", //
        ]);
        let (outcome, path) = solve(&m, "a");
        assert_eq!(outcome, WalkOutcome::Found { length: 5 });
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn dead_end_is_undone() {
        // The scan order tries "above" first, which dead-ends; the walk
        // must back up and continue downward, and the excursion must not
        // appear in the final path.
        let m = maze(&[
            "#a#", //
            "#E#", //
            "#a#", //
            "#a#", //
            "#E#", //
        ]);
        let (outcome, path) = solve(&m, "a");
        assert_eq!(outcome, WalkOutcome::Found { length: 4 });
        assert_eq!(
            path,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(1, 4),
            ]
        );
    }

    #[test]
    fn deterministic_across_walks() {
        let m = maze(&[
            "Eaa", //
            "aaa", //
            "aaE", //
        ]);
        let (first, first_path) = solve(&m, "a");
        let (second, second_path) = solve(&m, "a");
        assert_eq!(first, second);
        assert_eq!(first_path, second_path);
    }

    #[test]
    fn resolve_resets_automatically() {
        let m = maze(&["EaaE"]);
        let mut pattern = Pattern::new("a").unwrap();
        let (source, destination) = m.find_entry_points().unwrap();
        let mut walker = Walker::new(m.size());

        let first = walker.walk(&m, &mut pattern, source, destination);
        let first_path = walker.path().to_vec();
        // No manual reset: a leftover path triggers a full re-run.
        let second = walker.walk(&m, &mut pattern, source, destination);
        assert_eq!(first, second);
        assert_eq!(first_path, walker.path());
    }

    #[test]
    fn reset_clears_state() {
        let m = maze(&["EaaE"]);
        let mut pattern = Pattern::new("a").unwrap();
        let (source, destination) = m.find_entry_points().unwrap();
        let mut walker = Walker::new(m.size());

        walker.walk(&m, &mut pattern, source, destination);
        walker.reset();
        assert!(walker.path().is_empty());

        pattern.reset();
        let outcome = walker.walk(&m, &mut pattern, source, destination);
        assert_eq!(outcome, WalkOutcome::Found { length: 4 });
    }

    #[test]
    fn source_outside_grid_fails() {
        let m = maze(&["EaaE"]);
        let mut pattern = Pattern::new("a").unwrap();
        let mut walker = Walker::new(m.size());
        let outcome = walker.walk(&m, &mut pattern, Point::new(9, 9), Point::new(3, 0));
        assert_eq!(outcome, WalkOutcome::NoPath);
    }

    #[test]
    fn two_symbol_pattern_routes() {
        let m = maze(&[
            "Eb#", //
            "#aE", //
        ]);
        let (outcome, path) = solve(&m, "ba");
        assert_eq!(outcome, WalkOutcome::Found { length: 4 });
        assert_eq!(path.last(), Some(&Point::new(2, 1)));

        let m = maze(&[
            "Ea#", //
            "#b#", //
            "#aE", //
        ]);
        let (outcome, _) = solve(&m, "ab");
        assert_eq!(outcome, WalkOutcome::Found { length: 5 });
    }
}
