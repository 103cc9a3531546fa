//! Pattern-constrained pathfinding for character mazes.
//!
//! The walk implemented here is a **deterministic greedy walk with
//! single-step backtracking**, not a shortest-path search: at each cell
//! the first admissible neighbor in a fixed scan order (above, below,
//! left, right) is taken, and when no neighbor qualifies the walk undoes
//! one step — and one pattern position — and tries again from the
//! previous cell. A step is admissible when the target cell carries the
//! pattern cursor's expected symbol or the entry symbol, and is not a
//! wall.
//!
//! All state lives in [`Walker`], which owns flat per-cell arenas so that
//! repeated walks reuse the same allocations. The algorithm reaches the
//! grid through the [`PatternPather`] trait.
//!
//! A consequence of the greedy strategy: a cell is never revisited once
//! marked, even after backtracking, so mazes whose only solution revisits
//! a cell under a different pattern phase are reported as unsolvable.

mod render;
mod walker;

pub use render::{FILL, render_path};
pub use walker::{PatternPather, UNREACHABLE, WalkOutcome, Walker};
