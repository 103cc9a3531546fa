//! **mazewalk-core** — core types for the pattern-maze solver.
//!
//! This crate provides the foundational types used across the *mazewalk*
//! workspace: the [`Point`] geometry primitive, the [`Maze`] grid model,
//! and the cyclic [`Pattern`] cursor that decides which symbol each step
//! of a walk may land on.

pub mod geom;
pub mod maze;
pub mod pattern;

pub use geom::Point;
pub use maze::{Maze, MazeError};
pub use pattern::{Pattern, PatternError};
