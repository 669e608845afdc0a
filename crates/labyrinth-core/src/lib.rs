//! **labyrinth-core** — Maze grid model (core types).
//!
//! This crate provides the value types shared across the *labyrinth*
//! workspace: the [`Point`] coordinate, the [`CellKind`] classification of
//! grid positions, and the immutable [`Grid`] parsed once from a textual
//! map. Search algorithms live in the `labyrinth-search` crate; rendering
//! is left entirely to front ends.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use geom::Point;
pub use grid::{Grid, GridError};
