/*
grid.rs

Copyright 2025 The Cratekeeper developers

This file is part of Cratekeeper.

Cratekeeper is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Cratekeeper is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Cratekeeper. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Fixed-size map of [`GameObject`] tiles.
//!
//! A [`GameGrid`] has immutable dimensions and mutable cell contents.
//! Every access is bounds-checked: reading outside the grid is a [`GridError`], never a
//! wraparound, and writing outside the grid leaves the grid untouched.
//!
//! Coordinates are [`Point`] values where `x` is the column and `y` is the row.

use std::error::Error;
use std::fmt;

use crate::game_object::GameObject;

/// A cell coordinate or a movement delta, with `x` as the column and `y` as the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point moved by the given delta.
    ///
    /// This is pure coordinate arithmetic; bounds are checked where the result is used.
    pub fn translate(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// Failure to read a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    OutOfBounds { col: i32, row: i32 },

    /// The cell is inside the grid but was never set.
    Empty { col: i32, row: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::OutOfBounds { col, row } => {
                write!(f, "the point [{col}:{row}] is outside the map")
            }
            GridError::Empty { col, row } => {
                write!(f, "the point [{col}:{row}] holds no object")
            }
        }
    }
}

impl Error for GridError {}

/// Fixed-size map of game objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameGrid {
    /// Number of columns, fixed at construction.
    columns: i32,

    /// Number of rows, fixed at construction.
    rows: i32,

    /// Cell contents in row-major order. `None` marks a cell that was never set.
    cells: Vec<Option<GameObject>>,
}

impl GameGrid {
    /// Create a [`GameGrid`] object with all cells unset.
    pub fn new(columns: i32, rows: i32) -> Self {
        let size: usize = (columns.max(0) as usize) * (rows.max(0) as usize);
        Self {
            columns,
            rows,
            cells: vec![None; size],
        }
    }

    /// Return the number of columns.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Return the number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.columns || row >= self.rows {
            return None;
        }
        Some((row * self.columns + col) as usize)
    }

    /// Return the object at the given column and row.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when the coordinate lies outside the grid, and
    /// [`GridError::Empty`] when the cell was never set.
    pub fn get(&self, col: i32, row: i32) -> Result<GameObject, GridError> {
        match self.index(col, row) {
            Some(i) => self.cells[i].ok_or(GridError::Empty { col, row }),
            None => Err(GridError::OutOfBounds { col, row }),
        }
    }

    /// Return the object at the given point.
    pub fn get_at(&self, p: Point) -> Result<GameObject, GridError> {
        self.get(p.x, p.y)
    }

    /// Return the object at the point reached by moving from `source` by `delta`.
    pub fn target_from_source(&self, source: Point, delta: Point) -> Result<GameObject, GridError> {
        self.get_at(source.translate(delta))
    }

    /// Store the object at the given column and row.
    ///
    /// Return `false`, without mutating the grid, when the coordinate lies outside the grid.
    pub fn put(&mut self, object: GameObject, col: i32, row: i32) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = Some(object);
                true
            }
            None => false,
        }
    }

    /// Store the object at the given point.
    pub fn put_at(&mut self, object: GameObject, p: Point) -> bool {
        self.put(object, p.x, p.y)
    }

    /// Return a fresh iterator over the tiles in row-major order.
    ///
    /// Unset cells are reported as [`GameObject::DebugMarker`].
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator {
            grid: self,
            column: 0,
            row: 0,
        }
    }
}

/// Serialize the grid, one character per cell, rows separated by newlines.
///
/// An unset cell serializes as the debug marker (`=`). That output is a diagnostic affordance,
/// not a loadable state.
impl fmt::Display for GameGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let object: GameObject = self
                    .get(col, row)
                    .unwrap_or(GameObject::DebugMarker);
                write!(f, "{}", object.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major iterator over the tiles of a grid.
pub struct GridIterator<'a> {
    grid: &'a GameGrid,
    column: i32,
    row: i32,
}

impl Iterator for GridIterator<'_> {
    type Item = GameObject;

    fn next(&mut self) -> Option<GameObject> {
        if self.column >= self.grid.columns {
            self.column = 0;
            self.row += 1;
        }
        if self.row >= self.grid.rows || self.grid.columns == 0 {
            return None;
        }
        let object: GameObject = self
            .grid
            .get(self.column, self.row)
            .unwrap_or(GameObject::DebugMarker);
        self.column += 1;
        Some(object)
    }
}
