/*
level.rs

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

//! One puzzle of a level pack.
//!
//! A [`Level`] composes three same-sized grids:
//!
//! * `objects` — walls, floor, crates, and the keeper. Diamond cells are downgraded to floor
//!   here so that crates and the keeper can move over and rest on them.
//! * `diamonds` — the diamond positions only. This layer never changes after construction.
//! * `merged` — the display-ready merge of the two, kept in sync with every mutation.
//!
//! The level is complete when every diamond cell holds a crate.

use std::error::Error;
use std::fmt;

use crate::game_object::GameObject;
use crate::grid::{GameGrid, GridError, Point};

/// Structural problem in the rows a level is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The level has no rows.
    Empty,

    /// A row has a different length than the first row.
    RaggedRow { row: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "the level has no rows"),
            LevelError::RaggedRow { row } => {
                write!(f, "row {row} does not match the width of the first row")
            }
        }
    }
}

impl Error for LevelError {}

/// One puzzle: its grids, name, index in the pack, and keeper bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Level name from the pack file.
    name: String,

    /// Position in the level sequence, immutable after construction.
    index: usize,

    /// Walls, floor, crates, and the keeper. Diamonds are floor on this layer.
    objects: GameGrid,

    /// Diamond positions only.
    diamonds: GameGrid,

    /// Display-ready merge, mirrored on every mutation.
    merged: GameGrid,

    /// Number of diamond cells placed at construction.
    diamond_count: usize,

    /// Current keeper position.
    keeper_position: Point,

    /// Keeper position at construction, immutable afterwards.
    keeper_initial_position: Point,
}

impl Level {
    /// Build a [`Level`] object from rows of symbol characters.
    ///
    /// Diamond characters are recorded on the diamond layer and downgraded to floor on the
    /// object layer; `O` and `K` record a diamond and downgrade to a crate and the keeper
    /// respectively. The keeper character also fixes the initial keeper position.
    ///
    /// # Errors
    ///
    /// [`LevelError::Empty`] when no rows are provided, [`LevelError::RaggedRow`] when the
    /// trimmed rows do not all share the length of the first one.
    pub fn new(name: &str, index: usize, rows: &[String]) -> Result<Self, LevelError> {
        let rows: Vec<&str> = rows.iter().map(|r| r.trim()).collect();
        let columns: i32 = match rows.first() {
            Some(first) => first.chars().count() as i32,
            None => return Err(LevelError::Empty),
        };
        if columns == 0 {
            return Err(LevelError::Empty);
        }

        let mut level = Self {
            name: name.to_string(),
            index,
            objects: GameGrid::new(columns, rows.len() as i32),
            diamonds: GameGrid::new(columns, rows.len() as i32),
            merged: GameGrid::new(columns, rows.len() as i32),
            diamond_count: 0,
            keeper_position: Point::new(0, 0),
            keeper_initial_position: Point::new(0, 0),
        };

        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() as i32 != columns {
                return Err(LevelError::RaggedRow { row });
            }
            for (col, c) in text.chars().enumerate() {
                let (col, row) = (col as i32, row as i32);
                let mut tile: GameObject = GameObject::from_char(c);
                match tile {
                    GameObject::Diamond => {
                        level.diamond_count += 1;
                        level.diamonds.put(GameObject::Diamond, col, row);
                        tile = GameObject::Floor;
                    }
                    GameObject::Keeper => {
                        level.keeper_position = Point::new(col, row);
                        level.keeper_initial_position = Point::new(col, row);
                    }
                    GameObject::CrateOnDiamond => {
                        level.diamond_count += 1;
                        level.diamonds.put(GameObject::Diamond, col, row);
                        tile = GameObject::Crate;
                    }
                    GameObject::KeeperOnDiamond => {
                        level.diamond_count += 1;
                        level.diamonds.put(GameObject::Diamond, col, row);
                        level.keeper_position = Point::new(col, row);
                        level.keeper_initial_position = Point::new(col, row);
                        tile = GameObject::Keeper;
                    }
                    _ => {}
                }
                level.objects.put(tile, col, row);
                level.merged.put(tile, col, row);
            }
        }
        Ok(level)
    }

    /// Return the level name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the position of the level in the pack.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the number of diamond cells in the level.
    pub fn diamond_count(&self) -> usize {
        self.diamond_count
    }

    /// Return the current keeper position.
    pub fn keeper_position(&self) -> Point {
        self.keeper_position
    }

    /// Return the keeper position at construction.
    pub fn keeper_initial_position(&self) -> Point {
        self.keeper_initial_position
    }

    /// Move the keeper position by the given delta. The grids are not touched.
    pub fn translate_keeper(&mut self, delta: Point) {
        self.keeper_position = self.keeper_position.translate(delta);
    }

    /// Reset the keeper position to its initial value. The grids are not touched.
    pub fn move_keeper_to_initial(&mut self) {
        self.keeper_position = self.keeper_initial_position;
    }

    /// Return the object at the point reached by moving from `source` by `delta`.
    pub fn target_object(&self, source: Point, delta: Point) -> Result<GameObject, GridError> {
        self.objects.target_from_source(source, delta)
    }

    /// Return the object at the given point.
    pub fn object_at(&self, p: Point) -> Result<GameObject, GridError> {
        self.objects.get_at(p)
    }

    /// Move the object from `source` by `delta`. See [`Level::move_object_to`].
    pub fn move_object_by(
        &mut self,
        object: GameObject,
        source: Point,
        delta: Point,
    ) -> Result<(), GridError> {
        self.move_object_to(object, source, source.translate(delta))
    }

    /// Move the object into `destination` and write the previous occupant of `destination`
    /// back into `source`.
    ///
    /// The swap is what makes crate pushes work: when the keeper steps onto a cell, the cell
    /// the keeper leaves must become whatever the destination held (floor), not
    /// unconditionally floor. Both the object layer and the merged layer are updated.
    pub fn move_object_to(
        &mut self,
        object: GameObject,
        source: Point,
        destination: Point,
    ) -> Result<(), GridError> {
        let displaced: GameObject = self.object_at(destination)?;
        self.merged.put_at(displaced, source);
        self.merged.put_at(object, destination);
        self.objects.put_at(displaced, source);
        self.objects.put_at(object, destination);
        Ok(())
    }

    /// Whether every diamond cell holds a crate.
    pub fn is_complete(&self) -> bool {
        let mut crated_diamonds: usize = 0;
        for row in 0..self.objects.rows() {
            for col in 0..self.objects.columns() {
                if self.objects.get(col, row) == Ok(GameObject::Crate)
                    && self.diamonds.get(col, row) == Ok(GameObject::Diamond)
                {
                    crated_diamonds += 1;
                }
            }
        }
        crated_diamonds >= self.diamond_count
    }

    /// Serialize the level for a save file.
    ///
    /// Cells with an underlying diamond are written back as `O`, `K`, or `D` depending on what
    /// currently occupies them, so that reloading the text reconstructs both layers.
    pub fn save_level(&self) -> String {
        let mut overlay: GameGrid = self.merged.clone();
        for row in 0..overlay.rows() {
            for col in 0..overlay.columns() {
                if self.diamonds.get(col, row) != Ok(GameObject::Diamond) {
                    continue;
                }
                match overlay.get(col, row) {
                    Ok(GameObject::Crate) => {
                        overlay.put(GameObject::CrateOnDiamond, col, row);
                    }
                    Ok(GameObject::Keeper) => {
                        overlay.put(GameObject::KeeperOnDiamond, col, row);
                    }
                    _ => {
                        overlay.put(GameObject::Diamond, col, row);
                    }
                }
            }
        }
        overlay.to_string()
    }

    /// Return a fresh iterator over the display tiles.
    pub fn iter(&self) -> LevelIterator<'_> {
        LevelIterator {
            level: self,
            column: 0,
            row: 0,
            position: Point::new(0, 0),
        }
    }
}

/// Serialize the object layer. Diamond cells read as floor here; see [`Level::save_level`]
/// for the merged form.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.objects)
    }
}

/// Row-major iterator over the display tiles of a level.
///
/// A diamond under a crate yields [`GameObject::CrateOnDiamond`], a diamond under floor yields
/// [`GameObject::Diamond`], and anything else yields the object-layer tile.
pub struct LevelIterator<'a> {
    level: &'a Level,
    column: i32,
    row: i32,
    position: Point,
}

impl LevelIterator<'_> {
    /// Return the position of the most recently yielded tile, for placement by a renderer.
    pub fn current_position(&self) -> Point {
        self.position
    }
}

impl Iterator for LevelIterator<'_> {
    type Item = GameObject;

    fn next(&mut self) -> Option<GameObject> {
        if self.column >= self.level.objects.columns() {
            self.column = 0;
            self.row += 1;
        }
        if self.row >= self.level.objects.rows() {
            return None;
        }

        let object: GameObject = self
            .level
            .objects
            .get(self.column, self.row)
            .unwrap_or(GameObject::DebugMarker);
        let diamond: Result<GameObject, GridError> = self.level.diamonds.get(self.column, self.row);
        self.position = Point::new(self.column, self.row);
        self.column += 1;

        if diamond == Ok(GameObject::Diamond) {
            match object {
                GameObject::Crate => return Some(GameObject::CrateOnDiamond),
                GameObject::Floor => return Some(GameObject::Diamond),
                _ => return Some(object),
            }
        }
        Some(object)
    }
}
