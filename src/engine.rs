/*
engine.rs

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

//! The game engine: move resolution, undo, level reset, and progression.
//!
//! A [`GameEngine`] owns the ordered levels of one pack and a pointer to the current one
//! (`None` once the game is complete). Every keeper move pushes one reversal delta onto the
//! keeper history and one onto the crate history, so the two stacks always have the same
//! length; floor moves push a zero crate delta. Crates displaced during the current level are
//! tracked as `{origin, current}` records so that a level reset can put them back.
//!
//! The engine is synchronous and single-threaded. Time accounting is driven from outside
//! through [`GameEngine::tick`], once per second.

use log::{debug, error};

use crate::game_object::GameObject;
use crate::grid::Point;
use crate::level::Level;
use crate::pack::GamePack;

/// A keeper movement direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the coordinate delta of the direction, with `x` as the column and `y` as
    /// the row.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// Return the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A crate displaced during the current level.
#[derive(Debug, Clone, Copy)]
struct CrateMove {
    /// Where the crate stood when the level started.
    origin: Point,

    /// Where the crate stands now.
    current: Point,
}

/// The game engine for one loaded pack.
#[derive(Debug)]
pub struct GameEngine {
    /// Name of the map set.
    map_set_name: String,

    /// The levels, created at load time and never destroyed during the session.
    levels: Vec<Level>,

    /// Index of the current level, or `None` once the game is complete.
    current: Option<usize>,

    game_complete: bool,
    level_complete: bool,

    /// Cumulative move counter across levels.
    moves_total: i32,

    /// Move counter for the current level.
    moves_level: i32,

    /// Play time of the current level, in seconds, advanced by [`GameEngine::tick`].
    time_level: i32,

    /// Play time of the completed levels, in seconds.
    time_total: i32,

    /// Level counter carried by a loaded save; see [`GameEngine::level_index`].
    level_number: i32,

    /// Whether the engine was built from an in-progress save.
    is_level_load: bool,

    /// Direction of the last keeper move, for a renderer choosing a sprite.
    facing: Direction,

    /// Whether to dump the level state on every move.
    debug: bool,

    /// Reversal deltas of the keeper moves, most recent last.
    keeper_history: Vec<Point>,

    /// Reversal deltas of the crate moves, aligned with `keeper_history`. A move that pushed
    /// no crate stores a zero delta.
    crate_history: Vec<Point>,

    /// Crates displaced during the current level.
    crate_moves: Vec<CrateMove>,
}

impl GameEngine {
    /// Create a [`GameEngine`] object from a parsed pack.
    pub fn from_pack(pack: GamePack) -> Self {
        Self {
            map_set_name: pack.map_set_name,
            levels: pack.levels,
            current: Some(0),
            game_complete: false,
            level_complete: false,
            moves_total: pack.moves_total,
            moves_level: pack.moves_level,
            time_level: pack.time_level,
            time_total: pack.time_total,
            level_number: pack.level_index.unwrap_or(-1),
            is_level_load: pack.level_index.is_some(),
            facing: Direction::default(),
            debug: false,
            keeper_history: Vec::new(),
            crate_history: Vec::new(),
            crate_moves: Vec::new(),
        }
    }

    /// Return the name of the map set.
    pub fn map_set_name(&self) -> &str {
        &self.map_set_name
    }

    /// Return the cumulative move counter.
    pub fn moves_total(&self) -> i32 {
        self.moves_total
    }

    /// Return the move counter of the current level.
    pub fn moves_level(&self) -> i32 {
        self.moves_level
    }

    /// Return the play time of the current level, in seconds.
    pub fn time_level(&self) -> i32 {
        self.time_level
    }

    /// Return the play time of the completed levels, in seconds.
    pub fn time_total(&self) -> i32 {
        self.time_total
    }

    /// Whether the current level has just been completed.
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    /// Whether the whole pack has been completed.
    pub fn is_game_complete(&self) -> bool {
        self.game_complete
    }

    /// Return the direction of the last keeper move.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Return the current level, or `None` once the game is complete.
    pub fn current_level(&self) -> Option<&Level> {
        self.current.map(|i| &self.levels[i])
    }

    /// Return the number of levels in the pack.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Toggle the per-move level state dump.
    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    /// Whether the per-move level state dump is active.
    pub fn is_debug_active(&self) -> bool {
        self.debug
    }

    /// Advance the current level time by one second.
    pub fn tick(&mut self) {
        if !self.game_complete {
            self.time_level += 1;
        }
    }

    /// Report the level index shown to the player and written to save files.
    ///
    /// While the level-complete flag is up, the engine has already advanced to the next
    /// level, so the index is corrected down by one. An engine built from a save reports the
    /// saved counter instead of the level's own index.
    pub fn level_index(&self) -> i32 {
        if self.is_level_load {
            if self.level_complete {
                return self.level_number - 1;
            }
            return self.level_number;
        }
        match self.current {
            None => 0,
            Some(idx) => {
                let index: i32 = self.levels[idx].index() as i32;
                if self.level_complete {
                    index - 1
                } else {
                    index
                }
            }
        }
    }

    /// Move the keeper one step in the given direction.
    ///
    /// A wall, a blocked crate, or the edge of the map makes this a no-op. Pushing a crate
    /// moves the crate first and the keeper into its old cell. When the move completes the
    /// level, the engine advances to the next one, or flags the game complete after the
    /// last one.
    pub fn move_keeper(&mut self, direction: Direction) {
        self.facing = direction;
        if self.game_complete {
            return;
        }
        let Some(idx) = self.current else {
            return;
        };
        let delta: Point = direction.delta();
        let anti_delta: Point = direction.opposite().delta();
        let level = &mut self.levels[idx];
        let keeper_position: Point = level.keeper_position();
        let target_point: Point = keeper_position.translate(delta);

        let keeper: GameObject = match level.object_at(keeper_position) {
            Ok(object) => object,
            Err(e) => {
                error!("Cannot read the keeper cell: {e}");
                return;
            }
        };
        let target: GameObject = match level.object_at(target_point) {
            Ok(object) => object,
            Err(e) => {
                // The keeper is walking off the map; treat it like a wall.
                debug!("Keeper blocked: {e}");
                return;
            }
        };

        if self.debug {
            debug!("Current level state:\n{level}");
            debug!("Keeper at [{keeper_position:?}] moving {direction:?} onto {target:?}");
        }

        let mut keeper_moved: bool = false;
        match target {
            GameObject::Wall => {}

            GameObject::Crate => {
                let crate_target: GameObject = match level.target_object(target_point, delta) {
                    Ok(object) => object,
                    Err(e) => {
                        debug!("Crate blocked: {e}");
                        return;
                    }
                };
                if crate_target != GameObject::Floor {
                    return;
                }

                let next_point: Point = target_point.translate(delta);
                match self.crate_moves.iter_mut().find(|m| m.current == target_point) {
                    Some(m) => m.current = next_point,
                    None => self.crate_moves.push(CrateMove {
                        origin: target_point,
                        current: next_point,
                    }),
                }

                self.keeper_history.push(anti_delta);
                self.crate_history.push(anti_delta);
                if let Err(e) = level.move_object_by(target, target_point, delta) {
                    error!("Cannot push the crate: {e}");
                }
                if let Err(e) = level.move_object_by(keeper, keeper_position, delta) {
                    error!("Cannot move the keeper: {e}");
                }
                keeper_moved = true;
            }

            GameObject::Floor => {
                self.keeper_history.push(anti_delta);
                self.crate_history.push(Point::new(0, 0));
                if let Err(e) = level.move_object_by(keeper, keeper_position, delta) {
                    error!("Cannot move the keeper: {e}");
                }
                keeper_moved = true;
            }

            other => {
                error!("The keeper target is not a wall, crate, or floor: {other:?}");
                panic!("Bug: unexpected object {other:?} in the keeper's path");
            }
        }

        if keeper_moved {
            level.translate_keeper(delta);
            self.moves_total += 1;
            self.moves_level += 1;
            if level.is_complete() {
                debug!("Level complete!");
                self.level_complete = true;
                self.level_number += 1;
                self.advance_level();
            }
        }
    }

    /// Undo the last keeper move, pulling back the crate it pushed, if any.
    ///
    /// Return `false`, without changing any state, when there is nothing to undo. Undo never
    /// crosses a level boundary: the histories are cleared when the level advances.
    pub fn undo(&mut self) -> bool {
        let Some(idx) = self.current else {
            return false;
        };
        self.facing = Direction::default();
        let Some(keeper_anti) = self.keeper_history.pop() else {
            return false;
        };
        let Some(crate_anti) = self.crate_history.pop() else {
            return false;
        };

        let level = &mut self.levels[idx];
        let keeper_position: Point = level.keeper_position();
        let keeper: GameObject = match level.object_at(keeper_position) {
            Ok(object) => object,
            Err(e) => {
                error!("Cannot read the keeper cell: {e}");
                return false;
            }
        };

        // The cell the keeper moved toward: if the move pushed a crate, the crate sits there.
        let keeper_delta: Point = Point::new(-keeper_anti.x, -keeper_anti.y);
        let ahead: Point = keeper_position.translate(keeper_delta);
        let ahead_object: Option<GameObject> = level.object_at(ahead).ok();

        if let Err(e) = level.move_object_by(keeper, keeper_position, keeper_anti) {
            error!("Cannot move the keeper back: {e}");
        }
        level.translate_keeper(keeper_anti);

        if ahead_object == Some(GameObject::Crate) && crate_anti != Point::new(0, 0) {
            let pulled: Point = ahead.translate(crate_anti);
            if let Some(m) = self.crate_moves.iter_mut().find(|m| m.current == ahead) {
                m.current = pulled;
            }
            if let Err(e) = level.move_object_by(GameObject::Crate, ahead, crate_anti) {
                error!("Cannot pull the crate back: {e}");
            }
        }

        self.moves_total -= 1;
        self.moves_level -= 1;
        true
    }

    /// Put the keeper and every displaced crate back to their initial placement, clear the
    /// histories, and roll the level's moves out of the cumulative counter.
    pub fn reset_level(&mut self) {
        let Some(idx) = self.current else {
            return;
        };
        self.facing = Direction::default();
        let level = &mut self.levels[idx];

        let keeper_position: Point = level.keeper_position();
        let initial: Point = level.keeper_initial_position();
        match level.object_at(keeper_position) {
            Ok(keeper) => {
                if let Err(e) = level.move_object_to(keeper, keeper_position, initial) {
                    error!("Cannot move the keeper to its initial cell: {e}");
                }
                level.move_keeper_to_initial();
            }
            Err(e) => error!("Cannot read the keeper cell: {e}"),
        }

        for m in &self.crate_moves {
            match level.object_at(m.current) {
                Ok(object) => {
                    if let Err(e) = level.move_object_to(object, m.current, m.origin) {
                        error!("Cannot move a crate to its initial cell: {e}");
                    }
                }
                Err(e) => error!("Cannot read a tracked crate cell: {e}"),
            }
        }

        self.crate_moves.clear();
        self.keeper_history.clear();
        self.crate_history.clear();
        self.moves_total -= self.moves_level;
        self.moves_level = 0;
    }

    /// Acknowledge a completed level: clear the flag, fold the level time into the total,
    /// and zero the per-level counters for the level the engine already advanced to.
    pub fn advance_after_level_dialog(&mut self) {
        if !self.level_complete {
            return;
        }
        self.level_complete = false;
        self.time_total += self.time_level;
        self.time_level = 0;
        self.moves_level = 0;
    }

    /// Move the current-level pointer forward, or flag the game complete after the last
    /// level. The undo histories and crate tracking never survive the advance.
    fn advance_level(&mut self) {
        self.crate_moves.clear();
        self.keeper_history.clear();
        self.crate_history.clear();
        match self.current {
            None => self.current = Some(0),
            Some(idx) => {
                if self.levels[idx].index() < self.levels.len() - 1 {
                    self.current = Some(idx + 1);
                } else {
                    self.game_complete = true;
                    self.current = None;
                }
            }
        }
    }

    /// Serialize the engine state in the pack text format.
    ///
    /// The output starts with the counter headers, followed by every remaining level,
    /// diamonds overlaid, so the text can be loaded again later.
    pub fn save_game(&self) -> String {
        let mut out: String = String::new();
        out.push_str(&format!("moves: {}\n", self.moves_level));
        out.push_str(&format!("total moves: {}\n", self.moves_total));
        out.push_str(&format!("time: {}\n", self.time_level));
        out.push_str(&format!("total time: {}\n", self.time_total + self.time_level));
        out.push_str(&format!("level index: {}\n", self.level_index()));
        if !self.map_set_name.is_empty() {
            out.push_str(&format!("MapSetName: {}\n", self.map_set_name));
        }
        out.push('\n');
        let first: usize = match self.current {
            Some(idx) => idx,
            None => self.levels.len(),
        };
        for level in &self.levels[first..] {
            out.push_str(&format!("LevelName: {}\n", level.name()));
            out.push_str(&level.save_level());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    const ONE_LEVEL: &str = "MapSetName: test set\n\
        LevelName: one\n\
        WWWW\n\
        WCDW\n\
        W SW\n\
        WWWW\n";

    const TWO_LEVELS: &str = "MapSetName: test set\n\
        LevelName: one\n\
        WWWW\n\
        WCDW\n\
        W SW\n\
        WWWW\n\
        LevelName: two\n\
        WWWWW\n\
        WSCDW\n\
        WW WW\n\
        WWWWW\n";

    fn engine(text: &str) -> GameEngine {
        GameEngine::from_pack(pack::parse(text.as_bytes()).expect("the test pack must parse"))
    }

    /// A fresh engine starts on the first level with zeroed counters.
    #[test]
    fn test_fresh_engine() {
        let engine = engine(TWO_LEVELS);
        assert_eq!("test set", engine.map_set_name());
        assert_eq!(0, engine.moves_total());
        assert_eq!(0, engine.moves_level());
        assert_eq!(0, engine.level_index());
        assert!(!engine.is_level_complete());
        assert!(!engine.is_game_complete());
        assert_eq!(
            "one",
            engine.current_level().expect("a level must be loaded").name()
        );
    }

    /// Moving onto floor moves the keeper and counts one move.
    #[test]
    fn test_move_onto_floor() {
        let mut engine = engine(ONE_LEVEL);
        engine.move_keeper(Direction::Left);
        let level = engine.current_level().expect("a level must be loaded");
        assert_eq!(Ok(GameObject::Keeper), level.object_at(Point::new(1, 2)));
        assert_eq!(Ok(GameObject::Floor), level.object_at(Point::new(2, 2)));
        assert_eq!(Point::new(1, 2), level.keeper_position());
        assert_eq!(1, engine.moves_total());
        assert_eq!(1, engine.moves_level());
        assert_eq!(Direction::Left, engine.facing());
    }

    /// Moving into a wall changes nothing, not even the histories.
    #[test]
    fn test_move_into_wall() {
        let mut engine = engine(ONE_LEVEL);
        engine.move_keeper(Direction::Right);
        let level = engine.current_level().expect("a level must be loaded");
        assert_eq!(Point::new(2, 2), level.keeper_position());
        assert_eq!(0, engine.moves_total());
        assert!(!engine.undo());
    }

    /// A push against a crate with a wall behind it is a no-op with no history entry.
    #[test]
    fn test_blocked_push_leaves_no_history() {
        // The crate at (1,1) has the wall row above it
        let mut engine = engine(ONE_LEVEL);
        engine.move_keeper(Direction::Left);
        engine.move_keeper(Direction::Up);
        let level = engine.current_level().expect("a level must be loaded");
        assert_eq!(Ok(GameObject::Crate), level.object_at(Point::new(1, 1)));
        assert_eq!(Point::new(1, 2), level.keeper_position());
        assert_eq!(1, engine.moves_total());
        assert!(!engine.is_level_complete());

        // Only the floor move is undoable
        assert!(engine.undo());
        assert!(!engine.undo());
    }

    /// A solvable level completes and advances to the next one.
    #[test]
    fn test_level_advance() {
        const SOLVABLE_FIRST: &str = "LevelName: one\n\
            WWWWW\n\
            WSCDW\n\
            WW WW\n\
            WWWWW\n\
            LevelName: two\n\
            WWWW\n\
            WCDW\n\
            W SW\n\
            WWWW\n";
        let mut engine = engine(SOLVABLE_FIRST);
        engine.move_keeper(Direction::Right);
        assert!(engine.is_level_complete());
        assert!(!engine.is_game_complete());
        assert_eq!(0, engine.level_index());
        assert_eq!(
            "two",
            engine.current_level().expect("a level must be loaded").name()
        );
        // Undo cannot cross the level boundary
        assert!(!engine.undo());

        engine.advance_after_level_dialog();
        assert!(!engine.is_level_complete());
        assert_eq!(1, engine.level_index());
        assert_eq!(0, engine.moves_level());
        assert_eq!(1, engine.moves_total());
    }

    /// Completing the last level completes the game.
    #[test]
    fn test_game_completion() {
        const LAST_LEVEL: &str = "LevelName: only\n\
            WWWWW\n\
            WSCDW\n\
            WW WW\n\
            WWWWW\n";
        let mut engine = engine(LAST_LEVEL);
        engine.move_keeper(Direction::Right);
        assert!(engine.is_level_complete());
        assert!(engine.is_game_complete());
        assert!(engine.current_level().is_none());

        // Further input is ignored
        engine.move_keeper(Direction::Left);
        assert_eq!(1, engine.moves_total());
    }

    /// Undo with no history reports failure and changes nothing.
    #[test]
    fn test_undo_without_history() {
        let mut engine = engine(ONE_LEVEL);
        assert!(!engine.undo());
        assert_eq!(0, engine.moves_total());
        assert_eq!(
            Point::new(2, 2),
            engine.current_level().unwrap().keeper_position()
        );
    }

    /// A sequence of unblocked moves undoes back to the starting state.
    #[test]
    fn test_move_undo_inverse() {
        const OPEN_LEVEL: &str = "LevelName: open\n\
            WWWWWW\n\
            W    W\n\
            W CS W\n\
            W  D W\n\
            WWWWWW\n";
        let mut engine = engine(OPEN_LEVEL);
        let start: Point = engine.current_level().unwrap().keeper_position();
        let before: String = engine.current_level().unwrap().to_string();

        let moves = [
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Down, // pushes nothing
            Direction::Right, // pushes the crate right
        ];
        for direction in moves {
            engine.move_keeper(direction);
        }
        assert_eq!(5, engine.moves_total());

        for _ in 0..moves.len() {
            assert!(engine.undo());
        }
        assert_eq!(0, engine.moves_total());
        assert_eq!(0, engine.moves_level());
        assert_eq!(start, engine.current_level().unwrap().keeper_position());
        assert_eq!(before, engine.current_level().unwrap().to_string());
        assert!(!engine.undo());
    }

    /// Undoing a crate push pulls the crate back with the keeper.
    #[test]
    fn test_undo_crate_push() {
        const PUSH_LEVEL: &str = "LevelName: push\n\
            WWWWWW\n\
            WSC DW\n\
            WW WWW\n\
            WWWWWW\n";
        let mut engine = engine(PUSH_LEVEL);
        engine.move_keeper(Direction::Right);
        let level = engine.current_level().unwrap();
        assert_eq!(Ok(GameObject::Crate), level.object_at(Point::new(3, 1)));
        assert_eq!(Ok(GameObject::Keeper), level.object_at(Point::new(2, 1)));

        assert!(engine.undo());
        let level = engine.current_level().unwrap();
        assert_eq!(Ok(GameObject::Crate), level.object_at(Point::new(2, 1)));
        assert_eq!(Ok(GameObject::Keeper), level.object_at(Point::new(1, 1)));
        assert_eq!(0, engine.moves_total());
    }

    /// Reset puts the keeper and every displaced crate back and zeroes the level counter.
    #[test]
    fn test_reset_level() {
        const OPEN_LEVEL: &str = "LevelName: open\n\
            WWWWWW\n\
            W    W\n\
            W CS W\n\
            W  D W\n\
            WWWWWW\n";
        let mut engine = engine(OPEN_LEVEL);
        let before: String = engine.current_level().unwrap().to_string();
        let start: Point = engine.current_level().unwrap().keeper_position();

        engine.move_keeper(Direction::Left); // pushes the crate left
        engine.move_keeper(Direction::Up);
        engine.move_keeper(Direction::Left);
        assert_eq!(3, engine.moves_total());

        engine.reset_level();
        assert_eq!(0, engine.moves_total());
        assert_eq!(0, engine.moves_level());
        assert_eq!(start, engine.current_level().unwrap().keeper_position());
        assert_eq!(before, engine.current_level().unwrap().to_string());
        assert!(!engine.undo());
    }

    /// Reset rolls only the current level's moves out of the cumulative counter.
    #[test]
    fn test_reset_level_keeps_previous_moves() {
        const SOLVABLE_FIRST: &str = "LevelName: one\n\
            WWWWW\n\
            WSCDW\n\
            WW WW\n\
            WWWWW\n\
            LevelName: two\n\
            WWWW\n\
            WCDW\n\
            W SW\n\
            WWWW\n";
        let mut engine = engine(SOLVABLE_FIRST);
        engine.move_keeper(Direction::Right);
        engine.advance_after_level_dialog();
        engine.move_keeper(Direction::Left);
        assert_eq!(2, engine.moves_total());

        engine.reset_level();
        assert_eq!(1, engine.moves_total());
        assert_eq!(0, engine.moves_level());
    }

    /// Ticks accumulate level time and fold into the total on advance.
    #[test]
    fn test_tick_and_time_accounting() {
        const SOLVABLE_FIRST: &str = "LevelName: one\n\
            WWWWW\n\
            WSCDW\n\
            WW WW\n\
            WWWWW\n\
            LevelName: two\n\
            WWWW\n\
            WCDW\n\
            W SW\n\
            WWWW\n";
        let mut engine = engine(SOLVABLE_FIRST);
        engine.tick();
        engine.tick();
        assert_eq!(2, engine.time_level());
        assert_eq!(0, engine.time_total());

        engine.move_keeper(Direction::Right);
        engine.advance_after_level_dialog();
        assert_eq!(0, engine.time_level());
        assert_eq!(2, engine.time_total());
    }

    /// The save output carries the headers and the remaining levels.
    #[test]
    fn test_save_game_format() {
        let mut engine = engine(ONE_LEVEL);
        engine.tick();
        engine.move_keeper(Direction::Left);
        let saved: String = engine.save_game();
        assert!(saved.starts_with("moves: 1\ntotal moves: 1\ntime: 1\ntotal time: 1\n"));
        assert!(saved.contains("level index: 0\n"));
        assert!(saved.contains("MapSetName: test set\n"));
        assert!(saved.contains("LevelName: one\n"));
        // The keeper moved left; the save reflects the new placement
        assert!(saved.contains("WWWW\nWCDW\nWS W\nWWWW\n"));
    }

    /// Saving and reloading reproduces the level content.
    #[test]
    fn test_save_load_round_trip() {
        let mut engine = engine(TWO_LEVELS);
        engine.move_keeper(Direction::Left);
        let saved: String = engine.save_game();

        let reloaded = GameEngine::from_pack(
            pack::parse(saved.as_bytes()).expect("the saved game must parse"),
        );
        assert_eq!(engine.moves_total(), reloaded.moves_total());
        assert_eq!(engine.moves_level(), reloaded.moves_level());
        assert_eq!(engine.map_set_name(), reloaded.map_set_name());
        assert_eq!(
            engine.current_level().unwrap().save_level(),
            reloaded.current_level().unwrap().save_level()
        );
        assert_eq!(saved, reloaded.save_game());
    }

    /// An engine restored from a save reports the saved level index.
    #[test]
    fn test_level_index_from_save() {
        let text = "level index: 1\nLevelName: two\nWWWW\nWCDW\nW SW\nWWWW\n";
        let engine = engine(text);
        assert_eq!(1, engine.level_index());
    }
}
