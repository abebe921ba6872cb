/*
highscores.rs

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

//! Manage high scores for the levels and the full game.
//!
//! The main object, [`HighScores`], maintains one scoreboard per level of a map set, plus one
//! for the whole game. This object is saved when the player completes a level and makes it to
//! a scoreboard, and is restored when Cratekeeper starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`]
//! object.

use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represents a score.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Score {
    /// Name of the player.
    pub player: String,

    /// How long it took to complete the level or the game, in seconds.
    pub time: i32,

    /// Number of keeper moves.
    pub moves: i32,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for one level or for the full game.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct ScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl ScoreBoard {
    /// Create a [`ScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Return whether the candidate beats the given score.
    ///
    /// A shorter time wins; on equal times, fewer moves win.
    fn beats(time: i32, moves: i32, score: &Score) -> bool {
        time < score.time || (time == score.time && moves < score.moves)
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, player: &str, time: i32, moves: i32) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score into the temporary board
            if Self::beats(time, moves, score) && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    player: player.to_string(),
                    time,
                    moves,
                    when: SystemTime::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(score.clone());
            i += 1;
        }
        // If the board is not full and the new score has not been added yet, then add the new
        // score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                player: player.to_string(),
                time,
                moves,
                when: SystemTime::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }
}

/// List of the scoreboards for the map sets.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Map of the [`ScoreBoard`] scoreboards indexed by map set and level.
    ///
    /// The index is a string in the format "<map_set_name>@@<board_name>", where the board
    /// name is "level <index>" or "game".
    board: HashMap<String, ScoreBoard>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(&self, map_set_name: &str, board_name: &str) -> String {
        format!("{map_set_name}@@{board_name}")
    }

    /// Add a score to the scoreboard of the given level and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_level_score(
        &mut self,
        map_set_name: &str,
        level_index: i32,
        player: &str,
        time: i32,
        moves: i32,
    ) -> Option<usize> {
        self.add_score(
            map_set_name,
            &format!("level {level_index}"),
            player,
            time,
            moves,
        )
    }

    /// Add a score to the full-game scoreboard of the given map set and return the position
    /// in the scoreboard, or None if the score does not make it to the board.
    pub fn add_game_score(
        &mut self,
        map_set_name: &str,
        player: &str,
        time: i32,
        moves: i32,
    ) -> Option<usize> {
        self.add_score(map_set_name, "game", player, time, moves)
    }

    fn add_score(
        &mut self,
        map_set_name: &str,
        board_name: &str,
        player: &str,
        time: i32,
        moves: i32,
    ) -> Option<usize> {
        let key: String = self.build_key(map_set_name, board_name);
        let scoreboard: &mut ScoreBoard = self.board.entry(key).or_insert(ScoreBoard::new());

        scoreboard.add_score(player, time, moves)
    }

    /// Return the list of [`Score`] for the given level.
    ///
    /// Return None when the scoreboard does not exist.
    pub fn get_level_scores(&self, map_set_name: &str, level_index: i32) -> Option<&Vec<Score>> {
        self.get_scores(map_set_name, &format!("level {level_index}"))
    }

    /// Return the list of [`Score`] for the full game.
    ///
    /// Return None when the scoreboard does not exist.
    pub fn get_game_scores(&self, map_set_name: &str) -> Option<&Vec<Score>> {
        self.get_scores(map_set_name, "game")
    }

    fn get_scores(&self, map_set_name: &str, board_name: &str) -> Option<&Vec<Score>> {
        let key: String = self.build_key(map_set_name, board_name);

        match self.board.get(&key) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return whether the list of scoreboards is empty (no scoreboard for any level)
    pub fn is_empty(&self) -> bool {
        self.board.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The first score lands in the top position of a fresh board.
    #[test]
    fn test_first_score_ranks_first() {
        let mut scores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(
            Some(1),
            scores.add_level_score("Example Game!", 0, "keeper", 40, 12)
        );
        assert!(!scores.is_empty());
        let board = scores
            .get_level_scores("Example Game!", 0)
            .expect("the board must exist");
        assert_eq!(1, board.len());
        assert_eq!("keeper", board[0].player);
    }

    /// A shorter time beats a longer one; an equal time with fewer moves also wins.
    #[test]
    fn test_score_ordering() {
        let mut scores = HighScores::new();
        scores.add_level_score("x", 0, "slow", 60, 10);
        assert_eq!(Some(1), scores.add_level_score("x", 0, "fast", 30, 20));
        assert_eq!(Some(1), scores.add_level_score("x", 0, "lean", 30, 15));
        let board = scores.get_level_scores("x", 0).expect("the board must exist");
        assert_eq!(
            vec!["lean", "fast", "slow"],
            board.iter().map(|s| s.player.as_str()).collect::<Vec<&str>>()
        );
    }

    /// The board keeps at most ten entries; an eleventh worse score does not make it.
    #[test]
    fn test_board_is_capped() {
        let mut scores = HighScores::new();
        for time in 1..=10 {
            assert!(scores.add_level_score("x", 0, "p", time, 1).is_some());
        }
        assert_eq!(None, scores.add_level_score("x", 0, "p", 99, 1));
        assert_eq!(Some(1), scores.add_level_score("x", 0, "p", 0, 1));
        let board = scores.get_level_scores("x", 0).expect("the board must exist");
        assert_eq!(10, board.len());
        assert_eq!(0, board[0].time);
    }

    /// Level boards and the game board of one map set do not interfere.
    #[test]
    fn test_boards_are_independent() {
        let mut scores = HighScores::new();
        scores.add_level_score("x", 0, "a", 10, 1);
        scores.add_level_score("x", 1, "b", 20, 2);
        scores.add_game_score("x", "c", 30, 3);
        assert_eq!(1, scores.get_level_scores("x", 0).unwrap().len());
        assert_eq!(1, scores.get_level_scores("x", 1).unwrap().len());
        assert_eq!(1, scores.get_game_scores("x").unwrap().len());
        assert!(scores.get_level_scores("y", 0).is_none());
    }
}
