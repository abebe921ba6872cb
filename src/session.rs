/*
session.rs

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

//! Interactive terminal session.
//!
//! The session reads one command per line from standard input, drives the [`GameEngine`]
//! object, and renders the current level after each change. Play time is accounted by
//! advancing the engine clock once per elapsed wall-clock second before every command.
//!
//! When the player completes a level or the game, the session records the score on the
//! matching scoreboard and saves the high scores to disk.

use chrono::{DateTime, Local};
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::cli_options::Options;
use crate::engine::{Direction, GameEngine};
use crate::highscores::{HighScores, Score};
use crate::pack::{self, GamePack};
use crate::saver::game::SaverGame;
use crate::saver::highscores::SaverHighScores;

/// Interactive terminal session around one [`GameEngine`] object.
pub struct Session {
    engine: GameEngine,
    highscores: HighScores,
    scores_saver: SaverHighScores,

    /// Player name recorded in the high scores.
    player_name: String,

    /// Wall-clock reference for the engine clock.
    last_tick: Instant,
}

impl Session {
    /// Create a [`Session`] object from the command-line options.
    ///
    /// The game file from the options is loaded, or the bundled sample game when no file was
    /// given. The high scores are restored from the data directory.
    pub fn new(options: Options) -> Result<Self, Box<dyn Error>> {
        let game_pack: GamePack = match &options.game_file {
            Some(path) => SaverGame::new(path).load()?,
            None => pack::parse(pack::SAMPLE_GAME.as_bytes())?,
        };
        let scores_saver = SaverHighScores::new(options.data_dir);
        let highscores: HighScores = scores_saver.get_highscores()?.unwrap_or_default();

        Ok(Self {
            engine: GameEngine::from_pack(game_pack),
            highscores,
            scores_saver,
            player_name: options.player_name,
            last_tick: Instant::now(),
        })
    }

    /// Run the command loop until the player quits or standard input closes.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        println!("Cratekeeper - {}", self.engine.map_set_name());
        println!("Type \"help\" for the list of commands.");
        self.render();

        let stdin = io::stdin();
        let mut prompt = || -> io::Result<()> {
            print!("> ");
            io::stdout().flush()
        };
        prompt()?;

        for line in stdin.lock().lines() {
            let line: String = line?;
            self.account_time();

            let mut words = line.split_whitespace();
            let command: &str = words.next().unwrap_or("");
            let argument: Option<&str> = words.next();

            match command {
                "" => {}
                "w" | "up" => self.step(Direction::Up),
                "s" | "down" => self.step(Direction::Down),
                "a" | "left" => self.step(Direction::Left),
                "d" | "right" => self.step(Direction::Right),
                "u" | "undo" => {
                    if self.engine.undo() {
                        self.render();
                    } else {
                        println!("Nothing to undo.");
                    }
                }
                "r" | "reset" => {
                    self.engine.reset_level();
                    self.render();
                }
                "n" | "next" => {
                    if self.engine.is_level_complete() {
                        self.engine.advance_after_level_dialog();
                        self.render();
                    } else {
                        println!("The level is not complete yet.");
                    }
                }
                "save" => match argument {
                    Some(path) => self.save(Path::new(path)),
                    None => println!("Usage: save <file>"),
                },
                "load" => match argument {
                    Some(path) => self.load(Path::new(path)),
                    None => println!("Usage: load <file>"),
                },
                "scores" => self.print_scores(),
                "debug" => {
                    self.engine.toggle_debug();
                    println!(
                        "Debug messages {}.",
                        if self.engine.is_debug_active() {
                            "enabled"
                        } else {
                            "disabled"
                        }
                    );
                }
                "h" | "help" | "?" => print_help(),
                "q" | "quit" => break,
                other => println!("Unknown command {other:?}. Type \"help\" for the list."),
            }
            prompt()?;
        }
        println!();
        Ok(())
    }

    /// Advance the engine clock by the wall-clock seconds elapsed since the last call.
    ///
    /// The sub-second remainder stays in the reference so that no time is lost between
    /// commands.
    fn account_time(&mut self) {
        let elapsed: u64 = self.last_tick.elapsed().as_secs();
        for _ in 0..elapsed {
            self.engine.tick();
        }
        self.last_tick += Duration::from_secs(elapsed);
    }

    /// Move the keeper and handle a resulting level or game completion.
    fn step(&mut self, direction: Direction) {
        if self.engine.is_level_complete() {
            println!("The level is complete. Type \"next\" to continue.");
            return;
        }
        self.engine.move_keeper(direction);
        if self.engine.is_level_complete() {
            self.record_scores();
        } else {
            self.render();
        }
    }

    /// Record the level score, and the game score on game completion, then save the high
    /// scores to disk.
    fn record_scores(&mut self) {
        let map_set_name: String = self.engine.map_set_name().to_string();
        let level_index: i32 = self.engine.level_index();
        let time: i32 = self.engine.time_level();
        let moves: i32 = self.engine.moves_level();

        println!("Level complete! {moves} move(s) in {time}s.");
        let position: Option<usize> = self.highscores.add_level_score(
            &map_set_name,
            level_index,
            &self.player_name,
            time,
            moves,
        );
        if let Some(position) = position {
            println!("New high score: position {position} on the level scoreboard.");
        }

        if self.engine.is_game_complete() {
            let game_time: i32 = self.engine.time_total() + self.engine.time_level();
            let game_moves: i32 = self.engine.moves_total();
            println!(
                "Game complete! {game_moves} move(s) in {game_time}s over {} level(s).",
                self.engine.level_count()
            );
            let position: Option<usize> = self.highscores.add_game_score(
                &map_set_name,
                &self.player_name,
                game_time,
                game_moves,
            );
            if let Some(position) = position {
                println!("New high score: position {position} on the game scoreboard.");
            }
        } else {
            println!("Type \"next\" to continue with the next level.");
        }

        if let Err(error) = self.scores_saver.save_highscores(&self.highscores) {
            eprintln!("Cannot save the high scores: {error}");
        }
    }

    /// Save the game in progress to the given file.
    fn save(&self, path: &Path) {
        match SaverGame::new(path).save(&self.engine) {
            Ok(()) => println!("Game saved to {}.", path.display()),
            Err(error) => eprintln!("Cannot save the game: {error}"),
        }
    }

    /// Replace the engine with the content of the given file.
    ///
    /// A file that does not load leaves the game in progress untouched.
    fn load(&mut self, path: &Path) {
        match SaverGame::new(path).load() {
            Ok(game_pack) => {
                self.engine = GameEngine::from_pack(game_pack);
                self.last_tick = Instant::now();
                println!("Game loaded from {}.", path.display());
                self.render();
            }
            Err(error) => eprintln!("Cannot load the game: {error}"),
        }
    }

    /// Render the current level and the counters.
    fn render(&self) {
        match self.engine.current_level() {
            Some(level) => {
                println!();
                println!(
                    "Level {} of {}: {}",
                    self.engine.level_index() + 1,
                    self.engine.level_count(),
                    level.name()
                );
                print!("{}", level.save_level());
                println!(
                    "Moves: {} (total {})  Time: {}s",
                    self.engine.moves_level(),
                    self.engine.moves_total(),
                    self.engine.time_level()
                );
                debug!("Keeper at {:?}, facing {:?}", level.keeper_position(), self.engine.facing());
            }
            None => println!("The game is complete. Type \"quit\" to exit or \"load\" to play again."),
        }
    }

    /// Print the scoreboards of the current level and of the full game.
    fn print_scores(&self) {
        let map_set_name: &str = self.engine.map_set_name();
        let mut printed: bool = false;

        if let Some(level) = self.engine.current_level() {
            if let Some(board) =
                self.highscores.get_level_scores(map_set_name, level.index() as i32)
            {
                print_board(&format!("Level {}: {}", level.index() + 1, level.name()), board);
                printed = true;
            }
        }
        if let Some(board) = self.highscores.get_game_scores(map_set_name) {
            print_board("Full game", board);
            printed = true;
        }
        if !printed {
            println!("No high scores yet.");
        }
    }
}

/// Print one scoreboard.
fn print_board(title: &str, board: &[Score]) {
    println!("{title}:");
    for (i, score) in board.iter().enumerate() {
        let when: DateTime<Local> = score.when.into();
        println!(
            "{:>2}. {:<20} {:>5}s {:>5} move(s)  {}",
            i + 1,
            score.player,
            score.time,
            score.moves,
            when.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Print the list of commands.
fn print_help() {
    println!(
        "\
Commands:
  w, a, s, d          move the keeper (also: up, left, down, right)
  u, undo             undo the last move
  r, reset            restart the current level
  n, next             continue after completing a level
  save <file>         save the game in progress
  load <file>         load a level pack or a saved game
  scores              show the high scores
  debug               toggle debug messages
  h, help, ?          show this help
  q, quit             exit"
    );
}
