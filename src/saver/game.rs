/*
game.rs

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

//! Load level packs and save the game in progress.
//!
//! Both directions use the same line-oriented text format, parsed by the [`crate::pack`]
//! module and produced by [`GameEngine::save_game`], so a file written here can be given back
//! on the command line or loaded from the prompt.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::engine::GameEngine;
use crate::pack::{self, GamePack};

/// Object to load level packs and save the game in progress.
pub struct SaverGame {
    /// Path to the game file.
    game_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object for the given game file.
    pub fn new(game_file: &Path) -> Self {
        debug!("Game file: {game_file:?}");
        SaverGame {
            game_file: game_file.to_path_buf(),
        }
    }

    /// Parse the game file into a [`GamePack`] object.
    pub fn load(&self) -> Result<GamePack, Box<dyn Error>> {
        let file: File = File::open(&self.game_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let pack: GamePack = pack::parse(reader)?;
        Ok(pack)
    }

    /// Save the state of the provided [`GameEngine`] object to the game file.
    pub fn save(&self, engine: &GameEngine) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.game_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(engine.save_game().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
