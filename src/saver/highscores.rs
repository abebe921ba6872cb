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

//! Save and restore the high scores.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::highscores::HighScores;

/// Object to save and restore the high scores.
pub struct SaverHighScores {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high scores must be
    /// saved. The directory is created if it does not exist.
    pub fn new(mut data_dir: PathBuf) -> Self {
        if let Err(error) = fs::create_dir_all(&data_dir) {
            debug!("Cannot create the data directory {data_dir:?}: {error}");
        }
        data_dir.push("highscores.json");
        debug!("High scores file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`HighScores`] object from the high scores file.
    ///
    /// Return the [`HighScores`] object or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(Some(highscores))
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the high scores file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("cratekeeper-test-{name}-{}", std::process::id()));
        path
    }

    /// A missing high scores file restores as None, not as an error.
    #[test]
    fn test_missing_file_is_none() {
        let saver = SaverHighScores::new(temp_dir("scores-missing"));
        saver.delete_save();
        assert!(
            saver
                .get_highscores()
                .expect("a missing file is not an error")
                .is_none()
        );
    }

    /// Saved high scores restore with their boards intact.
    #[test]
    fn test_save_then_restore() {
        let dir: PathBuf = temp_dir("scores-roundtrip");
        let saver = SaverHighScores::new(dir.clone());

        let mut scores = HighScores::new();
        scores.add_level_score("x", 0, "keeper", 40, 12);
        saver.save_highscores(&scores).expect("the save must succeed");

        let restored: HighScores = saver
            .get_highscores()
            .expect("the restore must succeed")
            .expect("the file must exist");
        let board = restored
            .get_level_scores("x", 0)
            .expect("the board must exist");
        assert_eq!(1, board.len());
        assert_eq!("keeper", board[0].player);
        assert_eq!(40, board[0].time);

        saver.delete_save();
        let _ = fs::remove_dir(&dir);
    }
}
