/*
pack.rs

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

//! Parse the line-oriented text format used for level packs and saved games.
//!
//! The format is a sequence of optional header lines followed by level blocks:
//!
//! ```text
//! moves: 3
//! total moves: 12
//! time: 40
//! total time: 90
//! level index: 1
//! MapSetName: Example Game!
//! LevelName: First steps
//! WWWWW
//! W SCW
//! ...
//! ```
//!
//! A `LevelName:` line starts a new level block; the rows that follow belong to it. A row is
//! accepted only if, once trimmed and upper-cased, it contains at least two wall characters.
//! That filter is a long-standing guard against stray blank and header lines in existing
//! files, and is preserved for compatibility even though it would drop a level row narrower
//! than two walls.
//!
//! Parsing is all-or-nothing: a malformed pack yields a [`LoadError`] and no partial state,
//! so a failed load leaves the previous game untouched.

use std::error::Error;
use std::fmt;
use std::io::BufRead;

use log::debug;

use crate::level::{Level, LevelError};

/// Level pack shipped with the binary, played when no file is given on the command line.
pub const SAMPLE_GAME: &str = include_str!("../data/sample_game.skb");

/// Failure to load a level pack or a saved game.
#[derive(Debug)]
pub enum LoadError {
    /// The stream could not be read.
    Io(std::io::Error),

    /// A header line carries an unparsable integer.
    BadHeader { line: String },

    /// A level block is structurally broken.
    Level { name: String, error: LevelError },

    /// The pack contains no level at all.
    NoLevels,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read the game file: {e}"),
            LoadError::BadHeader { line } => write!(f, "bad header line: {line:?}"),
            LoadError::Level { name, error } => write!(f, "level {name:?}: {error}"),
            LoadError::NoLevels => write!(f, "the game file contains no level"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Level { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Parsed content of a level pack or saved game.
#[derive(Debug)]
pub struct GamePack {
    /// Name of the map set, empty when the file carries none.
    pub map_set_name: String,

    /// The levels, in file order.
    pub levels: Vec<Level>,

    /// Saved cumulative move counter.
    pub moves_total: i32,

    /// Saved per-level move counter.
    pub moves_level: i32,

    /// Saved cumulative play time, in seconds.
    pub time_total: i32,

    /// Saved per-level play time, in seconds.
    pub time_level: i32,

    /// Saved level index, present only in in-progress saves.
    pub level_index: Option<i32>,
}

/// Parse a level pack or saved game from the given reader.
///
/// # Errors
///
/// [`LoadError`] when the stream cannot be read, a header integer does not parse, a level
/// block is empty or ragged, or the file contains no level.
pub fn parse<R: BufRead>(reader: R) -> Result<GamePack, LoadError> {
    let mut pack = GamePack {
        map_set_name: String::new(),
        levels: Vec::new(),
        moves_total: 0,
        moves_level: 0,
        time_total: 0,
        time_level: 0,
        level_index: None,
    };
    let mut rows: Vec<String> = Vec::new();
    let mut level_name: String = String::new();
    let mut parsed_first_level: bool = false;

    for line in reader.lines() {
        let line: String = line?;

        // Header lines. "total moves: " must be tested before "moves: " (and "total time: "
        // before "time: ") because the shorter key is a suffix of the longer one.
        if let Some(value) = line.strip_prefix("total moves: ") {
            pack.moves_total = parse_header_int(&line, value)?;
            continue;
        }
        if let Some(value) = line.strip_prefix("moves: ") {
            pack.moves_level = parse_header_int(&line, value)?;
            continue;
        }
        if let Some(value) = line.strip_prefix("total time: ") {
            pack.time_total = parse_header_int(&line, value)?;
            continue;
        }
        if let Some(value) = line.strip_prefix("time: ") {
            pack.time_level = parse_header_int(&line, value)?;
            continue;
        }
        if let Some(value) = line.strip_prefix("level index: ") {
            pack.level_index = Some(parse_header_int(&line, value)?);
            continue;
        }
        if let Some(value) = line.strip_prefix("MapSetName: ") {
            pack.map_set_name = value.to_string();
            continue;
        }
        if let Some(value) = line.strip_prefix("LevelName: ") {
            if parsed_first_level {
                push_level(&mut pack, &level_name, &rows)?;
                rows.clear();
            } else {
                parsed_first_level = true;
            }
            level_name = value.to_string();
            continue;
        }

        // A level row must contain at least two walls; anything else is noise.
        let row: String = line.trim().to_uppercase();
        if row.matches('W').count() >= 2 {
            rows.push(row);
        }
    }

    // Flush the final block, which has no trailing "LevelName:" line.
    if !rows.is_empty() {
        push_level(&mut pack, &level_name, &rows)?;
    }

    if pack.levels.is_empty() {
        return Err(LoadError::NoLevels);
    }
    debug!(
        "Loaded {} level(s) from map set {:?}",
        pack.levels.len(),
        pack.map_set_name
    );
    Ok(pack)
}

fn parse_header_int(line: &str, value: &str) -> Result<i32, LoadError> {
    value.trim().parse().map_err(|_| LoadError::BadHeader {
        line: line.to_string(),
    })
}

fn push_level(pack: &mut GamePack, name: &str, rows: &[String]) -> Result<(), LoadError> {
    let index: usize = pack.levels.len();
    debug!("Adding level [{index}]: {name}");
    match Level::new(name, index, rows) {
        Ok(level) => {
            pack.levels.push(level);
            Ok(())
        }
        Err(error) => Err(LoadError::Level {
            name: name.to_string(),
            error,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVED_GAME: &str = "moves: 3\n\
        total moves: 12\n\
        time: 40\n\
        total time: 90\n\
        level index: 1\n\
        MapSetName: Example Game!\n\
        LevelName: one\n\
        WWWW\n\
        WCDW\n\
        W SW\n\
        WWWW\n\
        \n\
        LevelName: two\n\
        WWWWW\n\
        W CDW\n\
        W S W\n\
        WWWWW\n";

    /// Headers, the map set name, and both level blocks are consumed.
    #[test]
    fn test_parse_saved_game() {
        let pack = parse(SAVED_GAME.as_bytes()).expect("the saved game must parse");
        assert_eq!("Example Game!", pack.map_set_name);
        assert_eq!(3, pack.moves_level);
        assert_eq!(12, pack.moves_total);
        assert_eq!(40, pack.time_level);
        assert_eq!(90, pack.time_total);
        assert_eq!(Some(1), pack.level_index);
        assert_eq!(2, pack.levels.len());
        assert_eq!("one", pack.levels[0].name());
        assert_eq!("two", pack.levels[1].name());
        assert_eq!("WWWW\nWCDW\nW SW\nWWWW\n", pack.levels[0].save_level());
    }

    /// A fresh pack without headers parses with zeroed counters and no saved index.
    #[test]
    fn test_parse_fresh_pack() {
        let text = "MapSetName: x\nLevelName: only\nWWWW\nWSDW\nWC W\nWWWW\n";
        let pack = parse(text.as_bytes()).expect("the pack must parse");
        assert_eq!(0, pack.moves_total);
        assert_eq!(0, pack.time_total);
        assert_eq!(None, pack.level_index);
        assert_eq!(1, pack.levels.len());
    }

    /// Level rows are upper-cased and trimmed before they reach the level.
    #[test]
    fn test_rows_are_normalized() {
        let text = "LevelName: x\n  wwww  \n  wsdw\n  wc w\n  wwww\n";
        let pack = parse(text.as_bytes()).expect("the pack must parse");
        assert_eq!("WWWW\nWSDW\nWC W\nWWWW\n", pack.levels[0].save_level());
    }

    /// Lines with fewer than two walls are dropped, including blank separators.
    #[test]
    fn test_row_filter_drops_noise() {
        let text = "LevelName: x\n\nstray text\nWWWW\nWSDW\nWC W\nWWWW\n\n";
        let pack = parse(text.as_bytes()).expect("the pack must parse");
        assert_eq!(4, pack.levels[0].save_level().lines().count());
    }

    /// An unparsable header integer fails the whole load.
    #[test]
    fn test_bad_header_is_an_error() {
        let text = "moves: a lot\nLevelName: x\nWWWW\nWSDW\nWWWW\n";
        assert!(matches!(
            parse(text.as_bytes()),
            Err(LoadError::BadHeader { .. })
        ));
    }

    /// A pack without any level block is rejected.
    #[test]
    fn test_no_levels_is_an_error() {
        assert!(matches!(
            parse("MapSetName: x\n".as_bytes()),
            Err(LoadError::NoLevels)
        ));
    }

    /// Ragged level rows fail the whole load.
    #[test]
    fn test_ragged_level_is_an_error() {
        let text = "LevelName: x\nWWWWW\nWS W\nWWWWW\n";
        assert!(matches!(parse(text.as_bytes()), Err(LoadError::Level { .. })));
    }

    /// The built-in sample game parses.
    #[test]
    fn test_sample_game_parses() {
        let pack = parse(SAMPLE_GAME.as_bytes()).expect("the sample game must parse");
        assert_eq!("Example Game!", pack.map_set_name);
        assert!(pack.levels.len() >= 2);
    }
}
