/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play the bundled sample game:
//!
//! ```text
//! $ cratekeeper
//! ```
//!
//! Play a level pack under a chosen player name:
//!
//! ```text
//! $ cratekeeper --name Alice mylevels.skb
//! ```
//!
//! Validate a level pack without playing it:
//!
//! ```text
//! $ cratekeeper --check mylevels.skb
//! mylevels.skb: 12 level(s)
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::pack::GamePack;
use crate::saver::game::SaverGame;

/// Push crates onto diamonds in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Level pack or saved game to play (the bundled sample game when omitted)
    game_file: Option<PathBuf>,

    /// Player name recorded in the high scores
    #[arg(short, long, default_value = "keeper")]
    name: String,

    /// Directory where the high scores are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Validate the game file and exit
    #[arg(short, long, default_value_t = false, requires = "game_file")]
    check: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options retained for the interactive session.
pub struct Options {
    /// Level pack or saved game to play, None for the bundled sample game.
    pub game_file: Option<PathBuf>,

    /// Player name recorded in the high scores.
    pub player_name: String,

    /// Directory where the high scores are stored.
    pub data_dir: PathBuf,
}

/// Parse and process command-line options.
///
/// Return an exit code when the invocation is complete in itself (`--check`), or the
/// [`Options`] object for the interactive session.
pub fn parse() -> (Option<u8>, Options) {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let options = Options {
        game_file: args.game_file,
        player_name: args.name,
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
    };

    //
    // Validate the game file and report, without starting a session
    //
    if args.check {
        let game_file: &PathBuf = options
            .game_file
            .as_ref()
            .expect("clap enforces the game file with --check");
        return match SaverGame::new(game_file).load() {
            Ok(pack) => {
                let GamePack {
                    map_set_name,
                    levels,
                    ..
                } = pack;
                if map_set_name.is_empty() {
                    println!("{}: {} level(s)", game_file.display(), levels.len());
                } else {
                    println!(
                        "{}: {map_set_name}: {} level(s)",
                        game_file.display(),
                        levels.len()
                    );
                }
                (Some(0), options)
            }
            Err(error) => {
                eprintln!("{}: {error}", game_file.display());
                (Some(1), options)
            }
        };
    }

    (None, options)
}

/// Return the default directory for the high scores file.
///
/// The XDG data directory when available, otherwise the current directory.
fn default_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("XDG_DATA_HOME") {
        if !dir.is_empty() {
            let mut path = PathBuf::from(dir);
            path.push("cratekeeper");
            return path;
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            let mut path = PathBuf::from(home);
            path.push(".local");
            path.push("share");
            path.push("cratekeeper");
            return path;
        }
    }
    PathBuf::from(".")
}
