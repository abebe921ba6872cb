/*
main.rs

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

mod cli_options;
mod engine;
mod game_object;
mod grid;
mod highscores;
mod level;
mod pack;
mod saver;
mod session;

use std::process::ExitCode;

use self::session::Session;

fn main() -> ExitCode {
    // Parse the command-line options. Some invocations, such as --check, are complete in
    // themselves and return an exit code.
    let (ret, options) = cli_options::parse();
    if let Some(ret) = ret {
        return ExitCode::from(ret);
    }

    let mut session: Session = match Session::new(options) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("Cannot start the game: {error}");
            return ExitCode::FAILURE;
        }
    };
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
