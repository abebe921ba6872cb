/*
game_object.rs

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

//! Tile vocabulary of the game.
//!
//! Each tile kind maps to a unique display character, which is also the character used in the
//! level pack and save file format.
//! Parsing is total: unrecognized characters become walls, so a level row can never fail to
//! classify.

/// The tile kinds that can occupy a cell of a level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameObject {
    Wall,
    Floor,
    Crate,
    Diamond,
    Keeper,
    CrateOnDiamond,
    KeeperOnDiamond,
    DebugMarker,
}

impl GameObject {
    /// Return the [`GameObject`] whose symbol matches the given character.
    ///
    /// Matching is case-insensitive. Characters that match no symbol yield
    /// [`GameObject::Wall`].
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'W' => GameObject::Wall,
            ' ' => GameObject::Floor,
            'C' => GameObject::Crate,
            'D' => GameObject::Diamond,
            'S' => GameObject::Keeper,
            'O' => GameObject::CrateOnDiamond,
            'K' => GameObject::KeeperOnDiamond,
            '=' => GameObject::DebugMarker,
            _ => GameObject::Wall,
        }
    }

    /// Return the display symbol of the tile.
    pub fn to_char(self) -> char {
        match self {
            GameObject::Wall => 'W',
            GameObject::Floor => ' ',
            GameObject::Crate => 'C',
            GameObject::Diamond => 'D',
            GameObject::Keeper => 'S',
            GameObject::CrateOnDiamond => 'O',
            GameObject::KeeperOnDiamond => 'K',
            GameObject::DebugMarker => '=',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [GameObject; 8] = [
        GameObject::Wall,
        GameObject::Floor,
        GameObject::Crate,
        GameObject::Diamond,
        GameObject::Keeper,
        GameObject::CrateOnDiamond,
        GameObject::KeeperOnDiamond,
        GameObject::DebugMarker,
    ];

    /// Every tile survives a symbol round trip.
    #[test]
    fn test_char_round_trip() {
        for tile in ALL {
            assert_eq!(tile, GameObject::from_char(tile.to_char()));
        }
    }

    /// Symbols are unique across the tile set.
    #[test]
    fn test_symbols_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.to_char(), b.to_char());
            }
        }
    }

    /// Lowercase symbols classify like their uppercase form.
    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(GameObject::Keeper, GameObject::from_char('s'));
        assert_eq!(GameObject::Crate, GameObject::from_char('c'));
        assert_eq!(GameObject::KeeperOnDiamond, GameObject::from_char('k'));
    }

    /// Unknown characters default to walls so parsing never fails.
    #[test]
    fn test_unknown_char_is_a_wall() {
        assert_eq!(GameObject::Wall, GameObject::from_char('#'));
        assert_eq!(GameObject::Wall, GameObject::from_char('7'));
        assert_eq!(GameObject::Wall, GameObject::from_char('\t'));
    }
}
