/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Headings and coordinates.

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions the robot can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,

    /// Towards the last row.
    Down,

    /// Towards column 0.
    Left,

    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in the order their names are listed to users.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector as (row delta, column delta).
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Lower-case command word for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A cell coordinate. Signed, because a robot that is allowed to wander off the board keeps
/// tracking where it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, 0 is the top.
    pub row: i64,

    /// Column, 0 is the left.
    pub col: i64,
}

impl Position {
    /// Create a new position.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Position after `steps` unit moves towards `direction`. Saturates instead of overflowing.
    pub fn offset(self, direction: Direction, steps: u64) -> Self {
        let steps = i64::try_from(steps).unwrap_or(i64::MAX);
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row.saturating_add(d_row.saturating_mul(steps)),
            col: self.col.saturating_add(d_col.saturating_mul(steps)),
        }
    }

    /// The 3x3 block centred on this position, centre first. Not clipped to any board.
    pub fn neighbourhood(self) -> impl Iterator<Item = Position> {
        [0, -1, 1].into_iter().flat_map(move |d_row| {
            [0, -1, 1].into_iter().map(move |d_col| {
                Position::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
            })
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
