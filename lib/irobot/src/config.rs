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

//! Board size, direction words, and edge behaviour.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of rows on the board.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns on the board.
pub const DEFAULT_COLS: usize = 5;

/// What to do when a step would take the robot off the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Stop at the edge. Steps that would leave the board do nothing.
    #[default]
    Clamp,

    /// Fail with [`crate::RobotError::OutOfBounds`] and stay on the last valid cell.
    Reject,

    /// Keep moving off the board, but never clean anything outside it.
    Skip,
}

/// Robot configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Board rows.
    pub rows: usize,

    /// Board columns.
    pub cols: usize,

    /// Command words recognised as directions.
    pub directions: BTreeMap<String, Direction>,

    /// Movement policy at the board edge.
    pub boundary: BoundaryPolicy,
}

impl RobotConfig {
    /// Create a config with the standard direction words.
    pub fn new(rows: usize, cols: usize, boundary: BoundaryPolicy) -> Self {
        let directions = Direction::ALL
            .iter()
            .map(|&direction| (direction.name().to_string(), direction))
            .collect();
        Self {
            rows,
            cols,
            directions,
            boundary,
        }
    }

    /// Look up a direction word.
    pub fn direction(&self, name: &str) -> Option<Direction> {
        self.directions.get(name).copied()
    }

    /// Whether `name` is a recognised direction word.
    pub fn is_valid_direction_name(&self, name: &str) -> bool {
        self.directions.contains_key(name)
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, BoundaryPolicy::default())
    }
}
