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

//! Robot errors.

use thiserror::Error;

/// Errors raised by the robot model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// The name is not in the direction table.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// A step would have moved the robot off the board.
    #[error("move out of bounds to ({row}, {col})")]
    OutOfBounds {
        /// Row of the rejected cell.
        row: i64,
        /// Column of the rejected cell.
        col: i64,
    },
}
