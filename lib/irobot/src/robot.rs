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

//! The simulated robot.

use crate::board::Board;
use crate::command::Command;
use crate::config::{BoundaryPolicy, RobotConfig};
use crate::direction::{Direction, Position};
use crate::error::RobotError;
use crate::Environment;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What the robot senses about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotPercept {
    /// Current cell.
    pub position: Position,

    /// Current heading.
    pub direction: Direction,

    /// Whether the robot is on.
    pub powered: bool,

    /// Whether the current cell is cleaned, `None` when the robot is off the board.
    pub cell: Option<bool>,
}

/// The robot and the board it cleans.
///
/// Starts switched off at (0, 0) facing right, with nothing cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IRobot {
    config: RobotConfig,
    board: Board,
    position: Position,
    direction: Direction,
    powered: bool,
}

impl IRobot {
    /// Create a robot on an empty board sized by `config`.
    pub fn new(config: RobotConfig) -> Result<Self, RobotError> {
        let board = Board::new(config.rows, config.cols)?;
        Ok(Self {
            config,
            board,
            position: Position::default(),
            direction: Direction::Right,
            powered: false,
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration the robot was built with.
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the robot is on.
    pub fn is_on(&self) -> bool {
        self.powered
    }

    /// Whether `name` is a direction word this robot understands.
    pub fn is_valid_direction_name(&self, name: &str) -> bool {
        self.config.is_valid_direction_name(name)
    }

    /// Face the direction called `name`.
    pub fn change_direction(&mut self, name: &str) -> Result<(), RobotError> {
        let direction = self
            .config
            .direction(name)
            .ok_or_else(|| RobotError::UnknownDirection(name.to_string()))?;
        self.turn_to(direction);
        Ok(())
    }

    /// Face `direction`. Only later moves are affected.
    pub fn turn_to(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Switch the robot on or off.
    pub fn set_power(&mut self, on: bool) {
        self.powered = on;
    }

    /// Clean the 3x3 block around the robot, clipped to the board. Does nothing while off.
    pub fn stretch(&mut self) {
        for cell in self.position.neighbourhood() {
            self.board.clean_if(cell, self.powered);
        }
    }

    /// Move `count` steps in the current direction, cleaning each cell moved onto while on.
    ///
    /// What happens at the board edge depends on [`RobotConfig::boundary`].
    pub fn advance(&mut self, count: u64) -> Result<(), RobotError> {
        match self.config.boundary {
            BoundaryPolicy::Clamp => self.advance_clamped(count),
            BoundaryPolicy::Reject => self.advance_rejecting(count)?,
            BoundaryPolicy::Skip => self.advance_skipping(count),
        }
        Ok(())
    }

    fn step_to(&mut self, position: Position) {
        self.position = position;
        self.board.clean_if(position, self.powered);
    }

    // Terminates within rows + cols iterations whatever `count` is.
    fn advance_clamped(&mut self, count: u64) {
        for _ in 0..count {
            let next = self.position.offset(self.direction, 1);
            if !self.board.contains(next) {
                break;
            }
            self.step_to(next);
        }
    }

    fn advance_rejecting(&mut self, count: u64) -> Result<(), RobotError> {
        for _ in 0..count {
            let next = self.position.offset(self.direction, 1);
            if !self.board.contains(next) {
                warn!(row = next.row, col = next.col, "move rejected at board edge");
                return Err(RobotError::OutOfBounds {
                    row: next.row,
                    col: next.col,
                });
            }
            self.step_to(next);
        }
        Ok(())
    }

    // Off-board stretches are crossed in one jump.
    fn advance_skipping(&mut self, count: u64) {
        let mut remaining = count;
        while remaining > 0 {
            if self.board.contains(self.position) {
                let next = self.position.offset(self.direction, 1);
                self.step_to(next);
                remaining -= 1;
                continue;
            }
            match self.board.entry_distance(self.position, self.direction) {
                Some(steps) if steps > 0 && steps <= remaining => {
                    let next = self.position.offset(self.direction, steps);
                    self.step_to(next);
                    remaining -= steps;
                    if !self.board.contains(next) {
                        break;
                    }
                }
                _ => {
                    self.position = self.position.offset(self.direction, remaining);
                    remaining = 0;
                }
            }
        }
    }

    /// The board as text, `X` for cleaned cells and `.` for the rest.
    pub fn render(&self) -> String {
        self.board.to_string()
    }

    /// Apply one command. Unknown commands are logged and skipped.
    pub fn execute(&mut self, command: &Command) -> Result<(), RobotError> {
        debug!(%command, position = %self.position, "executing command");
        match command {
            Command::MoveBy(count) => self.advance(*count)?,
            Command::TurnTo(direction) => self.turn_to(*direction),
            Command::SetPower(on) => self.set_power(*on),
            Command::Clean => self.stretch(),
            Command::Unknown(token) => warn!(%token, "unknown command, ignoring"),
        }
        Ok(())
    }
}

impl Environment for IRobot {
    type Action = Command;
    type Percept = RobotPercept;
    type Score = usize;
    type Error = RobotError;

    fn percept(&self) -> Self::Percept {
        RobotPercept {
            position: self.position,
            direction: self.direction,
            powered: self.powered,
            cell: self.board.is_cleaned(self.position),
        }
    }

    fn execute_action(&mut self, action: &Self::Action) -> Result<(), Self::Error> {
        self.execute(action)
    }

    fn score(&self) -> Self::Score {
        self.board.cleaned_count()
    }
}
