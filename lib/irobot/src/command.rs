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

//! Instruction tokens and their parsed form.

use crate::config::RobotConfig;
use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// A single parsed instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Advance this many steps in the current direction.
    MoveBy(u64),

    /// Face a new direction.
    TurnTo(Direction),

    /// Switch the robot on or off.
    SetPower(bool),

    /// Clean the 3x3 block around the robot.
    Clean,

    /// Anything else. Carries the offending token.
    Unknown(String),
}

impl Command {
    /// Parse one token. Matching is case-insensitive.
    ///
    /// Digit-only tokens move the robot, then direction words, then `on`/`off`, then `stretch`.
    /// A step count too large for `u64` saturates.
    pub fn parse(token: &str, config: &RobotConfig) -> Self {
        let token = token.to_lowercase();
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return Command::MoveBy(token.parse().unwrap_or(u64::MAX));
        }
        if let Some(direction) = config.direction(&token) {
            return Command::TurnTo(direction);
        }
        match token.as_str() {
            "on" => Command::SetPower(true),
            "off" => Command::SetPower(false),
            "stretch" => Command::Clean,
            _ => Command::Unknown(token),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::MoveBy(count) => write!(f, "{}", count),
            Command::TurnTo(direction) => write!(f, "{}", direction),
            Command::SetPower(true) => write!(f, "on"),
            Command::SetPower(false) => write!(f, "off"),
            Command::Clean => write!(f, "stretch"),
            Command::Unknown(token) => write!(f, "{}", token),
        }
    }
}

/// Split a line of instructions on whitespace and parse every token, in order.
pub fn parse_instructions(line: &str, config: &RobotConfig) -> Vec<Command> {
    line.split_whitespace()
        .map(|token| Command::parse(token, config))
        .collect()
}
