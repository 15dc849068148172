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

//! Running a line of instructions against a fresh robot.

use crate::command::{parse_instructions, Command};
use crate::config::RobotConfig;
use crate::direction::{Direction, Position};
use crate::error::RobotError;
use crate::robot::{IRobot, RobotPercept};
use crate::{Agent, Simulation};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Agent that replays a fixed list of commands, ignoring what it perceives.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Command>,
}

impl ScriptedAgent {
    /// Create an agent that will issue `commands` in order.
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            script: commands.into(),
        }
    }

    /// Commands not issued yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Agent for ScriptedAgent {
    type Action = Command;
    type Percept = RobotPercept;

    fn act(&mut self, _percept: &Self::Percept) -> Option<Self::Action> {
        self.script.pop_front()
    }
}

/// Final state of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Rendered board, one string per row.
    pub board: Vec<String>,

    /// Number of cleaned cells.
    pub cleaned: usize,

    /// Where the robot ended up.
    pub position: Position,

    /// Final heading.
    pub direction: Direction,

    /// Final power state.
    pub powered: bool,

    /// Unknown tokens, in the order they were met.
    pub ignored: Vec<String>,
}

impl RunReport {
    fn new(robot: &IRobot, ignored: Vec<String>) -> Self {
        Self {
            board: robot.board().rows_text(),
            cleaned: robot.board().cleaned_count(),
            position: robot.position(),
            direction: robot.direction(),
            powered: robot.is_on(),
            ignored,
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board.join("\n"))
    }
}

/// Runs instruction lines, each against a freshly built robot.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: RobotConfig,
}

impl Interpreter {
    /// Create an interpreter whose robots use `config`.
    pub fn new(config: RobotConfig) -> Self {
        Self { config }
    }

    /// Run every instruction in `line`, left to right.
    ///
    /// `on_unknown` is called with each unrecognised token as soon as it is reached; the run then
    /// carries on. An error stops the run at the failing command.
    pub fn run<F>(&self, line: &str, mut on_unknown: F) -> Result<RunReport, RobotError>
    where
        F: FnMut(&str),
    {
        let commands = parse_instructions(line, &self.config);
        let max_steps = commands.len();
        let robot = IRobot::new(self.config.clone())?;
        let mut simulation = Simulation::new(robot, ScriptedAgent::new(commands), max_steps);

        let mut ignored = Vec::new();
        while let Some(command) = simulation.step()? {
            if let Command::Unknown(token) = command {
                on_unknown(&token);
                ignored.push(token);
            }
        }

        Ok(RunReport::new(simulation.environment(), ignored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;

    fn run(line: &str) -> (RunReport, Vec<String>) {
        let mut seen = Vec::new();
        let report = Interpreter::default()
            .run(line, |token| seen.push(token.to_string()))
            .expect("run failed");
        (report, seen)
    }

    #[test]
    fn test_scripted_agent_replays_in_order() {
        let mut agent = ScriptedAgent::new(vec![Command::Clean, Command::MoveBy(1)]);
        let percept = RobotPercept {
            position: Position::default(),
            direction: Direction::Right,
            powered: false,
            cell: Some(false),
        };
        assert_eq!(agent.remaining(), 2);
        assert_eq!(agent.act(&percept), Some(Command::Clean));
        assert_eq!(agent.act(&percept), Some(Command::MoveBy(1)));
        assert_eq!(agent.act(&percept), None);
        assert_eq!(agent.remaining(), 0);
    }

    #[test]
    fn test_on_right_two_stretch() {
        let (report, seen) = run("on right 2 stretch");
        assert_eq!(
            report.board,
            vec![".XXX.", ".XXX.", ".....", ".....", "....."]
        );
        assert_eq!(report.cleaned, 6);
        assert_eq!(report.position, Position::new(0, 2));
        assert_eq!(report.direction, Direction::Right);
        assert!(report.powered);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_input_is_case_insensitive() {
        let (upper, _) = run("ON Right 2 STRETCH");
        let (lower, _) = run("on right 2 stretch");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_unknown_tokens_are_reported_in_order() {
        let (report, seen) = run("North 3 jump on");
        assert_eq!(seen, vec!["north", "jump"]);
        assert_eq!(report.ignored, seen);
        assert_eq!(report.position, Position::new(0, 3));
        assert_eq!(report.cleaned, 0);
        assert!(report.powered);
    }

    #[test]
    fn test_empty_line_renders_clean_board() {
        let (report, seen) = run("");
        assert!(seen.is_empty());
        assert_eq!(report.to_string(), ".....\n.....\n.....\n.....\n.....");
    }

    #[test]
    fn test_reject_policy_stops_the_run() {
        let interpreter = Interpreter::new(RobotConfig::new(5, 5, BoundaryPolicy::Reject));
        let mut seen = Vec::new();
        let result = interpreter.run("oops 9 later", |token| seen.push(token.to_string()));
        assert_eq!(result, Err(RobotError::OutOfBounds { row: 0, col: 5 }));
        assert_eq!(seen, vec!["oops"]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let interpreter = Interpreter::new(RobotConfig::new(3, 0, BoundaryPolicy::Clamp));
        assert_eq!(
            interpreter.run("on", |_| {}),
            Err(RobotError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_other_board_sizes() {
        let interpreter = Interpreter::new(RobotConfig::new(2, 3, BoundaryPolicy::Clamp));
        let report = interpreter.run("on 9 down 9", |_| {}).expect("run failed");
        assert_eq!(report.to_string(), ".XX\n..X");
        assert_eq!(report.position, Position::new(1, 2));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let (report, _) = run("on 1 bogus");
        let json = serde_json::to_value(&report).expect("serialize failed");
        assert_eq!(json["cleaned"], 1);
        assert_eq!(json["direction"], "right");
        assert_eq!(json["position"]["col"], 1);
        assert_eq!(json["ignored"][0], "bogus");
        assert_eq!(json["board"][0], ".X...");
    }
}
