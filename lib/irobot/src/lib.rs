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

#![warn(missing_docs)]

//! IRobot, a grid-cleaning robot simulator.
//!
//! The robot lives on a fixed-size board, faces one of four directions, and can be switched on
//! or off. While on, every cell it moves onto is cleaned, and `stretch` cleans the 3x3 block
//! around it. A line of whitespace-separated instructions drives the robot; see
//! [`Interpreter`].

// PEAS - Performance, Environment, Action, Sensing
//
// The robot is the Environment, the instruction script is the Agent, and the number of cleaned
// cells is the performance measure.

use num_traits::Unsigned;

pub mod board;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod interpreter;
pub mod robot;

pub use board::Board;
pub use command::{parse_instructions, Command};
pub use config::{BoundaryPolicy, RobotConfig, DEFAULT_COLS, DEFAULT_ROWS};
pub use direction::{Direction, Position};
pub use error::RobotError;
pub use interpreter::{Interpreter, RunReport, ScriptedAgent};
pub use robot::{IRobot, RobotPercept};

/// An Agent acts in a Performance, Environment, Action, Sensing (PEAS) cycle.
/// For a given Perception, the Agent will return an Action, or `None` once it has nothing
/// left to do.
///
/// Notice that the Agent is not aware of an Environment, it's only interface
/// is the Perception coming in then the Action going out.
pub trait Agent {
    /// What the agent asks the environment to do.
    type Action;

    /// What the agent observes.
    type Percept;

    /// Choose the next action.
    fn act(&mut self, percept: &Self::Percept) -> Option<Self::Action>;
}

/// An Environment runs a single Agent in a Performance, Environment, Action, Sensing (PEAS) cycle.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    /// Actions the environment accepts.
    type Action;

    /// Observations the environment hands out.
    type Percept;

    /// Performance measure.
    type Score: Unsigned + Copy;

    /// Why an action could not be carried out.
    type Error;

    /// Observe the current state.
    fn percept(&self) -> Self::Percept;

    /// Apply one action. A failed action may leave partial effects behind; there is no rollback.
    fn execute_action(&mut self, action: &Self::Action) -> Result<(), Self::Error>;

    /// Returns the score of the Environment. This is not cumulative or stateful. This is the score
    /// of the Environment at the current state.
    fn score(&self) -> Self::Score;
}

/// A Simulation runs a single Agent in multiple Performance, Environment, Action, Sensing (PEAS)
/// cycles, until the Agent is done or `max_steps` actions have been executed.
///
/// The Simulation is aware of both the Environment and the single Agent. Notice that the Agent's
/// generic Action and Percept come from the Environment.
pub struct Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    environment: _Environment,
    agent: _Agent,
    max_steps: usize,
    steps: usize,
}

impl<_Environment, _Agent> Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    /// Couple an environment with an agent.
    pub fn new(environment: _Environment, agent: _Agent, max_steps: usize) -> Self {
        Self {
            environment,
            agent,
            max_steps,
            steps: 0,
        }
    }

    /// Run one percept, act, execute cycle. Returns the executed action, or `None` when the
    /// simulation is over.
    pub fn step(&mut self) -> Result<Option<_Environment::Action>, _Environment::Error> {
        if self.steps >= self.max_steps {
            return Ok(None);
        }
        let percept = self.environment.percept();
        let action = match self.agent.act(&percept) {
            Some(action) => action,
            None => return Ok(None),
        };
        self.environment.execute_action(&action)?;
        self.steps += 1;
        Ok(Some(action))
    }

    /// Step until the simulation is over.
    pub fn run(&mut self) -> Result<(), _Environment::Error> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// Actions executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current score of the environment.
    pub fn score(&self) -> <_Environment as Environment>::Score {
        self.environment.score()
    }

    /// The environment being simulated.
    pub fn environment(&self) -> &_Environment {
        &self.environment
    }

    /// Consume the simulation, keeping the environment.
    pub fn into_environment(self) -> _Environment {
        self.environment
    }
}
