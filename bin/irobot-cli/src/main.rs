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

//! Reads one line of robot instructions and prints the cleaned board.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use irobot::{BoundaryPolicy, Interpreter, RobotConfig};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "irobot", version, about = "Grid-cleaning robot simulator")]
struct Cli {
    /// Instructions to run. When omitted, one line is read from stdin.
    instructions: Vec<String>,

    /// What happens when a move would leave the board.
    #[arg(long, value_enum, default_value_t = Boundary::Clamp)]
    boundary: Boundary,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Boundary {
    /// Stop at the edge.
    Clamp,
    /// Abort the run.
    Reject,
    /// Keep going, clean nothing off the board.
    Skip,
}

impl From<Boundary> for BoundaryPolicy {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Clamp => BoundaryPolicy::Clamp,
            Boundary::Reject => BoundaryPolicy::Reject,
            Boundary::Skip => BoundaryPolicy::Skip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Diagnostics and the board as text.
    Text,
    /// The run report as JSON.
    Json,
}

// Logs go to stderr so stdout only carries the board.
fn init_logging() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn read_instructions(cli: &Cli) -> Result<String> {
    if !cli.instructions.is_empty() {
        return Ok(cli.instructions.join(" "));
    }

    if cli.format == Format::Text {
        let mut stdout = io::stdout().lock();
        write!(stdout, "Instructions: ")?;
        stdout.flush()?;
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read instructions from stdin")?;
    Ok(line)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let instructions = read_instructions(&cli)?;

    let config = RobotConfig {
        boundary: cli.boundary.into(),
        ..RobotConfig::default()
    };
    info!(?config, "starting run");

    let text = cli.format == Format::Text;
    let report = Interpreter::new(config)
        .run(&instructions, |token| {
            if text {
                println!("Unknown command {}, ignoring... ", token);
            }
        })
        .context("robot run failed")?;

    match cli.format {
        Format::Text => println!("{}", report),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["irobot"]).expect("parse failed");
        assert!(cli.instructions.is_empty());
        assert_eq!(cli.boundary, Boundary::Clamp);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn test_positional_instructions_are_joined() {
        let cli = Cli::try_parse_from(["irobot", "on", "right", "2", "stretch"])
            .expect("parse failed");
        assert_eq!(
            read_instructions(&cli).expect("read failed"),
            "on right 2 stretch"
        );
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["irobot", "--boundary", "skip", "--format", "json", "5"])
            .expect("parse failed");
        assert_eq!(BoundaryPolicy::from(cli.boundary), BoundaryPolicy::Skip);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.instructions, vec!["5"]);
    }

    #[test]
    fn test_unknown_boundary_is_rejected() {
        assert!(Cli::try_parse_from(["irobot", "--boundary", "wrap"]).is_err());
    }
}
