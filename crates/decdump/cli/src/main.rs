// Decdump
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Decdump CLI Tool
//!
//! Prints the bytes of a file as rows of right-aligned decimal values.

mod cli;

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let cli = cli::Cli::parse();

    // Printed directly so RUST_LOG cannot hide it
    if let Err(e) = cli::run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
