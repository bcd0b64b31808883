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

//! Argument parsing and the dump command

use anyhow::{Context, Result};
use clap::Parser;
use decdump_core::{ByteDumper, DEFAULT_CHUNK_SIZE, DumpConfig};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "decdump")]
#[command(about = "Print a file's bytes as rows of comma-separated decimal values")]
#[command(version)]
pub struct Cli {
    /// File to dump
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Bytes per output row
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Omit the blank line that ends a complete transcript
    #[arg(long)]
    pub no_trailer: bool,
}

impl Cli {
    pub fn config(&self) -> DumpConfig {
        DumpConfig::new().with_chunk_size(self.chunk_size).with_trailer(!self.no_trailer)
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let dumper = ByteDumper::new(cli.config()).context("Invalid options")?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    match dumper.dump_file(&cli.path, out) {
        Ok(summary) => {
            info!(bytes = summary.bytes, rows = summary.rows, "Dumped {}", cli.path.display());
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed early");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to dump {}", cli.path.display())),
    }
}
