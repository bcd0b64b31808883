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

//! ByteDumper: the read-format loop

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::chunk::ChunkReader;
use crate::config::DumpConfig;
use crate::error::{DumpError, Result};
use crate::format::write_row;

/// Totals for a finished dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Input bytes rendered
    pub bytes: u64,
    /// Lines written, including the blank terminator
    pub rows: u64,
}

/// Writes decimal transcripts of byte sources
#[derive(Debug, Clone, Default)]
pub struct ByteDumper {
    config: DumpConfig,
}

impl ByteDumper {
    pub fn new(config: DumpConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Opens `path` and dumps its contents to `out`.
    ///
    /// The file is opened before anything is written, so a missing or
    /// unreadable input produces [`DumpError::Open`] and an empty transcript.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn dump_file<P: AsRef<Path>, W: Write>(&self, path: P, out: W) -> Result<DumpSummary> {
        let path = path.as_ref();
        let file = open_input(path)?;
        info!("Dumping {}", path.display());
        self.dump(file, out)
    }

    /// Dumps everything `reader` yields to `out`, one row per chunk.
    ///
    /// Rows already written stay valid when reading fails part way; `out` is
    /// flushed on both paths.
    pub fn dump<R: Read, W: Write>(&self, reader: R, mut out: W) -> Result<DumpSummary> {
        let mut chunks = ChunkReader::new(reader, self.config.chunk_size);
        let mut rows = 0;

        let outcome = self.write_rows(&mut chunks, &mut out, &mut rows);
        let flushed = out.flush().map_err(DumpError::Write);
        outcome?;
        flushed?;

        let summary = DumpSummary {
            bytes: chunks.bytes_read(),
            rows,
        };
        debug!(bytes = summary.bytes, rows = summary.rows, "Dump complete");
        Ok(summary)
    }

    fn write_rows<R: Read, W: Write>(&self, chunks: &mut ChunkReader<R>, out: &mut W, rows: &mut u64) -> Result<()> {
        while let Some(chunk) = chunks.next_chunk()? {
            if chunk.is_empty() && !self.config.trailer {
                break;
            }
            write_row(out, chunk).map_err(DumpError::Write)?;
            *rows += 1;
        }
        Ok(())
    }
}

fn open_input(path: &Path) -> Result<File> {
    let open_error = |source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    // Directories open fine on unix but fail on the first read
    if file.metadata().map_err(open_error)?.is_dir() {
        return Err(open_error(io::Error::new(io::ErrorKind::InvalidInput, "is a directory")));
    }
    Ok(file)
}
