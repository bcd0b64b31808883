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

//! Error types for the dump pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DumpError>;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Read failed at byte offset {offset}: {source}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write transcript: {0}")]
    Write(#[source] io::Error),

    #[error("Invalid chunk size: {0} (must be between 1 and {max})", max = crate::config::MAX_CHUNK_SIZE)]
    InvalidChunkSize(usize),
}

impl DumpError {
    /// True when the transcript consumer went away (e.g. `decdump f | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, DumpError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
