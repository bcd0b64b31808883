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

//! Dump configuration

use crate::error::{DumpError, Result};

/// Bytes per transcript row unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Largest accepted chunk size (1 MiB). The read buffer is allocated up front.
pub const MAX_CHUNK_SIZE: usize = 1 << 20;

/// Settings for a single dump run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpConfig {
    /// Number of bytes read and rendered per row
    pub chunk_size: usize,
    /// Emit the blank row produced by the final zero-length read
    pub trailer: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            trailer: true,
        }
    }
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_trailer(mut self, trailer: bool) -> Self {
        self.trailer = trailer;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(DumpError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}
