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

//! Chunked reading
//!
//! [`ChunkReader`] fills a reusable buffer from any [`Read`] source the way a
//! blocking `fread` does: it keeps reading until the buffer is full or the
//! source reports end-of-file. A short chunk therefore means the source is
//! nearly or fully drained, and the first empty chunk ends the stream.

use std::io::{self, Read};
use tracing::trace;

use crate::error::{DumpError, Result};

/// Reader state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// More chunks may follow
    Reading,
    /// The terminating empty chunk (or an error) has been returned
    Done,
}

pub struct ChunkReader<R> {
    reader: R,
    buffer: Vec<u8>,
    state: ReadState,
    bytes_read: u64,
    /// Error hit after part of a chunk was filled, reported on the next call
    pending: Option<io::Error>,
}

impl<R: Read> ChunkReader<R> {
    /// Panics if `chunk_size` is zero; use [`crate::DumpConfig::validate`] first.
    /// The whole buffer is allocated here, so callers should bound `chunk_size`.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            reader,
            buffer: vec![0; chunk_size],
            state: ReadState::Reading,
            bytes_read: 0,
            pending: None,
        }
    }

    /// Returns the next chunk.
    ///
    /// Every chunk is `chunk_size` bytes long except the last data-bearing
    /// one, which holds whatever remained. After the data runs out one empty
    /// chunk is returned, then `None` from then on.
    ///
    /// A read error after some bytes of a chunk were filled yields those bytes
    /// first; the error follows on the next call and ends the stream without
    /// the empty chunk.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        if let Some(source) = self.pending.take() {
            self.state = ReadState::Done;
            return Err(DumpError::Read { offset: self.bytes_read, source });
        }
        if self.state == ReadState::Done {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) if filled == 0 => {
                    self.state = ReadState::Done;
                    return Err(DumpError::Read { offset: self.bytes_read, source });
                }
                Err(source) => {
                    self.pending = Some(source);
                    break;
                }
            }
        }

        self.bytes_read += filled as u64;
        if filled == 0 {
            self.state = ReadState::Done;
        }
        trace!(filled, total = self.bytes_read, "chunk read");

        Ok(Some(&self.buffer[..filled]))
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Total bytes returned so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
