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

//! Decdump Core Library
//!
//! Renders the raw bytes of a file as a decimal transcript: one row per
//! fixed-size chunk, every byte right-aligned in a three character field and
//! followed by `", "`. The read loop always finishes with an empty row, so a
//! complete transcript ends with a blank line.
//!
//! ```no_run
//! use decdump_core::{ByteDumper, DumpConfig};
//!
//! let dumper = ByteDumper::new(DumpConfig::default())?;
//! let stdout = std::io::stdout();
//! dumper.dump_file("firmware.bin", stdout.lock())?;
//! # Ok::<(), decdump_core::DumpError>(())
//! ```

pub mod chunk;
pub mod config;
pub mod dumper;
pub mod error;
pub mod format;

pub use chunk::{ChunkReader, ReadState};
pub use config::{DEFAULT_CHUNK_SIZE, DumpConfig, MAX_CHUNK_SIZE};
pub use dumper::{ByteDumper, DumpSummary};
pub use error::{DumpError, Result};
pub use format::{FIELD_WIDTH, SEPARATOR, format_row, write_row};
