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

//! Row formatting

use std::io::{self, Write};

/// Minimum width of each rendered byte value
pub const FIELD_WIDTH: usize = 3;

/// Written after every value, including the last one on a row
pub const SEPARATOR: &str = ", ";

/// Writes one transcript row: each byte as `{:>3}, ` followed by a newline.
///
/// An empty slice writes a lone `\n`.
pub fn write_row<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for byte in bytes {
        write!(out, "{byte:>FIELD_WIDTH$}{SEPARATOR}")?;
    }
    out.write_all(b"\n")
}

pub fn format_row(bytes: &[u8]) -> String {
    let mut row = Vec::with_capacity(bytes.len() * (FIELD_WIDTH + SEPARATOR.len()) + 1);
    // Writing into a Vec cannot fail
    let _ = write_row(&mut row, bytes);
    String::from_utf8_lossy(&row).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[] => "\n" ; "empty row")]
    #[test_case(&[0] => "  0, \n" ; "zero")]
    #[test_case(&[7] => "  7, \n" ; "one digit")]
    #[test_case(&[42] => " 42, \n" ; "two digits")]
    #[test_case(&[255] => "255, \n" ; "three digits")]
    #[test_case(&[0, 255, 10] => "  0, 255,  10, \n" ; "mixed widths")]
    fn test_format_row(bytes: &[u8]) -> String {
        format_row(bytes)
    }

    #[test]
    fn test_full_row_token_count() {
        let bytes: Vec<u8> = (0..32).collect();
        let row = format_row(&bytes);
        assert_eq!(row.matches(SEPARATOR).count(), 32);
        assert_eq!(row.len(), 32 * 5 + 1);
        assert!(row.starts_with("  0,   1,   2, "));
        assert!(row.ends_with(" 31, \n"));
    }

    #[test]
    fn test_write_row_propagates_errors() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let error = write_row(&mut Closed, &[1, 2, 3]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
