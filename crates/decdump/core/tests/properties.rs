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

//! Transcript properties over arbitrary inputs

use decdump_core::{ByteDumper, DumpConfig};
use proptest::prelude::*;
use std::io::Cursor;

fn transcript(config: DumpConfig, bytes: &[u8]) -> String {
    let mut out = Vec::new();
    ByteDumper::new(config).unwrap().dump(Cursor::new(bytes), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Splits a row into its `"{:>3}, "` tokens.
fn tokens(line: &str) -> Vec<&str> {
    assert_eq!(line.len() % 5, 0, "row {line:?} is not a whole number of tokens");
    (0..line.len()).step_by(5).map(|i| &line[i..i + 5]).collect()
}

proptest! {
    #[test]
    fn transcript_reconstructs_input(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let text = transcript(DumpConfig::default(), &bytes);

        let mut decoded = Vec::new();
        for line in text.lines() {
            for token in tokens(line) {
                prop_assert!(token.ends_with(", "));
                decoded.push(token[..3].trim_start().parse::<u8>().unwrap());
            }
        }
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn rows_follow_chunk_layout(len in 0usize..300, chunk_size in 1usize..64) {
        let bytes = vec![0xA5u8; len];
        let text = transcript(DumpConfig::default().with_chunk_size(chunk_size), &bytes);
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), len.div_ceil(chunk_size) + 1);
        prop_assert_eq!(*lines.last().unwrap(), "");

        let data_rows = &lines[..lines.len() - 1];
        for (i, line) in data_rows.iter().enumerate() {
            let count = tokens(line).len();
            if i + 1 < data_rows.len() || len % chunk_size == 0 {
                prop_assert_eq!(count, chunk_size);
            } else {
                prop_assert_eq!(count, len % chunk_size);
            }
        }
    }
}
