use std::fmt::Display;

use crate::bits::Word;
use crate::decoder::DecodeError;
use crate::table::{OpcodeTable, PLACEHOLDER};

/// Substitute every `$X` in `pattern` with field `X` of `word`.
pub fn render(pattern: &str, word: Word, table: &OpcodeTable) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != PLACEHOLDER {
            out.push(c);
            continue;
        }
        // Tables reject dangling and undefined placeholders when built;
        // any other pattern keeps such tokens verbatim.
        let Some(symbol) = chars.next() else {
            out.push(PLACEHOLDER);
            break;
        };
        match table.field(symbol) {
            Some(spec) => out.push_str(&spec.render(word)?),
            None => {
                out.push(PLACEHOLDER);
                out.push(symbol);
            }
        }
    }
    Ok(out)
}

/// One line of batch output: `[d001] -> MOV.L @(1, PC), R0`.
pub fn fmt_line(chunk: &str, text: impl Display) -> String {
    format!("[{chunk}] -> {text}")
}
