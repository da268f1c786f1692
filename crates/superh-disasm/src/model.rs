//! Chunk sources: saved `objdump -s` output, plain hex text, raw images.
//! Each returns lines of hex text; chunking into words happens per line.

use anyhow::Result;
use std::path::Path;

/// Width of the hex area after the address column of an `objdump -s` line:
/// four groups of eight digits, each followed by a space.
const DUMP_HEX_COLUMNS: usize = 36;

const SECTION_HEADER: &str = "Contents of section ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Hex payload of an `objdump -s` listing, one entry per dump line.
/// With `section`, only that section's lines are kept.
pub fn clean_objdump(text: &str, section: Option<&str>) -> Result<Vec<String>> {
    let mut current: Option<&str> = None;
    let mut found = section.is_none();
    let mut out = Vec::new();
    for line in text.lines() {
        if let Some(name) = line.trim().strip_prefix(SECTION_HEADER) {
            let name = name.strip_suffix(':').unwrap_or(name);
            current = Some(name);
            found |= section == Some(name);
            continue;
        }
        let Some(name) = current else { continue };
        if section.is_some_and(|s| s != name) {
            continue;
        }
        if let Some(hex) = dump_line_hex(line) {
            out.push(hex);
        }
    }
    if let Some(s) = section {
        anyhow::ensure!(found, "section not found: {s}");
    }
    Ok(out)
}

fn dump_line_hex(line: &str) -> Option<String> {
    let line = line.trim_start();
    let (addr, rest) = line.split_once(' ')?;
    if addr.is_empty() || !addr.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // The ASCII column follows the hex area after two spaces.
    let area: String = rest.chars().take(DUMP_HEX_COLUMNS).collect();
    let hex: String = area
        .split("  ")
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    (!hex.is_empty()).then_some(hex)
}

/// Hex text with arbitrary whitespace; blank lines and `#` comments are skipped.
pub fn load_hex_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.split('#').next().unwrap_or_default())
        .map(|l| l.split_whitespace().collect::<String>())
        .filter(|l| !l.is_empty())
        .collect()
}

/// A raw image as one line of 16-bit words in `endian` order, after skipping `skip` bytes.
pub fn load_raw_bin(path: &Path, skip: usize, endian: Endian) -> Result<Vec<String>> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let payload = &file[skip..];
    if payload.len() % 2 != 0 {
        tracing::warn!(path = %path.display(), "odd trailing byte ignored");
    }
    let line = payload
        .chunks_exact(2)
        .map(|b| match endian {
            Endian::Big => u16::from_be_bytes([b[0], b[1]]),
            Endian::Little => u16::from_le_bytes([b[0], b[1]]),
        })
        .map(|w| format!("{w:04x}"))
        .collect::<String>();
    Ok(vec![line])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DUMP: &str = "
prog.elf:     file format elf32-sh

Contents of section .text:
 1000 d0010009 e1000009 402b0009 00000009  ....\u{e1}...@+......
 1010 000b0009                             ....
Contents of section .data:
 2000 12345678                             .4Vx
";

    #[test]
    fn objdump_all_sections() {
        let lines = clean_objdump(DUMP, None).unwrap();
        assert_eq!(
            lines,
            vec!["d0010009e1000009402b000900000009", "000b0009", "12345678"]
        );
    }

    #[test]
    fn objdump_one_section() {
        assert_eq!(clean_objdump(DUMP, Some(".data")).unwrap(), vec!["12345678"]);
        assert!(clean_objdump(DUMP, Some(".bss")).is_err());
    }

    #[test]
    fn hex_text() {
        assert_eq!(load_hex_text("d001 0009\n\n# comment\n301c # add\n"), vec!["d0010009", "301c"]);
    }

    #[test]
    fn loader_skips_and_orders_bytes() {
        let path = std::env::temp_dir().join("_superh_test_bin.bin");
        std::fs::write(&path, [0xffu8, 0x09, 0x00, 0x1c, 0x30, 0x7]).unwrap();
        assert_eq!(load_raw_bin(&path, 1, Endian::Little).unwrap(), vec!["0009301c"]);
        assert_eq!(load_raw_bin(&path, 1, Endian::Big).unwrap(), vec!["09001c30"]);
        assert!(load_raw_bin(&path, 99, Endian::Big).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
