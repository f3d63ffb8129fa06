//! Text encoding detection for `.strings` and source files.
//!
//! Xcode writes `.strings` files as UTF-16 with a BOM by default, while
//! source files are almost always plain UTF-8. Detection looks at the first
//! two bytes only; anything without a UTF-16 BOM is treated as UTF-8.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Detect the encoding of the file at `path` from its first two bytes.
///
/// Files shorter than two bytes are UTF-8. `FF FE` is UTF-16LE (this is also
/// the byte pattern of the endianness-unspecified UTF-16 BOM), `FE FF` is
/// UTF-16BE, everything else is UTF-8.
pub fn detect(path: &Path) -> Result<Encoding> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut bom = [0u8; 2];
    match file.read_exact(&mut bom) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(Encoding::Utf8),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    }

    Ok(match bom {
        [0xFF, 0xFE] => Encoding::Utf16Le,
        [0xFE, 0xFF] => Encoding::Utf16Be,
        _ => Encoding::Utf8,
    })
}

/// Read the file at `path` into a `String`, decoding per [`detect`].
///
/// Any I/O or decode failure is an error; a single bad file aborts the run.
pub fn read_to_string(path: &Path) -> Result<String> {
    let encoding = detect(path)?;
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    decode(&bytes, encoding).with_context(|| format!("Failed to decode file: {}", path.display()))
}

fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => Ok(String::from_utf8(bytes.to_vec())?),
        Encoding::Utf16Le => decode_utf16(&bytes[2..], u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(&bytes[2..], u16::from_be_bytes),
    }
}

fn decode_utf16(content: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    if content.len() % 2 != 0 {
        bail!("truncated UTF-16 data ({} bytes after BOM)", content.len());
    }
    let units: Vec<u16> = content
        .chunks_exact(2)
        .map(|chunk| from_bytes([chunk[0], chunk[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}
