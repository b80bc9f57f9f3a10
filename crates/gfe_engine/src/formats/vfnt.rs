//! Native `.vfnt` binary font format.
//!
//! Fixed, versionless layout, all fields big-endian:
//! - 4 byte magic `FONT`
//! - u16 font height
//! - 256 × u16 glyph widths, code point order
//! - 256 × 32 × u32 row masks, code point order, 32 rows per glyph
//!
//! Every file is exactly [`VFNT_FILE_SIZE`] bytes. Unused rows and bits are
//! written as they are, nothing is masked or truncated.

use std::io::{Cursor, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{EngineError, Font, Glyph, Result, GLYPH_COUNT, GLYPH_ROWS, MAX_FONT_HEIGHT, MAX_GLYPH_WIDTH, MIN_FONT_HEIGHT, MIN_GLYPH_WIDTH};

/// Magic bytes at the start of every `.vfnt` file
pub const VFNT_MAGIC: &[u8; 4] = b"FONT";

const HEADER_SIZE: usize = VFNT_MAGIC.len() + 2;
const WIDTH_TABLE_SIZE: usize = GLYPH_COUNT * 2;
const BITMAP_SIZE: usize = GLYPH_COUNT * GLYPH_ROWS * 4;

/// Exact size of a `.vfnt` file: 4 + 2 + 256×2 + 256×32×4
pub const VFNT_FILE_SIZE: usize = HEADER_SIZE + WIDTH_TABLE_SIZE + BITMAP_SIZE;

/// Serialize a font. Always returns exactly [`VFNT_FILE_SIZE`] bytes.
pub fn encode_vfnt(font: &Font) -> Vec<u8> {
    let mut data = Vec::with_capacity(VFNT_FILE_SIZE);
    // Writing into a Vec<u8> can't fail.
    let _ = write_vfnt(font, &mut data);
    data
}

fn write_vfnt(font: &Font, out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(VFNT_MAGIC)?;
    out.write_u16::<BigEndian>(font.height as u16)?;
    for glyph in &font.glyphs {
        out.write_u16::<BigEndian>(glyph.width as u16)?;
    }
    for glyph in &font.glyphs {
        for row in glyph.rows {
            out.write_u32::<BigEndian>(row)?;
        }
    }
    Ok(())
}

/// Deserialize a font.
///
/// Fails without producing anything if the length is not exactly
/// [`VFNT_FILE_SIZE`] or the magic doesn't match.
pub fn decode_vfnt(data: &[u8]) -> Result<Font> {
    if data.len() != VFNT_FILE_SIZE {
        return Err(EngineError::FontLengthMismatch {
            expected: VFNT_FILE_SIZE,
            actual: data.len(),
        });
    }
    if &data[..VFNT_MAGIC.len()] != VFNT_MAGIC {
        return Err(EngineError::MagicMismatch);
    }

    let mut reader = Cursor::new(&data[VFNT_MAGIC.len()..]);
    read_vfnt_body(&mut reader).map_err(EngineError::from)
}

fn read_vfnt_body(reader: &mut impl Read) -> std::io::Result<Font> {
    let height = reader.read_u16::<BigEndian>()?;
    let mut font = Font {
        height: clamp_field("height", height, MIN_FONT_HEIGHT, MAX_FONT_HEIGHT),
        glyphs: [Glyph::EMPTY; GLYPH_COUNT],
    };

    for glyph in &mut font.glyphs {
        let width = reader.read_u16::<BigEndian>()?;
        glyph.width = clamp_field("width", width, MIN_GLYPH_WIDTH, MAX_GLYPH_WIDTH);
    }
    for glyph in &mut font.glyphs {
        reader.read_u32_into::<BigEndian>(&mut glyph.rows)?;
    }
    Ok(font)
}

fn clamp_field(name: &str, value: u16, min: u8, max: u8) -> u8 {
    let clamped = value.clamp(min as u16, max as u16) as u8;
    if clamped as u16 != value {
        log::warn!("vfnt {name} {value} out of range, clamped to {clamped}");
    }
    clamped
}
