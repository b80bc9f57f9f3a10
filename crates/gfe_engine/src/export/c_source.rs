//! C source generation for embedded firmware.
//!
//! Output references the `FONT` descriptor type from `font.h`:
//!
//! ```c
//! const FONT name_font = {
//!  first,last,
//!  height,width,        // width is 0 for variable fonts
//!  widths,              // NULL for fixed fonts
//!  {bitmaps...}
//! };
//! ```

use std::fmt::Write;

use crate::{Font, FontLayout};

use super::{packing, ExportLayout};

/// Header providing the `FONT` descriptor type
pub const FONT_HEADER: &str = "font.h";

/// Renders the defined range of a font as C tables.
pub struct SourceWriter<'a> {
    font: &'a Font,
    name: &'a str,
    layout: ExportLayout,
    first: u8,
    last: u8,
}

impl<'a> SourceWriter<'a> {
    pub fn new(font: &'a Font, name: &'a str, layout: ExportLayout, first: u8, last: u8) -> Self {
        Self {
            font,
            name,
            layout,
            first,
            last,
        }
    }

    fn codes(&self) -> impl Iterator<Item = u8> {
        self.first..=self.last
    }

    fn glyph_lines(&self, code: u8) -> Vec<Vec<u8>> {
        let glyph = self.font.glyph(code);
        let height = self.font.render_height();
        match self.layout {
            ExportLayout::Standard => packing::pack_standard(glyph, height),
            ExportLayout::Oled => packing::pack_oled(glyph, height),
        }
    }

    fn write_lines(out: &mut String, lines: &[Vec<u8>]) {
        for line in lines {
            for byte in line {
                let _ = write!(out, "0x{byte:02x},");
            }
            out.push_str("\n  ");
        }
    }

    /// Generate the complete source file.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#include \"{FONT_HEADER}\"");
        out.push('\n');

        match self.font.layout() {
            FontLayout::Fixed { width } => {
                self.write_shared_bitmaps(&mut out);
                self.write_fixed_descriptor(&mut out, width);
            }
            FontLayout::Variable => {
                self.write_glyph_bitmaps(&mut out);
                self.write_widths(&mut out);
                self.write_variable_descriptor(&mut out);
            }
        }
        out
    }

    /// One table shared by all glyphs.
    fn write_shared_bitmaps(&self, out: &mut String) {
        let _ = write!(out, "uint8_t const {}_bitmaps[] PROGMEM = {{\n  ", self.name);
        for code in self.codes() {
            if self.layout == ExportLayout::Standard {
                let _ = write!(out, "// 0x{code:02x}\n  ");
            }
            Self::write_lines(out, &self.glyph_lines(code));
        }
        out.push_str("\n};\n");
    }

    /// One table per glyph.
    fn write_glyph_bitmaps(&self, out: &mut String) {
        for code in self.codes() {
            let _ = write!(out, "uint8_t const {}_bitmaps_{code}[] PROGMEM = {{\n  ", self.name);
            Self::write_lines(out, &self.glyph_lines(code));
            out.push_str("\n};\n");
        }
    }

    fn write_widths(&self, out: &mut String) {
        let _ = writeln!(out, "uint8_t const {}_widths[] PROGMEM = {{", self.name);
        for code in self.codes() {
            let _ = writeln!(out, "  {},", self.font.glyph(code).width);
        }
        out.push_str("};\n\n");
    }

    fn write_fixed_descriptor(&self, out: &mut String, width: u8) {
        let _ = writeln!(out, "const FONT {}_font = {{", self.name);
        let _ = writeln!(out, " {},{},", self.first, self.last);
        let _ = writeln!(out, " {},{},", self.font.height, width);
        out.push_str(" NULL,\n");
        let _ = writeln!(out, " {{{}_bitmaps}}", self.name);
        out.push_str("};\n");
    }

    fn write_variable_descriptor(&self, out: &mut String) {
        let _ = writeln!(out, "const FONT {}_font = {{", self.name);
        let _ = writeln!(out, " {},{},", self.first, self.last);
        let _ = writeln!(out, " {},0,", self.font.height);
        let _ = writeln!(out, " {}_widths,", self.name);
        out.push_str(" {\n");
        for code in self.codes() {
            let _ = writeln!(out, "  {}_bitmaps_{code},", self.name);
        }
        out.push_str(" }\n");
        out.push_str("};\n");
    }
}
