//! Line based terminal front end.
//!
//! Keys, prompt answers and file names are read line by line from the input;
//! the edit grid is printed as ASCII art after every command.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use gfe_engine::FontFormat;
use gfe_engine_edit::{FontEditState, Presenter, GLYPH_ROWS};
use image::RgbaImage;

/// Widest sample strip printed, in characters
const MAX_SAMPLE_COLUMNS: u32 = 160;

pub struct TerminalPresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its line break, `None` at end of input.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::error!("Error reading input: {err}");
                None
            }
        }
    }

    pub fn print_lines(&mut self, lines: &[String]) {
        for line in lines {
            let _ = writeln!(self.output, "{line}");
        }
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}: ");
        let _ = self.output.flush();
        self.read_line().filter(|answer| !answer.trim().is_empty())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn render_grid(&mut self, state: &FontEditState) {
        let ch = state.current_char();
        let width = state.current_width() as i32;
        let height = state.font_height() as i32;
        let (cx, cy) = state.cursor();

        let mut text = format!("c:{ch} '{}' w:{width} h:{height} cursor:{cx},{cy}", ch as char);
        if let Some(mark) = state.mark() {
            text.push_str(&format!(" mark:{mark}"));
        }
        text.push('\n');
        for y in 0..GLYPH_ROWS as i32 {
            for x in 0..GLYPH_ROWS as i32 {
                let set = state.pixel(x, y);
                text.push(match (set, (x, y) == (cx, cy), x < width && y < height) {
                    (true, true, _) => '@',
                    (false, true, _) => '+',
                    (true, false, _) => '#',
                    (false, false, true) => '.',
                    (false, false, false) => ' ',
                });
            }
            text.push('\n');
        }
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
    }

    fn render_sample(&mut self, image: &RgbaImage) {
        let lit = |x: u32, y: u32| image.get_pixel(x, y).0[..3] != [0, 0, 0];
        let columns = (0..image.width())
            .rev()
            .find(|&x| (0..image.height()).any(|y| lit(x, y)))
            .map_or(0, |x| x + 1)
            .min(MAX_SAMPLE_COLUMNS);

        for y in 0..image.height() {
            let row: String = (0..columns).map(|x| if lit(x, y) { '#' } else { ' ' }).collect();
            let _ = writeln!(self.output, "{}", row.trim_end());
        }
    }

    fn show_status(&mut self, message: &str) {
        let _ = writeln!(self.output, "> {message}");
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.output, "! Error: {message}");
    }

    fn prompt_text(&mut self, prompt: &str, default: &str) -> Option<String> {
        if default.is_empty() {
            self.ask(prompt)
        } else {
            self.ask(&format!("{prompt} [{default}]")).or_else(|| Some(default.to_string()))
        }
    }

    fn choose_open_path(&mut self, title: &str, format: FontFormat) -> Option<PathBuf> {
        self.ask(&format!("{title} {format}")).map(PathBuf::from)
    }

    fn choose_save_path(&mut self, title: &str, format: FontFormat) -> Option<PathBuf> {
        self.ask(&format!("{title} {format}")).map(PathBuf::from)
    }

    fn open_image(&mut self, path: &Path) {
        if let Err(err) = open::that(path) {
            log::warn!("Can't open viewer for {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter(input: &str) -> TerminalPresenter<&[u8], Vec<u8>> {
        TerminalPresenter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_grid_marks_cursor_and_area() {
        let mut state = FontEditState::new();
        state.set_pixel(1, 0, true);
        let mut term = presenter("");
        term.render_grid(&state);

        let text = String::from_utf8(term.output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "c:65 'A' w:8 h:16 cursor:0,0");
        assert_eq!(lines[1], format!("+#......{}", " ".repeat(24)));
        assert_eq!(lines[17], " ".repeat(32));
    }

    #[test]
    fn test_prompts_read_lines() {
        let mut term = presenter("hello\n\nfont.vfnt\r\n");
        assert_eq!(term.prompt_text("Text", ""), Some("hello".to_string()));
        assert_eq!(term.prompt_text("Text", "dflt"), Some("dflt".to_string()));
        assert_eq!(term.choose_open_path("Select file", FontFormat::Vfnt), Some(PathBuf::from("font.vfnt")));
        assert_eq!(term.read_line(), None);
    }
}
