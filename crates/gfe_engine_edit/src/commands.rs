//! Key input and the editor commands bound to it.
//!
//! Keys arrive as names: single characters (`i`, `D`, `>`), the named keys
//! `Right`, `Left`, `Up`, `Down`, `Next`, `Prior` and `space`, pointer clicks
//! as `click X Y` in grid cells and the toolbar actions `load`, `save`,
//! `saveas`, `import`, `new`, `export`, `presentation` and `oled`.

use std::fmt;
use std::str::FromStr;

use gfe_engine::EngineError;

/// Toolbar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Load,
    Save,
    SaveAs,
    Import,
    New,
    Export,
    Presentation,
    ExportOled,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Load,
        Action::Save,
        Action::SaveAs,
        Action::Import,
        Action::New,
        Action::Export,
        Action::Presentation,
        Action::ExportOled,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Save => "save",
            Action::SaveAs => "saveas",
            Action::Import => "import",
            Action::New => "new",
            Action::Export => "export",
            Action::Presentation => "presentation",
            Action::ExportOled => "oled",
        }
    }
}

/// A single key press, click or toolbar action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Up,
    Down,
    /// Page down
    Next,
    /// Page up
    Prior,
    Space,
    Char(char),
    /// Pointer click on an edit grid cell
    Click { x: i32, y: i32 },
    Action(Action),
    /// Any other key name, kept for reporting
    Other(String),
}

impl FromStr for Key {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EngineError::generic("empty key name"));
        }
        let mut words = s.split_whitespace();
        if words.next() == Some("click") {
            let mut coords = words.map(str::parse::<i32>);
            return match (coords.next(), coords.next(), coords.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => Ok(Key::Click { x, y }),
                _ => Err(EngineError::generic(format!("invalid click '{s}', expected 'click X Y'"))),
            };
        }

        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(ch));
        }
        let key = match s {
            "Right" => Key::Right,
            "Left" => Key::Left,
            "Up" => Key::Up,
            "Down" => Key::Down,
            "Next" => Key::Next,
            "Prior" => Key::Prior,
            "space" => Key::Space,
            _ => match Action::ALL.iter().find(|action| action.name() == s) {
                Some(action) => Key::Action(*action),
                None => Key::Other(s.to_string()),
            },
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Right => write!(f, "Right"),
            Key::Left => write!(f, "Left"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Next => write!(f, "Next"),
            Key::Prior => write!(f, "Prior"),
            Key::Space => write!(f, "space"),
            Key::Char(ch) => write!(f, "{ch}"),
            Key::Click { x, y } => write!(f, "click {x} {y}"),
            Key::Action(action) => write!(f, "{}", action.name()),
            Key::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Everything the editor can do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor { dx: i32, dy: i32 },
    NextChar,
    PrevChar,
    TogglePixel,
    Click { x: i32, y: i32 },
    Invert,
    Clear,
    SetMark,
    Copy,
    Paste,
    Double,
    ShiftUp,
    ShiftDown,
    RotateLeft,
    RotateRight,
    GrowHeight,
    ShrinkHeight,
    GrowWidth,
    ShrinkWidth,
    NextSample,
    AddSample,
    SaveAndQuit,
    Quit,
    Action(Action),
}

impl Command {
    /// Look up the command bound to a key.
    pub fn from_key(key: &Key) -> Option<Self> {
        let command = match key {
            Key::Right => Command::MoveCursor { dx: 1, dy: 0 },
            Key::Left => Command::MoveCursor { dx: -1, dy: 0 },
            Key::Up => Command::MoveCursor { dx: 0, dy: -1 },
            Key::Down => Command::MoveCursor { dx: 0, dy: 1 },
            Key::Next | Key::Char('>') => Command::NextChar,
            Key::Prior | Key::Char('<') => Command::PrevChar,
            Key::Space => Command::TogglePixel,
            Key::Click { x, y } => Command::Click { x: *x, y: *y },
            Key::Action(action) => Command::Action(*action),
            Key::Char(ch) => match ch {
                'i' => Command::Invert,
                'z' => Command::Clear,
                'm' => Command::SetMark,
                'c' => Command::Copy,
                'p' => Command::Paste,
                'D' => Command::Double,
                'u' => Command::ShiftUp,
                'd' => Command::ShiftDown,
                'l' => Command::RotateLeft,
                'r' => Command::RotateRight,
                'T' => Command::GrowHeight,
                'S' => Command::ShrinkHeight,
                'W' => Command::GrowWidth,
                'N' => Command::ShrinkWidth,
                's' => Command::NextSample,
                'a' => Command::AddSample,
                'q' => Command::SaveAndQuit,
                'Q' => Command::Quit,
                _ => return None,
            },
            Key::Other(_) => return None,
        };
        Some(command)
    }
}
