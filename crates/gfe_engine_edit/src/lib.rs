//! Editing layer of the gfe bitmap font editor.
//!
//! [`FontEditState`] owns the font being edited together with the scratch
//! copy of the active glyph, the cursor, the copy mark and the clipboard.
//! [`Editor`] maps key input to [`Command`]s, runs them against the state and
//! reports back through a [`Presenter`], which is the only seam to whatever
//! displays the editor.

mod edit_state;
pub use edit_state::*;

pub mod commands;
pub use commands::{Action, Command, Key};

mod editor;
pub use editor::*;

pub mod presenter;
pub use presenter::{HeadlessPresenter, Presenter, PresenterCall};

mod samples;
pub use samples::*;

mod session_state;
pub use session_state::*;

// Re-export the engine types used throughout the edit API
pub use gfe_engine::{EngineError, ExportLayout, Font, FontFormat, Glyph, GlyphRows, Result, GLYPH_ROWS};
