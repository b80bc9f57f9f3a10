use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use gfe_engine_edit::{load_guide, Editor, FontEditState, Key, Presenter, SampleTexts, SessionState};
use lazy_static::lazy_static;
use semver::Version;

mod batch;
mod settings;
mod terminal;

pub use settings::Settings;
use terminal::TerminalPresenter;

lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

#[derive(Parser, Debug)]
#[command(version, about = "Bitmap font editor for embedded displays", long_about = None)]
pub struct Args {
    /// Settings file to use instead of the one in the configuration directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Font file to open on startup
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit interactively, reading one key name per line from stdin (default)
    Edit,
    /// Write C source for a font next to it
    Export {
        font: PathBuf,
        /// Column packed 8 row bands for OLED controllers
        #[arg(long)]
        oled: bool,
    },
    /// Convert a raw 8 pixel wide font to .vfnt
    Import { legacy: PathBuf, out: PathBuf },
    /// Render the specimen sheet of a font as PNG
    Specimen {
        font: PathBuf,
        /// Text printed below the glyph grid
        #[arg(long, value_name = "FILE")]
        text: Option<PathBuf>,
        /// Don't open the image viewer
        #[arg(long)]
        no_open: bool,
    },
    /// Print height, layout and defined range of a font
    Info { font: PathBuf },
    /// Print the effective settings
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn start_logger() -> Option<LoggerHandle> {
    let Some(log_dir) = get_log_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let logger = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("gfe").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("gfe.log"))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    });
    match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn run_editor(path: Option<&Path>, settings: &Settings) -> anyhow::Result<()> {
    let guide = load_guide(&settings.guide_file).context("The interactive editor needs its key guide")?;
    let samples = SampleTexts::load(&settings.samples_file);

    let mut state = FontEditState::new();
    if let Some(session) = SessionState::load(&settings.state_file) {
        session.apply(&mut state);
    }

    let mut presenter = TerminalPresenter::stdio();
    if let Some(path) = path {
        if let Err(err) = state.load_file(path) {
            log::error!("{err}");
            presenter.show_error(&err.to_string());
        }
    }
    presenter.print_lines(&guide);

    let mut editor = Editor::new(state, presenter, samples, settings.editor_options());
    editor.redraw();
    while editor.is_running() {
        let Some(line) = editor.presenter_mut().read_line() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Key>() {
            Ok(key) => editor.handle_key(&key),
            Err(err) => editor.presenter_mut().show_status(&err.to_string()),
        }
    }

    let session = SessionState::capture(editor.state());
    session.save(&settings.state_file)?;
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::load(args.config.as_deref());
    match args.command.unwrap_or(Command::Edit) {
        Command::Edit => run_editor(args.path.as_deref(), &settings),
        Command::Export { font, oled } => batch::export(&font, oled),
        Command::Import { legacy, out } => batch::import(&legacy, &out),
        Command::Specimen { font, text, no_open } => batch::specimen(&font, text.as_deref(), no_open, &settings),
        Command::Info { font } => batch::info(&font),
        Command::Config { save } => batch::config(&settings, args.config.as_deref(), save),
    }
}

fn main() {
    let args = Args::parse();
    let logger = start_logger();
    log::info!("Starting gfe {}", *VERSION);

    let result = run(args);
    if let Err(err) = &result {
        // Errors reach stderr through the logger when it is running
        log::error!("{err:#}");
        if logger.is_none() {
            eprintln!("Error: {err:#}");
        }
    }
    drop(logger);
    if result.is_err() {
        std::process::exit(1);
    }
}
