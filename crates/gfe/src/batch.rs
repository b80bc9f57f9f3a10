//! Non-interactive subcommands.

use std::path::Path;

use anyhow::Context;
use gfe_engine::{formats::decode_vfnt, ExportLayout, FontLayout};
use gfe_engine_edit::{load_presentation_text, FontEditState};

use crate::Settings;

fn load_state(font: &Path) -> anyhow::Result<FontEditState> {
    let mut state = FontEditState::new();
    state.load_file(font).with_context(|| format!("Can't load {}", font.display()))?;
    Ok(state)
}

pub fn export(font: &Path, oled: bool) -> anyhow::Result<()> {
    let layout = if oled { ExportLayout::Oled } else { ExportLayout::Standard };
    let mut state = load_state(font)?;
    let written = state.export_source(layout).with_context(|| format!("{layout} export of {} failed", font.display()))?;
    println!("{}", written.display());
    Ok(())
}

pub fn import(legacy: &Path, out: &Path) -> anyhow::Result<()> {
    let mut state = FontEditState::new();
    state
        .import_legacy(legacy)
        .with_context(|| format!("Can't import {}", legacy.display()))?;
    let written = state.save_as(out)?;
    println!("{}", written.display());
    Ok(())
}

pub fn specimen(font: &Path, text_file: Option<&Path>, no_open: bool, settings: &Settings) -> anyhow::Result<()> {
    let mut state = load_state(font)?;
    let text = match text_file {
        Some(path) => Some(std::fs::read_to_string(path).with_context(|| format!("Can't read {}", path.display()))?),
        None => load_presentation_text(&settings.presentation_file),
    };
    let written = state.save_specimen(text.as_deref())?;
    println!("{}", written.display());

    if settings.open_viewer && !no_open {
        if let Err(err) = open::that(&written) {
            log::warn!("Can't open viewer for {}: {err}", written.display());
        }
    }
    Ok(())
}

pub fn info(font: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(font).with_context(|| format!("Can't read {}", font.display()))?;
    let font = decode_vfnt(&data)?;

    println!("height:  {}", font.height);
    match font.layout() {
        FontLayout::Fixed { width } => println!("layout:  fixed, {width} pixels wide"),
        FontLayout::Variable => println!("layout:  variable, up to {} pixels wide", font.max_width()),
    }
    match (font.first_defined(), font.last_defined(), font.export_range()) {
        (Some(first), Some(last), Some((begin, end))) => {
            println!("defined: {first}..{last}");
            println!("export:  {begin}..{end}");
        }
        _ => println!("defined: none"),
    }
    Ok(())
}

pub fn config(settings: &Settings, config_path: Option<&Path>, save: bool) -> anyhow::Result<()> {
    let path = config_path.map(Path::to_path_buf).or_else(Settings::config_file);
    match &path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no configuration directory"),
    }
    print!("{}", toml::to_string_pretty(settings)?);

    if save {
        let path = path.context("No configuration directory to save to")?;
        settings.store(&path)?;
        log::info!("Saved settings to {}", path.display());
    }
    Ok(())
}
