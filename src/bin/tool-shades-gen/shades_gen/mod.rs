//! Palette preview generation: one basic and one tinted palette from the
//! configured base color, written as HTML grids and JSON exports.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod html;
mod json_io;

use anyhow::Result;
use color_shades::{config::ToolConfig, generate_shades};
use html::write_html_grid;
use json_io::save_shades_json;

use std::{env, fs, path::PathBuf};

const GRID_COLS: usize = 5;

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-shades-gen");
    fs::create_dir_all(&out_dir)?;

    let config = ToolConfig::load();

    let basic = generate_shades(&config.basic_request())?;
    let basic_html_path = write_html_grid(
        &format!("Basic shades of {} (Lab scale)", config.base_color),
        GRID_COLS,
        &basic,
        out_dir.join("shades_basic.html"),
    )?;
    let basic_json_path = save_shades_json(out_dir.join("shades_basic.json"), &basic)?;

    let tinted = generate_shades(&config.tinted_request())?;
    let tinted_html_path = write_html_grid(
        &format!(
            "Tinted neutrals (hue={}°, mod={})",
            config.hue, config.saturation_mod
        ),
        GRID_COLS,
        &tinted,
        out_dir.join("shades_tinted.html"),
    )?;
    let tinted_json_path = save_shades_json(out_dir.join("shades_tinted.json"), &tinted)?;

    println!(
        "Generated shade previews in {}:\n  - {}\n  - {}\n  - {}\n  - {}",
        out_dir.display(),
        basic_html_path.display(),
        basic_json_path.display(),
        tinted_html_path.display(),
        tinted_json_path.display()
    );

    Ok(())
}
