#![forbid(unsafe_code)]

use anyhow::Result;
use color_shades::{Color, ColorFormats, TextColor, best_text_color};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::PathBuf};

/// One exported shade: all display formats plus the overlay text color.
#[derive(Serialize)]
struct ShadeRecord {
    #[serde(flatten)]
    formats: ColorFormats,
    text_color: TextColor,
}

/// Serialize a shade list to a JSON file.
pub fn save_shades_json(path: impl AsRef<std::path::Path>, shades: &[Color]) -> Result<PathBuf> {
    let path = path.as_ref();
    let records: Vec<ShadeRecord> = shades
        .iter()
        .map(|&shade| ShadeRecord {
            formats: shade.formats(),
            text_color: best_text_color(shade),
        })
        .collect();

    let f = File::create(path)?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, &records)?;
    Ok(path.to_path_buf())
}
